
pub mod post;
mod store;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

pub use self::store::RecordStore;

/// Owns the process record store. Clones share the same store; every
/// operation takes the lock for its whole duration, so operations never
/// interleave.
#[derive(Clone)]
pub struct ModelManager {
    store: Arc<RwLock<RecordStore>>,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::with_store(RecordStore::seeded())
    }

    pub fn with_store(store: RecordStore) -> Self {
        debug!("{:<12} - {} records", "STORE", store.len());
        ModelManager {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub(in crate::model) fn store(&self) -> &RwLock<RecordStore> {
        &self.store
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new()
    }
}
