
use crate::model::ModelManager;

/// Fresh seeded model per call so tests never see each other's writes.
pub fn init_test() -> ModelManager {
    ModelManager::new()
}
