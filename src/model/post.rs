
use crate::model::ModelManager;

/// Stored shape. Carries no id; identity comes from position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub car: String,
    pub manufacturer: String,
}

impl PostRecord {
    pub fn new(car: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            car: car.into(),
            manufacturer: manufacturer.into(),
        }
    }
}

/// A record annotated with its position at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: usize,
    pub car: String,
    pub manufacturer: String,
}

impl Post {
    pub fn from_record(id: usize, record: PostRecord) -> Self {
        Self {
            id,
            car: record.car,
            manufacturer: record.manufacturer,
        }
    }
}

#[derive(Debug)]
pub struct PostForUpsert {
    pub id: Option<i64>,
    pub car: String,
    pub manufacturer: String,
}

pub struct PostBmc;

impl PostBmc {
    pub async fn get(mm: &ModelManager, id: i64) -> Option<Post> {
        mm.store().read().await.get(id)
    }

    pub async fn list(mm: &ModelManager) -> Vec<Post> {
        mm.store().read().await.list()
    }

    pub async fn upsert(mm: &ModelManager, post_u: PostForUpsert) -> Post {
        let PostForUpsert { id, car, manufacturer } = post_u;
        mm.store()
            .write()
            .await
            .upsert(id, PostRecord::new(car, manufacturer))
    }
}
