//! In-memory, positionally addressed record storage.
//!
//! A record's id is its current index in the backing `Vec`. It is not a
//! stable key: it shifts whenever earlier records move, so it cannot be
//! carried over to a persistent store as-is.

use super::post::{Post, PostRecord};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<PostRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<PostRecord>) -> Self {
        Self { records }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            PostRecord::new("Echo", "Toyota"),
            PostRecord::new("Optra", "Chevrolet"),
            PostRecord::new("Rio", "Kia"),
        ])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Absent when `id` is negative or past the end.
    pub fn get(&self, id: i64) -> Option<Post> {
        let idx = usize::try_from(id).ok()?;
        self.records
            .get(idx)
            .map(|record| Post::from_record(idx, record.clone()))
    }

    pub fn list(&self) -> Vec<Post> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| Post::from_record(idx, record.clone()))
            .collect()
    }

    /// Replaces in place when `id` addresses an existing record, otherwise
    /// appends. An out-of-range id appends instead of failing.
    pub fn upsert(&mut self, id: Option<i64>, record: PostRecord) -> Post {
        let in_range = id
            .and_then(|id| usize::try_from(id).ok())
            .filter(|idx| *idx < self.records.len());

        let idx = match in_range {
            Some(idx) => {
                debug!("{:<12} - replace at {idx}", "STORE");
                self.records[idx] = record.clone();
                idx
            }
            None => {
                let idx = self.records.len();
                debug!("{:<12} - append at {idx} (requested {id:?})", "STORE");
                self.records.push(record.clone());
                idx
            }
        };

        Post::from_record(idx, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order() {
        let store = RecordStore::seeded();
        let posts = store.list();

        assert_eq!(posts.len(), 3);
        let ids: Vec<usize> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(posts[0].manufacturer, "Toyota");
        assert_eq!(posts[1].manufacturer, "Chevrolet");
        assert_eq!(posts[2].manufacturer, "Kia");
        assert_eq!(posts[0].car, "Echo");
    }

    #[test]
    fn test_get_bounds() {
        let store = RecordStore::seeded();

        assert_eq!(store.get(-1), None);
        assert_eq!(store.get(3), None);
        assert_eq!(store.get(i64::MAX), None);
        assert_eq!(store.get(i64::MIN), None);

        for id in 0..3 {
            let post = store.get(id).expect("in range");
            assert_eq!(post.id as i64, id);
        }
        assert_eq!(store.get(2).map(|p| p.car), Some("Rio".to_string()));
    }

    #[test]
    fn test_upsert_in_range_replaces() {
        let mut store = RecordStore::seeded();

        let post = store.upsert(Some(1), PostRecord::new("Camaro", "Chevrolet"));

        assert_eq!(post.id, 1);
        assert_eq!(store.len(), 3);
        let fetched = store.get(1).expect("replaced record");
        assert_eq!(fetched, post);
        assert_eq!(fetched.car, "Camaro");
        assert_eq!(store.get(0).map(|p| p.car), Some("Echo".to_string()));
    }

    #[test]
    fn test_upsert_absent_id_appends() {
        let mut store = RecordStore::seeded();

        let post = store.upsert(None, PostRecord::new("Civic", "Honda"));

        assert_eq!(post.id, 3);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(3), Some(post));
    }

    #[test]
    fn test_upsert_out_of_range_appends() {
        let mut store = RecordStore::seeded();
        let n = store.len() as i64;

        let post = store.upsert(Some(n + 5), PostRecord::new("Civic", "Honda"));

        assert_eq!(post.id, 3);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(n + 5), None);
    }

    #[test]
    fn test_upsert_negative_appends() {
        let mut store = RecordStore::seeded();

        let post = store.upsert(Some(-1), PostRecord::new("Model 3", "Tesla"));

        assert_eq!(post.id, 3);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(0).map(|p| p.manufacturer), Some("Toyota".to_string()));
    }

    #[test]
    fn test_upsert_at_len_appends() {
        let mut store = RecordStore::seeded();

        let post = store.upsert(Some(3), PostRecord::new("Golf", "Volkswagen"));

        assert_eq!(post.id, 3);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_upsert_stores_only_car_and_manufacturer() {
        let mut store = RecordStore::seeded();

        store.upsert(Some(1), PostRecord::new("X", "Y"));

        assert_eq!(store.records[1], PostRecord::new("X", "Y"));
    }

    #[test]
    fn test_reads_are_idempotent() {
        let store = RecordStore::seeded();

        assert_eq!(store.list(), store.list());
        assert_eq!(store.get(1), store.get(1));
        assert_eq!(store, RecordStore::seeded());
    }

    #[test]
    fn test_empty_store() {
        let mut store = RecordStore::default();

        assert_eq!(store.len(), 0);
        assert_eq!(store.get(0), None);
        assert!(store.list().is_empty());

        let post = store.upsert(Some(0), PostRecord::new("Rio", "Kia"));
        assert_eq!(post.id, 0);
        assert_eq!(store.len(), 1);
    }
}
