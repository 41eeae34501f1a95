//! In-memory record store for weatherlog.
//!
//! Holds every successfully created [`WeatherRecord`] for the lifetime
//! of the process. There is no eviction, expiry, update, or delete —
//! entries live until the process exits.

mod error;

pub use error::StoreError;

use std::collections::HashMap;

use tokio::sync::RwLock;
use weatherlog_core::WeatherRecord;

/// Concurrent map from generated identifier to stored record.
///
/// Owned by the binary and shared across handlers via `Arc`. The lock
/// is only held for the duration of a single insert or clone.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<HashMap<String, WeatherRecord>>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record keyed on its own `id`. Last write wins.
    ///
    /// Keying on `record.id` keeps the map key and the record's `id`
    /// field in sync by construction.
    pub async fn put(&self, record: WeatherRecord) {
        self.records.write().await.insert(record.id.clone(), record);
    }

    /// Returns a clone of the record under `id`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no record exists under `id`.
    pub async fn get(&self, id: &str) -> Result<WeatherRecord, StoreError> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_owned() })
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    fn record(id: &str, location: &str) -> WeatherRecord {
        WeatherRecord {
            id: id.to_owned(),
            date: "2024-01-01".to_owned(),
            location: location.to_owned(),
            notes: "trip".to_owned(),
            provider_response: json!({"current": {"temperature": 12}}),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = RecordStore::new();
        store.put(record("a1", "Paris")).await;

        let found = store.get("a1").await.expect("record should exist");
        assert_eq!(found.id, "a1");
        assert_eq!(found.location, "Paris");
        assert_eq!(found.notes, "trip");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = RecordStore::new();
        let err = store.get("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "missing"));
        assert!(err.to_string().contains("missing"));
    }

    #[tokio::test]
    async fn test_put_overwrites_same_id() {
        let store = RecordStore::new();
        store.put(record("a1", "Paris")).await;
        store.put(record("a1", "Lyon")).await;

        let found = store.get("a1").await.expect("record should exist");
        assert_eq!(found.location, "Lyon");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_puts_are_independent() {
        let store = Arc::new(RecordStore::new());

        let writers: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.put(record(&format!("id-{i}"), &format!("city-{i}"))).await;
                })
            })
            .collect();
        for writer in writers {
            writer.await.expect("writer task should not panic");
        }

        assert_eq!(store.len().await, 16);
        for i in 0..16 {
            let found = store.get(&format!("id-{i}")).await.expect("record should exist");
            assert_eq!(found.location, format!("city-{i}"));
        }
    }
}
