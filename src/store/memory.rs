//! In-memory store backend.

use super::{AnalysisStore, StoreError, StringRecord};
use crate::query::StringFilter;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Concurrent in-memory store keyed by record id (content hash).
///
/// Lookups by value scan the map; the store is intended for development and
/// tests, not as a durable backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<String, StringRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl AnalysisStore for MemoryStore {
    async fn create(&self, record: StringRecord) -> Result<StringRecord, StoreError> {
        // The entry API makes check-then-insert atomic per key.
        match self.records.entry(record.id.clone()) {
            Entry::Occupied(existing) => {
                Err(StoreError::Duplicate(Box::new(existing.get().clone())))
            }
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find(&self, filter: &StringFilter) -> Result<Vec<StringRecord>, StoreError> {
        let mut results: Vec<StringRecord> = self
            .records
            .iter()
            .filter(|entry| filter.matches(&entry.value().properties))
            .map(|entry| entry.value().clone())
            .collect();
        // Map iteration order is arbitrary; return oldest first.
        results.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(results)
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<StringRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .find(|entry| entry.value().value == value)
            .map(|entry| entry.value().clone()))
    }

    async fn delete_by_value(&self, value: &str) -> Result<bool, StoreError> {
        let id = self
            .records
            .iter()
            .find(|entry| entry.value().value == value)
            .map(|entry| entry.key().clone());

        match id {
            Some(id) => Ok(self.records.remove(&id).is_some()),
            None => Ok(false),
        }
    }
}
