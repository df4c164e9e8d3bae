//! Persistence boundary.
//!
//! The HTTP layer never talks to a concrete storage backend; it goes through
//! the [`AnalysisStore`] trait, which exposes exactly the capability set the
//! service needs: filtered find, lookup by value, create-if-absent, delete by
//! value. The default backend is the in-memory [`memory::MemoryStore`].

pub mod memory;

use crate::analyzer::AnalysisResult;
use crate::query::StringFilter;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same content hash already exists. Carries the
    /// existing record so the caller can report what it collided with.
    #[error("a string with the same content already exists")]
    Duplicate(Box<StringRecord>),
    /// Backend failure unrelated to the request itself.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// A persisted string analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringRecord {
    /// Record identity: the content hash of the trimmed value. Also the
    /// uniqueness key.
    pub id: String,
    /// The original input string, unmodified.
    pub value: String,
    /// Derived properties, immutable once computed.
    pub properties: AnalysisResult,
    /// Assigned at creation, never updated.
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Build a record from an input value and its analysis. The content hash
    /// becomes the record id.
    pub fn new(value: impl Into<String>, properties: AnalysisResult) -> Self {
        Self {
            id: properties.sha256_hash.clone(),
            value: value.into(),
            properties,
            created_at: Utc::now(),
        }
    }
}

/// Repository capability set for stored analyses.
///
/// `create` must be atomic create-if-absent keyed on the record id, so two
/// concurrent submissions of equivalent content cannot both succeed.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Insert a record if no record with the same id exists, otherwise fail
    /// with [`StoreError::Duplicate`] carrying the existing record.
    async fn create(&self, record: StringRecord) -> Result<StringRecord, StoreError>;

    /// All records whose properties satisfy the filter, oldest first.
    async fn find(&self, filter: &StringFilter) -> Result<Vec<StringRecord>, StoreError>;

    /// Look up a record by its exact original value.
    async fn find_by_value(&self, value: &str) -> Result<Option<StringRecord>, StoreError>;

    /// Delete a record by its exact original value. Returns whether a record
    /// was removed.
    async fn delete_by_value(&self, value: &str) -> Result<bool, StoreError>;
}
