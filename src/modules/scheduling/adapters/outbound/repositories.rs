// Ports describing what the scheduling use cases need from the backing store.
//
// The hosted backend owns persistence; these traits are the whole contract the
// application relies on. Handlers receive implementations explicitly so tests
// can swap in the in-memory adapter.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::scheduling::core::event::{AvailabilityEntry, Event};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: Event) -> Result<(), StoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, StoreError>;
    /// Newest `created_at` first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Event>, StoreError>;
    async fn set_decided_date(&self, id: &str, date: Option<NaiveDate>)
    -> Result<(), StoreError>;
    /// Removes the event together with its availability entries.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn add(&self, entry: AvailabilityEntry) -> Result<(), StoreError>;
    /// Entries in the order they were added.
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<AvailabilityEntry>, StoreError>;
}
