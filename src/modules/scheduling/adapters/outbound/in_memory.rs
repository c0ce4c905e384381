// In memory implementation of the event and availability repositories.
//
// Purpose
// - Run the service and its tests without the hosted backend.
//
// Responsibilities
// - Keep events keyed by id and availability entries in submission order.
// - Drop an event's entries when the event is deleted.
// - Fail every call while toggled offline.

use std::collections::HashMap;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::modules::scheduling::adapters::outbound::repositories::{
    AvailabilityRepository, EventRepository, StoreError,
};
use crate::modules::scheduling::core::event::{AvailabilityEntry, Event};

#[derive(Default)]
pub struct InMemoryStore {
    events: RwLock<HashMap<String, Event>>,
    entries: RwLock<Vec<AvailabilityEntry>>,
    is_offline: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend(format!("{what} store offline")));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, event: Event) -> Result<(), StoreError> {
        self.ensure_online("Event")?;
        let mut guard = self.events.write().await;
        if guard.contains_key(&event.id) {
            return Err(StoreError::Backend(format!("duplicate event id {}", event.id)));
        }
        guard.insert(event.id.clone(), event);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, StoreError> {
        self.ensure_online("Event")?;
        Ok(self.events.read().await.get(id).cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Event>, StoreError> {
        self.ensure_online("Event")?;
        let mut events: Vec<Event> = self.events.read().await.values().cloned().collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        events.truncate(limit);
        Ok(events)
    }

    async fn set_decided_date(
        &self,
        id: &str,
        date: Option<NaiveDate>,
    ) -> Result<(), StoreError> {
        self.ensure_online("Event")?;
        let mut guard = self.events.write().await;
        let event = guard
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        event.decided_date = date;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.ensure_online("Event")?;
        if self.events.write().await.remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.entries.write().await.retain(|entry| entry.event_id != id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl AvailabilityRepository for InMemoryStore {
    async fn add(&self, entry: AvailabilityEntry) -> Result<(), StoreError> {
        self.ensure_online("Availability")?;
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<AvailabilityEntry>, StoreError> {
        self.ensure_online("Availability")?;
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.event_id == event_id)
            .cloned()
            .collect())
    }
}
