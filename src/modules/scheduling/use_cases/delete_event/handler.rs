use std::sync::Arc;

use crate::modules::scheduling::adapters::outbound::repositories::EventRepository;
use crate::modules::scheduling::use_cases::application_error::ApplicationError;

pub struct DeleteEventHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    events: Arc<TEvents>,
}

impl<TEvents> DeleteEventHandler<TEvents>
where
    TEvents: EventRepository + 'static,
{
    pub fn new(events: Arc<TEvents>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, event_id: &str) -> Result<(), ApplicationError> {
        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(ApplicationError::NotFound(event_id.to_string()));
        }
        self.events.delete(event_id).await?;
        tracing::warn!(event_id, "event deleted");
        Ok(())
    }
}

#[cfg(test)]
mod delete_event_handler_tests {
    use super::*;
    use crate::modules::scheduling::adapters::outbound::in_memory::InMemoryStore;
    use crate::modules::scheduling::adapters::outbound::repositories::AvailabilityRepository;
    use crate::tests::fixtures::availability::entry_for;
    use crate::tests::fixtures::events::EventBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_the_event_and_its_entries() {
        let store = Arc::new(InMemoryStore::new());
        store.create(EventBuilder::new().id("ev-1").build()).await.unwrap();
        store.add(entry_for("ev-1", "Alex", &["2024-06-11"])).await.unwrap();
        let handler = DeleteEventHandler::new(store.clone());

        handler.handle("ev-1").await.expect("delete failed");

        assert_eq!(store.find_by_id("ev-1").await.unwrap(), None);
        assert!(store.list_by_event("ev-1").await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_an_unknown_event() {
        let handler = DeleteEventHandler::new(Arc::new(InMemoryStore::new()));
        let result = handler.handle("missing").await;
        assert!(matches!(result, Err(ApplicationError::NotFound(id)) if id == "missing"));
    }
}
