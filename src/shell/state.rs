use std::sync::Arc;

use crate::modules::scheduling::adapters::outbound::in_memory::InMemoryStore;
use crate::modules::scheduling::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::scheduling::use_cases::decide_date::handler::DecideDateHandler;
use crate::modules::scheduling::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::scheduling::use_cases::list_recent_events::handler::ListRecentEventsHandler;
use crate::modules::scheduling::use_cases::submit_availability::handler::SubmitAvailabilityHandler;
use crate::modules::scheduling::use_cases::view_event::handler::ViewEventHandler;
use crate::shell::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub create_event: Arc<CreateEventHandler<InMemoryStore>>,
    pub submit_availability: Arc<SubmitAvailabilityHandler<InMemoryStore, InMemoryStore>>,
    pub decide_date: Arc<DecideDateHandler<InMemoryStore>>,
    pub delete_event: Arc<DeleteEventHandler<InMemoryStore>>,
    pub view_event: Arc<ViewEventHandler<InMemoryStore, InMemoryStore>>,
    pub list_recent_events: Arc<ListRecentEventsHandler<InMemoryStore>>,
}

impl AppState {
    /// Wires every use case against the given store. The store is shared,
    /// never global, so tests hand in their own.
    pub fn new(store: Arc<InMemoryStore>, config: &Config) -> Self {
        Self {
            create_event: Arc::new(CreateEventHandler::new(store.clone())),
            submit_availability: Arc::new(SubmitAvailabilityHandler::new(
                store.clone(),
                store.clone(),
            )),
            decide_date: Arc::new(DecideDateHandler::new(store.clone())),
            delete_event: Arc::new(DeleteEventHandler::new(store.clone())),
            view_event: Arc::new(ViewEventHandler::new(
                store.clone(),
                store.clone(),
                config.top_dates,
            )),
            list_recent_events: Arc::new(ListRecentEventsHandler::new(
                store,
                config.recent_events_limit,
            )),
        }
    }
}
