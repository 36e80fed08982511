// In memory implementation of the EventStore port.
//
// Responsibilities
// - Keep events by id, and registrations per event id in acceptance order.
// - Guard both maps with one reader-writer lock so a registration checks
//   capacity, appends and bumps the counter in a single critical section.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::{EventStore, EventStoreError};
use crate::modules::events::core::registration::Registration;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::register_for_event::command::RegisterForEvent;
use crate::shared::core::primitives::{IdGenerator, UuidV7Generator};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Default)]
struct EventTables {
    events: HashMap<String, Event>,
    registrations: HashMap<String, Vec<Registration>>,
}

pub struct InMemoryEventStore {
    tables: RwLock<EventTables>,
    event_ids: Arc<dyn IdGenerator>,
    registration_ids: Arc<dyn IdGenerator>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidV7Generator);
        Self::with_capabilities(ids.clone(), ids)
    }

    pub fn with_capabilities(
        event_ids: Arc<dyn IdGenerator>,
        registration_ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            tables: RwLock::new(EventTables::default()),
            event_ids,
            registration_ids,
        }
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn create_event(&self, command: CreateEvent) -> Event {
        let event = Event {
            id: self.event_ids.next_id(),
            title: command.title,
            description: command.description,
            date: command.date,
            capacity: command.capacity,
            registered_count: 0,
        };
        self.tables
            .write()
            .await
            .events
            .insert(event.id.clone(), event.clone());

        info!(id = %event.id, title = %event.title, capacity = event.capacity, "created event");
        event
    }

    async fn list_events(&self) -> Vec<Event> {
        let events: Vec<Event> = self.tables.read().await.events.values().cloned().collect();
        info!(count = events.len(), "listed events");
        events
    }

    async fn register(&self, command: RegisterForEvent) -> Result<Registration, EventStoreError> {
        let mut guard = self.tables.write().await;
        let EventTables {
            events,
            registrations,
        } = &mut *guard;

        let Some(event) = events.get_mut(&command.event_id) else {
            warn!(event_id = %command.event_id, "registration rejected, event not found");
            return Err(EventStoreError::NotFound {
                event_id: command.event_id,
            });
        };
        if event.is_full() {
            warn!(
                event_id = %event.id,
                capacity = event.capacity,
                "registration rejected, event is full"
            );
            return Err(EventStoreError::Full {
                event_id: command.event_id,
                capacity: event.capacity,
            });
        }

        let registration = Registration {
            id: self.registration_ids.next_id(),
            event_id: command.event_id,
            name: command.name,
            email: command.email,
        };
        registrations
            .entry(registration.event_id.clone())
            .or_default()
            .push(registration.clone());
        event.registered_count += 1;

        info!(
            name = %registration.name,
            email = %registration.email,
            event = %event.title,
            "registered {}/{}",
            event.registered_count,
            event.capacity
        );
        Ok(registration)
    }

    async fn registrations(&self, event_id: &str) -> Result<Vec<Registration>, EventStoreError> {
        let guard = self.tables.read().await;
        if !guard.events.contains_key(event_id) {
            warn!(%event_id, "registrations lookup rejected, event not found");
            return Err(EventStoreError::NotFound {
                event_id: event_id.to_string(),
            });
        }
        let registrations = guard
            .registrations
            .get(event_id)
            .cloned()
            .unwrap_or_default();

        info!(%event_id, count = registrations.len(), "listed registrations");
        Ok(registrations)
    }
}
