// The event store port. Events and their registrations live behind one
// store so the capacity check and the registration append share a lock.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::Event;
use crate::modules::events::core::registration::Registration;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::register_for_event::command::RegisterForEvent;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventStoreError {
    #[error("event not found: {event_id}")]
    NotFound { event_id: String },

    #[error("event is full: {event_id}")]
    Full { event_id: String, capacity: u32 },
}

impl From<EventStoreError> for ApplicationError {
    fn from(error: EventStoreError) -> Self {
        match error {
            EventStoreError::NotFound { .. } => ApplicationError::NotFound(error.to_string()),
            EventStoreError::Full { .. } => ApplicationError::FailedPrecondition(error.to_string()),
        }
    }
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create_event(&self, command: CreateEvent) -> Event;

    /// All events, in no particular order.
    async fn list_events(&self) -> Vec<Event>;

    /// Fails with `Full` once `registered_count` has reached `capacity`.
    async fn register(&self, command: RegisterForEvent) -> Result<Registration, EventStoreError>;

    /// Registrations in the order they were accepted.
    async fn registrations(&self, event_id: &str) -> Result<Vec<Registration>, EventStoreError>;
}
