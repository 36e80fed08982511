use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::events::core::event::Event;
use crate::modules::events::core::registration::Registration;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::register_for_event::command::RegisterForEvent;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Event")]
pub struct GqlEvent {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub date: String,
    pub capacity: u32,
    pub registered_count: u32,
}

impl From<Event> for GqlEvent {
    fn from(event: Event) -> Self {
        Self {
            id: ID(event.id),
            title: event.title,
            description: event.description,
            date: event.date,
            capacity: event.capacity,
            registered_count: event.registered_count,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Registration")]
pub struct GqlRegistration {
    pub id: ID,
    pub event_id: ID,
    pub name: String,
    pub email: String,
}

impl From<Registration> for GqlRegistration {
    fn from(registration: Registration) -> Self {
        Self {
            id: ID(registration.id),
            event_id: ID(registration.event_id),
            name: registration.name,
            email: registration.email,
        }
    }
}

#[derive(Default)]
pub struct EventQuery;

#[Object]
impl EventQuery {
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state.events.list_events().await;
        Ok(events.into_iter().map(Into::into).collect())
    }

    async fn event_registrations(
        &self,
        context: &Context<'_>,
        event_id: ID,
    ) -> GqlResult<Vec<GqlRegistration>> {
        let state = context.data_unchecked::<AppState>();
        let registrations = state
            .events
            .registrations(&event_id)
            .await
            .map_err(|e| ApplicationError::from(e).extend())?;
        Ok(registrations.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct EventMutation;

#[Object]
impl EventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        title: String,
        description: String,
        date: String,
        capacity: u32,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .events
            .create_event(CreateEvent {
                title,
                description,
                date,
                capacity,
            })
            .await;
        Ok(event.into())
    }

    async fn register_for_event(
        &self,
        context: &Context<'_>,
        event_id: ID,
        name: String,
        email: String,
    ) -> GqlResult<GqlRegistration> {
        let state = context.data_unchecked::<AppState>();
        let registration = state
            .events
            .register(RegisterForEvent {
                event_id: event_id.0,
                name,
                email,
            })
            .await
            .map_err(|e| ApplicationError::from(e).extend())?;
        Ok(registration.into())
    }
}
