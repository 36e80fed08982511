use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::registration::Registration;
use crate::modules::events::use_cases::register_for_event::command::RegisterForEvent;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::connect::ConnectError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterForEventRequest {
    pub event_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterForEventResponse {
    pub registration: Registration,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterForEventRequest>, JsonRejection>,
) -> Result<Json<RegisterForEventResponse>, ConnectError> {
    let Json(body) = body?;
    let registration = state
        .events
        .register(RegisterForEvent {
            event_id: body.event_id,
            name: body.name,
            email: body.email,
        })
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(RegisterForEventResponse { registration }))
}
