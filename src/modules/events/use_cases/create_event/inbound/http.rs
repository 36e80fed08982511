use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::infrastructure::connect::ConnectError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub capacity: u32,
}

#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub event: Event,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<CreateEventResponse>, ConnectError> {
    let Json(body) = body?;
    let event = state
        .events
        .create_event(CreateEvent {
            title: body.title,
            description: body.description,
            date: body.date,
            capacity: body.capacity,
        })
        .await;
    Ok(Json(CreateEventResponse { event }))
}
