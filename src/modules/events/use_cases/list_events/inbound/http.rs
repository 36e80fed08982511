use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::connect::ConnectError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListEventsRequest {}

#[derive(Debug, Serialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ListEventsRequest>, JsonRejection>,
) -> Result<Json<ListEventsResponse>, ConnectError> {
    let Json(ListEventsRequest {}) = body?;
    Ok(Json(ListEventsResponse {
        events: state.events.list_events().await,
    }))
}
