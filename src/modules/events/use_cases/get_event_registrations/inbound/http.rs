use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::registration::Registration;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::connect::ConnectError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetEventRegistrationsRequest {
    pub event_id: String,
}

#[derive(Debug, Serialize)]
pub struct GetEventRegistrationsResponse {
    pub registrations: Vec<Registration>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<GetEventRegistrationsRequest>, JsonRejection>,
) -> Result<Json<GetEventRegistrationsResponse>, ConnectError> {
    let Json(body) = body?;
    let registrations = state
        .events
        .registrations(&body.event_id)
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(GetEventRegistrationsResponse { registrations }))
}
