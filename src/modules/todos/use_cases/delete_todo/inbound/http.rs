use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::todos::use_cases::delete_todo::command::DeleteTodo;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::connect::ConnectError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteTodoRequest {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteTodoRequest>, JsonRejection>,
) -> Result<Json<DeleteTodoResponse>, ConnectError> {
    let Json(body) = body?;
    state
        .todos
        .delete(DeleteTodo { id: body.id })
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(DeleteTodoResponse {}))
}
