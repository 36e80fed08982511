use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::todos::core::todo::Todo;
use crate::shared::infrastructure::connect::ConnectError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListTodosRequest {}

#[derive(Debug, Serialize)]
pub struct ListTodosResponse {
    pub todos: Vec<Todo>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ListTodosRequest>, JsonRejection>,
) -> Result<Json<ListTodosResponse>, ConnectError> {
    let Json(ListTodosRequest {}) = body?;
    Ok(Json(ListTodosResponse {
        todos: state.todos.list().await,
    }))
}
