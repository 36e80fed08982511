use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::create_todo::command::CreateTodo;
use crate::shared::infrastructure::connect::ConnectError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct CreateTodoResponse {
    pub todo: Todo,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<CreateTodoResponse>, ConnectError> {
    let Json(body) = body?;
    let todo = state.todos.create(CreateTodo { title: body.title }).await;
    Ok(Json(CreateTodoResponse { todo }))
}
