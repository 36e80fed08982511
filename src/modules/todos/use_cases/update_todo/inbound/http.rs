use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::update_todo::command::UpdateTodo;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::connect::ConnectError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct UpdateTodoResponse {
    pub todo: Todo,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<UpdateTodoResponse>, ConnectError> {
    let Json(body) = body?;
    let todo = state
        .todos
        .update(UpdateTodo {
            id: body.id,
            title: body.title,
            completed: body.completed,
        })
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(UpdateTodoResponse { todo }))
}
