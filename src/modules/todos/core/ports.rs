// The todo store port. Inbound adapters code against this trait; the
// in-memory adapter is the only implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::create_todo::command::CreateTodo;
use crate::modules::todos::use_cases::delete_todo::command::DeleteTodo;
use crate::modules::todos::use_cases::update_todo::command::UpdateTodo;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoStoreError {
    #[error("todo not found: {id}")]
    NotFound { id: String },
}

impl From<TodoStoreError> for ApplicationError {
    fn from(error: TodoStoreError) -> Self {
        match error {
            TodoStoreError::NotFound { .. } => ApplicationError::NotFound(error.to_string()),
        }
    }
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn create(&self, command: CreateTodo) -> Todo;

    /// All todos, in no particular order.
    async fn list(&self) -> Vec<Todo>;

    async fn update(&self, command: UpdateTodo) -> Result<Todo, TodoStoreError>;

    async fn delete(&self, command: DeleteTodo) -> Result<(), TodoStoreError>;
}

#[cfg(test)]
mod todo_store_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_classify_not_found() {
        let error = TodoStoreError::NotFound { id: "t-1".into() };
        assert_eq!(
            ApplicationError::from(error),
            ApplicationError::NotFound("todo not found: t-1".into())
        );
    }
}
