// In memory implementation of the TodoStore port.
//
// Responsibilities
// - Keep todos in a map keyed by id behind a single reader-writer lock.
// - Reads share the lock; every mutation holds it exclusively for its whole
//   check-and-mutate sequence.

use crate::modules::todos::core::ports::{TodoStore, TodoStoreError};
use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::create_todo::command::CreateTodo;
use crate::modules::todos::use_cases::delete_todo::command::DeleteTodo;
use crate::modules::todos::use_cases::update_todo::command::UpdateTodo;
use crate::shared::core::primitives::{Clock, IdGenerator, SystemClock, UuidV7Generator};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub struct InMemoryTodoStore {
    todos: RwLock<HashMap<String, Todo>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::with_capabilities(Arc::new(UuidV7Generator), Arc::new(SystemClock))
    }

    pub fn with_capabilities(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            todos: RwLock::new(HashMap::new()),
            ids,
            clock,
        }
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create(&self, command: CreateTodo) -> Todo {
        let todo = Todo {
            id: self.ids.next_id(),
            title: command.title,
            completed: false,
            created_at: self.clock.now(),
        };
        self.todos
            .write()
            .await
            .insert(todo.id.clone(), todo.clone());

        info!(id = %todo.id, title = %todo.title, "created todo");
        todo
    }

    async fn list(&self) -> Vec<Todo> {
        let todos: Vec<Todo> = self.todos.read().await.values().cloned().collect();
        info!(count = todos.len(), "listed todos");
        todos
    }

    async fn update(&self, command: UpdateTodo) -> Result<Todo, TodoStoreError> {
        let mut guard = self.todos.write().await;
        let Some(todo) = guard.get_mut(&command.id) else {
            warn!(id = %command.id, "update rejected, todo not found");
            return Err(TodoStoreError::NotFound { id: command.id });
        };
        todo.title = command.title;
        todo.completed = command.completed;

        info!(id = %todo.id, title = %todo.title, completed = todo.completed, "updated todo");
        Ok(todo.clone())
    }

    async fn delete(&self, command: DeleteTodo) -> Result<(), TodoStoreError> {
        let mut guard = self.todos.write().await;
        if guard.remove(&command.id).is_none() {
            warn!(id = %command.id, "delete rejected, todo not found");
            return Err(TodoStoreError::NotFound { id: command.id });
        }

        info!(id = %command.id, "deleted todo");
        Ok(())
    }
}
