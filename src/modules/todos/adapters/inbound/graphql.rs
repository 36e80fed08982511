use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::create_todo::command::CreateTodo;
use crate::modules::todos::use_cases::delete_todo::command::DeleteTodo;
use crate::modules::todos::use_cases::update_todo::command::UpdateTodo;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Todo")]
pub struct GqlTodo {
    pub id: ID,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}

impl From<Todo> for GqlTodo {
    fn from(todo: Todo) -> Self {
        Self {
            id: ID(todo.id),
            title: todo.title,
            completed: todo.completed,
            created_at: todo.created_at.to_rfc3339(),
        }
    }
}

#[derive(Default)]
pub struct TodoQuery;

#[Object]
impl TodoQuery {
    async fn todos(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTodo>> {
        let state = context.data_unchecked::<AppState>();
        let todos = state.todos.list().await;
        Ok(todos.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct TodoMutation;

#[Object]
impl TodoMutation {
    async fn create_todo(&self, context: &Context<'_>, title: String) -> GqlResult<GqlTodo> {
        let state = context.data_unchecked::<AppState>();
        let todo = state.todos.create(CreateTodo { title }).await;
        Ok(todo.into())
    }

    async fn update_todo(
        &self,
        context: &Context<'_>,
        id: ID,
        title: String,
        completed: bool,
    ) -> GqlResult<GqlTodo> {
        let state = context.data_unchecked::<AppState>();
        let todo = state
            .todos
            .update(UpdateTodo {
                id: id.0,
                title,
                completed,
            })
            .await
            .map_err(|e| ApplicationError::from(e).extend())?;
        Ok(todo.into())
    }

    async fn delete_todo(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .todos
            .delete(DeleteTodo { id: id.0 })
            .await
            .map_err(|e| ApplicationError::from(e).extend())?;
        Ok(true)
    }
}
