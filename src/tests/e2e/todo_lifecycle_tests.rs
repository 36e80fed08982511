use crate::modules::todos::core::ports::{TodoStore, TodoStoreError};
use crate::modules::todos::use_cases::create_todo::command::CreateTodo;
use crate::modules::todos::use_cases::delete_todo::command::DeleteTodo;
use crate::modules::todos::use_cases::update_todo::command::UpdateTodo;
use crate::tests::fixtures::state::make_test_state;

#[tokio::test]
async fn creates_completes_and_deletes_a_todo() {
    let state = make_test_state();

    let todo = state
        .todos
        .create(CreateTodo {
            title: "Buy milk".into(),
        })
        .await;
    assert!(!todo.id.is_empty());
    assert!(!todo.completed);

    let updated = state
        .todos
        .update(UpdateTodo {
            id: todo.id.clone(),
            title: "Buy milk".into(),
            completed: true,
        })
        .await
        .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.created_at, todo.created_at);

    let delete = DeleteTodo {
        id: todo.id.clone(),
    };
    state.todos.delete(delete.clone()).await.unwrap();
    assert!(state.todos.list().await.iter().all(|t| t.id != todo.id));
    assert_eq!(
        state.todos.delete(delete).await,
        Err(TodoStoreError::NotFound { id: todo.id })
    );
}

#[tokio::test]
async fn update_after_delete_reports_not_found() {
    let state = make_test_state();
    let todo = state
        .todos
        .create(CreateTodo {
            title: "Walk dog".into(),
        })
        .await;
    state
        .todos
        .delete(DeleteTodo {
            id: todo.id.clone(),
        })
        .await
        .unwrap();

    let result = state
        .todos
        .update(UpdateTodo {
            id: todo.id.clone(),
            title: "Walk dog".into(),
            completed: true,
        })
        .await;

    assert_eq!(result, Err(TodoStoreError::NotFound { id: todo.id }));
    assert!(state.todos.list().await.is_empty());
}
