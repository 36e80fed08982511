/// Replaces the title and completion state of an existing todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}
