#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodo {
    pub id: String,
}
