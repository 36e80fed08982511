#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub capacity: u32,
}
