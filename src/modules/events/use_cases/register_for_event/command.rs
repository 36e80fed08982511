#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForEvent {
    pub event_id: String,
    pub name: String,
    pub email: String,
}
