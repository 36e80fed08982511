use serde::{Deserialize, Serialize};

/// A capacity-bounded happening people can register for. `date` is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub capacity: u32,
    pub registered_count: u32,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }
}
