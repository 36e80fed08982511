use crate::modules::events::core::ports::EventStore;
use crate::modules::todos::core::ports::TodoStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoStore>,
    pub events: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoStore>, events: Arc<dyn EventStore>) -> Self {
        Self { todos, events }
    }
}
