use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::todos::adapters::outbound::todo_store_in_memory::InMemoryTodoStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::primitives::{FixedClock, SequentialIdGenerator};
use std::sync::Arc;

/// Stores with deterministic ids: `todo-0001...`, `event-0001...`, `reg-0001...`.
pub fn make_test_state() -> AppState {
    let todos = InMemoryTodoStore::with_capabilities(
        Arc::new(SequentialIdGenerator::new("todo")),
        Arc::new(FixedClock::epoch()),
    );
    let events = InMemoryEventStore::with_capabilities(
        Arc::new(SequentialIdGenerator::new("event")),
        Arc::new(SequentialIdGenerator::new("reg")),
    );
    AppState::new(Arc::new(todos), Arc::new(events))
}
