use crate::modules::events::core::ports::{EventStore, EventStoreError};
use crate::tests::fixtures::commands::create_event::CreateEventBuilder;
use crate::tests::fixtures::commands::register_for_event::RegisterForEventBuilder;
use crate::tests::fixtures::state::make_test_state;

#[tokio::test]
async fn meetup_with_one_seat_accepts_alice_and_turns_bob_away() {
    let state = make_test_state();
    let event = state
        .events
        .create_event(CreateEventBuilder::new().title("Meetup").capacity(1).build())
        .await;

    let alice = state
        .events
        .register(RegisterForEventBuilder::new(&event.id).attendee("Alice").build())
        .await
        .unwrap();
    let bob = state
        .events
        .register(RegisterForEventBuilder::new(&event.id).attendee("Bob").build())
        .await;

    assert!(matches!(bob, Err(EventStoreError::Full { capacity: 1, .. })));
    let events = state.events.list_events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].registered_count, 1);
    assert_eq!(state.events.registrations(&event.id).await, Ok(vec![alice]));
}

#[tokio::test]
async fn capacity_c_allows_exactly_c_registrations() {
    let state = make_test_state();
    let capacity = 4;
    let event = state
        .events
        .create_event(CreateEventBuilder::new().capacity(capacity).build())
        .await;

    for i in 0..capacity {
        state
            .events
            .register(
                RegisterForEventBuilder::new(&event.id)
                    .attendee(&format!("Guest{i}"))
                    .build(),
            )
            .await
            .unwrap();
    }
    let overflow = state
        .events
        .register(RegisterForEventBuilder::new(&event.id).attendee("Late").build())
        .await;

    assert!(matches!(overflow, Err(EventStoreError::Full { .. })));
    let registrations = state.events.registrations(&event.id).await.unwrap();
    assert_eq!(registrations.len(), capacity as usize);
    assert_eq!(
        state.events.list_events().await[0].registered_count,
        capacity
    );
}
