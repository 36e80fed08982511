use crate::modules::events::use_cases::register_for_event::command::RegisterForEvent;

pub struct RegisterForEventBuilder {
    inner: RegisterForEvent,
}

#[allow(dead_code)]
impl RegisterForEventBuilder {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            inner: RegisterForEvent {
                event_id: event_id.into(),
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            },
        }
    }

    /// Sets the name and derives a matching email address.
    pub fn attendee(mut self, name: &str) -> Self {
        self.inner.email = format!("{}@example.com", name.to_lowercase());
        self.inner.name = name.to_string();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> RegisterForEvent {
        self.inner
    }
}

#[cfg(test)]
mod register_for_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn attendee_sets_name_and_email() {
        let command = RegisterForEventBuilder::new("event-0001")
            .attendee("Bob")
            .build();

        assert_eq!(command.event_id, "event-0001");
        assert_eq!(command.name, "Bob");
        assert_eq!(command.email, "bob@example.com");
    }
}
