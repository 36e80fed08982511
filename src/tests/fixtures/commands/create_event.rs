use crate::modules::events::use_cases::create_event::command::CreateEvent;

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateEvent {
                title: "Meetup".to_string(),
                description: "Monthly Rust meetup".to_string(),
                date: "2024-06-01".to_string(),
                capacity: 10,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn capacity(mut self, v: u32) -> Self {
        self.inner.capacity = v;
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

#[cfg(test)]
mod create_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let command = CreateEventBuilder::new()
            .title("Workshop")
            .description("Hands-on")
            .date("next friday")
            .capacity(3)
            .build();

        assert_eq!(command.title, "Workshop");
        assert_eq!(command.description, "Hands-on");
        assert_eq!(command.date, "next friday");
        assert_eq!(command.capacity, 3);
    }
}
