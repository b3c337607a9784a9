use crate::envelope::ResultEnvelope;
use crate::event::Event;

pub struct ResultEnvelopeBuilder<T> {
    data: Option<T>,
    events: Vec<Event>,
}

impl<T> Default for ResultEnvelopeBuilder<T> {
    fn default() -> Self {
        Self {
            data: None,
            events: Vec::new(),
        }
    }
}

impl<T> ResultEnvelopeBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn add_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn add_events<I>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        self.events.extend(events);
        self
    }

    pub fn add_info(self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_event(Event::info(key, message))
    }

    pub fn add_warning(self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_event(Event::warn(key, message))
    }

    pub fn add_error(self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_event(Event::error(key, message))
    }

    pub fn build(self) -> ResultEnvelope<T> {
        let mut envelope = ResultEnvelope::from_parts(self.data);
        envelope.add_events(self.events);
        envelope
    }
}

impl<T> ResultEnvelope<T> {
    pub fn builder() -> ResultEnvelopeBuilder<T> {
        ResultEnvelopeBuilder::new()
    }
}
