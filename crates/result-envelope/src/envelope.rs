use crate::event::Event;
use crate::level::Status;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A computed value together with the diagnostics raised while computing it.
///
/// `status` is a watermark over the appended events: it starts at
/// [`Status::Ok`] and only ever escalates. Events are append-only and keep
/// insertion order, duplicates included. The value is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EnvelopeRepr<T>")]
pub struct ResultEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    status: Status,
    events: Vec<Event>,
}

// Incoming status is ignored and rebuilt from the events.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct EnvelopeRepr<T> {
    // A missing key is absent data; a present `null` is `Some` of a null-like `T`.
    #[serde(default, deserialize_with = "present_data")]
    data: Option<T>,
    #[serde(default)]
    events: Vec<Event>,
}

fn present_data<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> From<EnvelopeRepr<T>> for ResultEnvelope<T> {
    fn from(repr: EnvelopeRepr<T>) -> Self {
        let mut envelope = Self {
            data: repr.data,
            status: Status::Ok,
            events: Vec::with_capacity(repr.events.len()),
        };
        envelope.add_events(repr.events);
        envelope
    }
}

impl<T> Default for ResultEnvelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: Status::Ok,
            events: Vec::new(),
        }
    }
}

impl<T> ResultEnvelope<T> {
    /// Empty envelope: no data, status OK, no events.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn info(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_event(Event::info(key, message))
    }

    pub fn warn(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_event(Event::warn(key, message))
    }

    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_event(Event::error(key, message))
    }

    fn with_event(event: Event) -> Self {
        let mut envelope = Self::new();
        envelope.add_event(event);
        envelope
    }

    pub(crate) fn from_parts(data: Option<T>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_parts(self) -> (Option<T>, Status, Vec<Event>) {
        (self.data, self.status, self.events)
    }

    pub fn add_event(&mut self, event: Event) {
        let previous = self.status;
        self.status = previous.escalate(event.severity());

        if self.status != previous {
            debug!(
                from = %previous,
                to = %self.status,
                key = event.key(),
                "Result status escalated"
            );
        } else {
            trace!(severity = %event.severity(), key = event.key(), "Event added");
        }

        self.events.push(event);
    }

    /// Appends each event in iteration order, exactly as repeated
    /// [`add_event`](Self::add_event) calls would.
    pub fn add_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.add_event(event);
        }
    }
}

impl<T> Extend<Event> for ResultEnvelope<T> {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.add_events(iter);
    }
}

impl<T> FromIterator<Event> for ResultEnvelope<T> {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut envelope = Self::new();
        envelope.add_events(iter);
        envelope
    }
}

impl<T: fmt::Debug> fmt::Display for ResultEnvelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Result(data=")?;
        match &self.data {
            Some(data) => write!(f, "{data:?}")?,
            None => f.write_str("none")?,
        }
        write!(f, ", status={}, events=[", self.status)?;
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{event}")?;
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Severity;

    #[test]
    fn test_new_envelope_is_empty() {
        let envelope = ResultEnvelope::<String>::new();
        assert_eq!(envelope.data(), None);
        assert_eq!(envelope.status(), Status::Ok);
        assert!(envelope.events().is_empty());
    }

    #[test]
    fn test_of_holds_data() {
        let envelope = ResultEnvelope::of("data");
        assert_eq!(envelope.data(), Some(&"data"));
        assert_eq!(envelope.status(), Status::Ok);
        assert!(envelope.events().is_empty());
        assert_eq!(envelope.into_data(), Some("data"));
    }

    #[test]
    fn test_factories_seed_one_event() {
        let info = ResultEnvelope::<()>::info("key", "message");
        assert_eq!(info.status(), Status::Ok);
        assert_eq!(info.events(), &[Event::info("key", "message")]);

        let warn = ResultEnvelope::<()>::warn("key", "message");
        assert_eq!(warn.status(), Status::Warn);
        assert_eq!(warn.events(), &[Event::warn("key", "message")]);

        let error = ResultEnvelope::<()>::error("key", "message");
        assert_eq!(error.status(), Status::Error);
        assert_eq!(error.events(), &[Event::error("key", "message")]);
        assert_eq!(error.data(), None);
    }

    #[test]
    fn test_events_snapshot_is_detached() {
        let mut envelope = ResultEnvelope::<()>::warn("key", "message");
        let mut snapshot = envelope.events().to_vec();
        snapshot.push(Event::error("key", "message"));
        snapshot.clear();

        assert_eq!(envelope.events().len(), 1);
        assert_eq!(envelope.status(), Status::Warn);

        envelope.add_event(Event::info("key", "message"));
        assert_eq!(envelope.events().len(), 2);
    }

    #[test]
    fn test_from_iterator_and_extend_match_add_events() {
        let events = vec![
            Event::warn("a", "m"),
            Event::info("b", "m"),
            Event::warn("a", "m"),
        ];

        let collected: ResultEnvelope<()> = events.iter().cloned().collect();

        let mut extended = ResultEnvelope::<()>::new();
        extended.extend(events.clone());

        let mut added = ResultEnvelope::<()>::new();
        added.add_events(events);

        assert_eq!(collected, added);
        assert_eq!(extended, added);
        assert_eq!(added.status(), Status::Warn);
    }

    #[test]
    fn test_display() {
        let mut envelope = ResultEnvelope::of(7);
        envelope.add_event(Event::new(Severity::Warn, "k", "m"));
        assert_eq!(
            envelope.to_string(),
            "Result(data=7, status=WARN, events=[Event(severity=WARN, key=k, message=m)])"
        );
        assert_eq!(
            ResultEnvelope::<i32>::new().to_string(),
            "Result(data=none, status=OK, events=[])"
        );
    }

    #[test]
    fn test_into_parts() {
        let mut envelope = ResultEnvelope::of("value".to_string());
        envelope.add_event(Event::error("k", "m"));
        let (data, status, events) = envelope.into_parts();
        assert_eq!(data.as_deref(), Some("value"));
        assert_eq!(status, Status::Error);
        assert_eq!(events, vec![Event::error("k", "m")]);
    }
}
