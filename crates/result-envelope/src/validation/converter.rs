use crate::envelope::ResultEnvelope;
use crate::event::Event;
use crate::level::Severity;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::debug;

/// A failed field check reported by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    /// Path of the offending property, e.g. `string` or `address.zip`.
    pub property: String,
    /// Name of the failed constraint, e.g. `NotNull` or `Min`.
    pub constraint: String,
    pub message: String,
    /// Violations flagged as warnings become WARN events instead of ERROR.
    #[serde(default)]
    pub warning: bool,
}

impl ConstraintViolation {
    pub fn error(
        property: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            constraint: constraint.into(),
            message: message.into(),
            warning: false,
        }
    }

    pub fn warning(
        property: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            warning: true,
            ..Self::error(property, constraint, message)
        }
    }

    pub fn severity(&self) -> Severity {
        if self.warning {
            Severity::Warn
        } else {
            Severity::Error
        }
    }

    /// Event key: the property path immediately followed by the constraint name.
    pub fn key(&self) -> String {
        format!("{}{}", self.property, self.constraint)
    }

    pub fn to_event(&self) -> Event {
        self.clone().into()
    }
}

impl From<ConstraintViolation> for Event {
    fn from(violation: ConstraintViolation) -> Self {
        let key = violation.key();
        Event::new(violation.severity(), key, violation.message)
    }
}

/// Converts validator output into a data-less [`ResultEnvelope<U>`].
pub struct ViolationConverter<U> {
    _data: PhantomData<fn() -> U>,
}

impl<U> Default for ViolationConverter<U> {
    fn default() -> Self {
        Self { _data: PhantomData }
    }
}

impl<U> ViolationConverter<U> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convert<I>(&self, violations: I) -> ResultEnvelope<U>
    where
        I: IntoIterator<Item = ConstraintViolation>,
    {
        let events: Vec<Event> = violations.into_iter().map(Event::from).collect();
        if events.is_empty() {
            return ResultEnvelope::new();
        }

        debug!(violations = events.len(), "Converting constraint violations");
        let mut envelope = ResultEnvelope::new();
        envelope.add_events(events);
        envelope
    }
}
