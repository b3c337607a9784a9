use crate::envelope::ResultEnvelope;
use crate::event::Event;
use crate::level::Status;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum IntegrityError {
    #[error("Malformed envelope: {message}")]
    Malformed { message: String },

    #[error("Stored status {stored} does not match status {replayed} replayed from {events} events")]
    StatusMismatch {
        stored: Status,
        replayed: Status,
        events: usize,
    },
}

// Only the fields that determine status; `data` is not inspected.
#[derive(Deserialize)]
struct StoredStatus {
    status: Status,
    #[serde(default)]
    events: Vec<Event>,
}

/// Folds `events` through the escalation rule, starting from OK.
pub fn replay_status<'a, I>(events: I) -> Status
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .fold(Status::Ok, |status, event| status.escalate(event.severity()))
}

/// Checks that the `status` stored in a serialized envelope is the one its
/// `events` produce, returning that status.
pub fn verify_status(envelope_json: &Value) -> Result<Status, IntegrityError> {
    let stored = StoredStatus::deserialize(envelope_json).map_err(|e| IntegrityError::Malformed {
        message: e.to_string(),
    })?;

    let replayed = replay_status(&stored.events);
    if replayed != stored.status {
        warn!(
            stored = %stored.status,
            replayed = %replayed,
            "Serialized envelope status does not match its events"
        );
        return Err(IntegrityError::StatusMismatch {
            stored: stored.status,
            replayed,
            events: stored.events.len(),
        });
    }

    Ok(replayed)
}

impl<T> ResultEnvelope<T>
where
    T: DeserializeOwned,
{
    /// Deserializes an envelope, rejecting one whose stored status disagrees
    /// with its events. Plain `Deserialize` recomputes the status instead.
    pub fn from_json_strict(envelope_json: Value) -> Result<Self, IntegrityError> {
        verify_status(&envelope_json)?;
        serde_json::from_value(envelope_json).map_err(|e| IntegrityError::Malformed {
            message: e.to_string(),
        })
    }
}
