//! Validation support: turning validator output into result envelopes.

mod converter;

pub use converter::{ConstraintViolation, ViolationConverter};

/// The result types under the `validation` namespace. These are the same
/// types as [`crate::result`], not copies.
pub mod result {
    pub use crate::envelope::ResultEnvelope;
    pub use crate::event::Event;
    pub use crate::level::{ParseLevelError, Severity, Status};
}
