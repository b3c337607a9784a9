//! # Result Envelope
//!
//! A [`ResultEnvelope<T>`] pairs an optional computed value with the
//! diagnostic [`Event`]s raised while computing it. Every appended event can
//! only raise the aggregate [`Status`] (`OK` → `WARN` → `ERROR`), so callers
//! report problems as data instead of returning early.
//!
//! ## Basic Usage
//!
//! ```rust
//! use result_envelope::*;
//!
//! let mut result = ResultEnvelope::of(42);
//! result.add_event(Event::info("parsed", "Input parsed"));
//! result.add_event(Event::warn("deprecated", "Field `x` is deprecated"));
//! result.add_event(Event::info("done", "Finished"));
//!
//! assert_eq!(result.status(), Status::Warn);
//! assert_eq!(result.data(), Some(&42));
//! assert_eq!(result.events().len(), 3);
//! ```
//!
//! ## Builder Pattern
//!
//! ```rust
//! use result_envelope::*;
//!
//! let result = ResultEnvelope::builder()
//!     .data("report.csv")
//!     .add_info("rows", "120 rows read")
//!     .add_error("columnMissing", "Column `total` is missing")
//!     .build();
//!
//! assert!(result.status().is_error());
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use result_envelope::validation::{ConstraintViolation, ViolationConverter};
//! use result_envelope::validation::result::Status;
//!
//! let result = ViolationConverter::<()>::new().convert(vec![
//!     ConstraintViolation::warning("name", "NotBlank", "Name should not be blank."),
//! ]);
//!
//! assert_eq!(result.status(), Status::Warn);
//! assert_eq!(result.events()[0].key(), "nameNotBlank");
//! ```
//!
//! ## Integrity
//!
//! Deserializing recomputes `status` from the events. To reject a stored
//! status that disagrees with them instead, load strictly:
//!
//! ```rust
//! use result_envelope::*;
//! use serde_json::json;
//!
//! let tampered = json!({
//!     "status": "OK",
//!     "events": [{ "severity": "ERROR", "key": "k", "message": "m" }]
//! });
//!
//! assert!(ResultEnvelope::<()>::from_json_strict(tampered).is_err());
//! ```

mod builder;
mod envelope;
mod event;
mod integrity;
mod level;
pub mod validation;

pub use builder::*;
pub use envelope::*;
pub use event::*;
pub use integrity::*;
pub use level::*;

/// The result types under their primary namespace.
pub mod result {
    pub use crate::envelope::ResultEnvelope;
    pub use crate::event::Event;
    pub use crate::level::{ParseLevelError, Severity, Status};
}

// Re-export the derive macro
#[cfg(feature = "derive")]
pub use result_envelope_derive::IntoEnvelope;

/// Wraps a value in an OK envelope with no events.
pub trait IntoEnvelope {
    fn into_envelope(self) -> ResultEnvelope<Self>
    where
        Self: Sized;
}
