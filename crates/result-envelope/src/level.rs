use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Criticality of a single diagnostic event, ordered `Info < Warn < Error`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Aggregate outcome of a result envelope, ordered `Ok < Warn < Error`.
///
/// Positions line up with [`Severity`]; see [`Status::escalate`].
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Ok,
    Warn,
    Error,
}

/// Returned when parsing a name that is not a severity or status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseLevelError {
    #[error("Unknown severity: {value}")]
    UnknownSeverity { value: String },

    #[error("Unknown status: {value}")]
    UnknownStatus { value: String },
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warn, Severity::Error];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Ok, Status::Warn, Status::Error];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Status> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warn => "WARN",
            Status::Error => "ERROR",
        }
    }

    /// Returns the status after observing an event of `severity`.
    ///
    /// The severity maps to the status at the same position; the result is
    /// whichever of the two is more critical, so status never de-escalates.
    pub fn escalate(self, severity: Severity) -> Status {
        let candidate = Status::from(severity);
        if candidate.ordinal() > self.ordinal() {
            candidate
        } else {
            self
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    pub fn is_warn(self) -> bool {
        self == Status::Warn
    }

    pub fn is_error(self) -> bool {
        self == Status::Error
    }
}

impl From<Severity> for Status {
    // Positional, not by name: INFO has no same-named status.
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Status::Ok,
            Severity::Warn => Status::Warn,
            Severity::Error => Status::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError::UnknownSeverity {
                value: s.to_string(),
            })
    }
}

impl FromStr for Status {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError::UnknownStatus {
                value: s.to_string(),
            })
    }
}
