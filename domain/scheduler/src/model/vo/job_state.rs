use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-letter PBS job state code.
///
/// Codes without a variant are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    Queued,
    Running,
    Completing,
    Exiting,
    Held,
    Waiting,
    Transiting,
    Suspended,
    Other(String),
}

impl JobState {
    pub fn code(&self) -> &str {
        match self {
            Self::Queued => "Q",
            Self::Running => "R",
            Self::Completing => "C",
            Self::Exiting => "E",
            Self::Held => "H",
            Self::Waiting => "W",
            Self::Transiting => "T",
            Self::Suspended => "S",
            Self::Other(code) => code,
        }
    }

    #[inline]
    pub fn is_queued(&self) -> bool {
        *self == Self::Queued
    }
}

impl From<&str> for JobState {
    fn from(code: &str) -> Self {
        match code {
            "Q" => Self::Queued,
            "R" => Self::Running,
            "C" => Self::Completing,
            "E" => Self::Exiting,
            "H" => Self::Held,
            "W" => Self::Waiting,
            "T" => Self::Transiting,
            "S" => Self::Suspended,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for JobState {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        state.code().to_owned()
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
