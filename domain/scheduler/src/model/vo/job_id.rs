use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A scheduler job id such as `123.hostA.cluster`.
///
/// Two identifiers are the same job iff their bare ids match; the signature
/// only tells which server or submission batch a job belongs to.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct JobIdentifier {
    id: String,
    signature: Option<String>,
}

impl JobIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            signature: None,
        }
    }

    pub fn with_signature(id: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            signature: Some(signature.into()),
        }
    }

    /// Split a composite id on its first `.`.
    /// The trailing line terminator is not part of the signature.
    pub fn parse(composite: &str) -> Self {
        let composite = composite.trim_end_matches(['\r', '\n']);
        match composite.split_once('.') {
            Some((id, signature)) => Self::with_signature(id, signature),
            None => Self::new(composite),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// First component of the signature, e.g. `hostA` for `hostA.cluster`.
    pub fn host(&self) -> Option<&str> {
        self.signature.as_deref().and_then(|s| s.split('.').next())
    }

    /// The same job without its signature.
    pub fn bare(&self) -> Self {
        Self::new(self.id.clone())
    }
}

impl PartialEq for JobIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for JobIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for JobIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for JobIdentifier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for JobIdentifier {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
