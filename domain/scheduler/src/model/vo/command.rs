use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::JobIdentifier;

/// Text a remote command printed, split into lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl CommandOutput {
    /// Decode raw process output, replacing invalid UTF-8.
    pub fn from_bytes(stdout: &[u8], stderr: &[u8]) -> Self {
        let split = |bytes: &[u8]| {
            String::from_utf8_lossy(bytes).lines().map(str::to_owned).collect::<Vec<_>>()
        };
        Self {
            stdout: split(stdout),
            stderr: split(stderr),
        }
    }

    /// Stdout lines followed by stderr lines.
    pub fn lines(self) -> Vec<String> {
        let mut lines = self.stdout;
        lines.extend(self.stderr);
        lines
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty()
    }
}

/// A job script already reachable by the remote submission command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptHandle {
    pub path: String,
    /// Directory the submission command runs in.
    #[serde(default)]
    pub working_dir: Option<String>,
}

impl ScriptHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            working_dir: None,
        }
    }

    pub fn in_dir(mut self, working_dir: impl Into<String>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }
}

impl fmt::Display for ScriptHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Quote `word` for a POSIX shell line. Plain paths and ids pass unchanged.
pub fn shell_quote(word: &str) -> Cow<'_, str> {
    let plain = |c: char| c.is_ascii_alphanumeric() || "_-./:@%+=,".contains(c);
    if !word.is_empty() && word.chars().all(plain) {
        return Cow::Borrowed(word);
    }
    Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
}

/// Scope of a status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFilter {
    Id(JobIdentifier),
    Owner(String),
    All,
}
