use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::vo::{JobIdentifier, JobState};

/// One job as the scheduler reported it at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobIdentifier,
    pub state: JobState,
    /// May be truncated by the scheduler's fixed-width columns.
    pub name: String,
    /// Kept in the scheduler's own format.
    pub elapsed_time: String,
    pub owner: Option<String>,
}

impl AsRef<JobIdentifier> for JobRecord {
    fn as_ref(&self) -> &JobIdentifier {
        &self.id
    }
}

impl From<&JobRecord> for JobIdentifier {
    fn from(record: &JobRecord) -> Self {
        record.id.clone()
    }
}

impl fmt::Display for JobRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10} {:>20}         {}   {}",
            self.id.id(),
            self.name,
            self.state,
            self.elapsed_time
        )
    }
}
