use super::JobState;

/// Where a polled job is in its lifecycle as seen from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    /// Assumed right after submission, before the first observation.
    Queued,
    /// Reported with any code but `Q` at least once and still in the table.
    Active,
    /// No longer in the scheduler table, hence finished.
    Gone,
}

impl JobPhase {
    /// Next phase after a successful status query reported `state`.
    pub fn observe(self, state: &JobState) -> Self {
        match self {
            Self::Queued if state.is_queued() => Self::Queued,
            Self::Queued | Self::Active => Self::Active,
            Self::Gone => Self::Gone,
        }
    }

    /// Next phase after the status query found no such job.
    #[inline]
    pub fn disappear(self) -> Self {
        Self::Gone
    }
}
