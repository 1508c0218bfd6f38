use std::time::Duration;

use thiserror::Error;

use crate::model::vo::JobIdentifier;

pub type SchedulerResult<T> = Result<T, SchedulerException>;
pub type ParseResult<T> = Result<T, ParseException>;

/// Failures of the pure output parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseException {
    #[error("Bad qstat output ({reason}):\n\"{output}\"")]
    MalformedOutput { reason: String, output: String },

    #[error("Unable to parse qsub output: \"{output}\"")]
    Submission { output: String },
}

#[derive(Error, Debug)]
pub enum SchedulerException {
    #[error("Bad qstat output ({reason}):\n\"{output}\"")]
    MalformedOutput { reason: String, output: String },

    #[error("There is no job with id: {id} in the scheduler table.")]
    JobNotFound { id: JobIdentifier, output: String },

    #[error("Unable to parse qsub output: \"{output}\"")]
    SubmissionParse { output: String },

    #[error("Failed to submit {script}, qsub gave no output.")]
    EmptySubmission { script: String },

    #[error("Job {id} failed to leave the scheduler within max_wait time. max_wait={max_wait:?}")]
    WaitTimeout { id: JobIdentifier, max_wait: Duration },

    #[error("Remote command channel error: {source}")]
    Channel {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for SchedulerException {
    fn from(e: anyhow::Error) -> Self {
        SchedulerException::Channel { source: e }
    }
}

impl From<ParseException> for SchedulerException {
    fn from(e: ParseException) -> Self {
        match e {
            ParseException::MalformedOutput { reason, output } => {
                SchedulerException::MalformedOutput { reason, output }
            }
            ParseException::Submission { output } => SchedulerException::SubmissionParse { output },
        }
    }
}
