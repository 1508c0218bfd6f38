use std::time::Duration;

use async_trait::async_trait;

use crate::{
    exception::SchedulerResult,
    model::{
        entity::JobRecord,
        vo::{JobFilter, JobIdentifier, ScriptHandle},
    },
};

#[async_trait]
pub trait JobControlService: Send + Sync {
    /// Submit an already staged script. Every call creates a new job.
    async fn submit(&self, script: &ScriptHandle) -> SchedulerResult<JobIdentifier>;

    /// Status of exactly one job. Fails with `JobNotFound` once the job has
    /// left the scheduler table.
    async fn query(&self, id: &JobIdentifier) -> SchedulerResult<JobRecord>;

    /// Jobs of one user, empty when the user has none.
    async fn query_user(&self, owner: &str) -> SchedulerResult<Vec<JobRecord>>;

    /// Every job visible to the invoking credential.
    async fn query_all(&self) -> SchedulerResult<Vec<JobRecord>>;

    async fn query_with(&self, filter: &JobFilter) -> SchedulerResult<Vec<JobRecord>>;

    /// Send the cancellation command. Whether the job actually went away is
    /// not checked.
    async fn cancel(&self, id: &JobIdentifier) -> SchedulerResult<()>;

    /// Poll until the job is gone from the scheduler table.
    async fn wait(
        &self,
        id: &JobIdentifier,
        poll_interval: Duration,
        max_wait: Option<Duration>,
    ) -> SchedulerResult<()>;

    /// Host part of the signature the scheduler appends to new job ids, found
    /// by submitting and cancelling a throwaway script.
    async fn discover_signature(&self) -> SchedulerResult<String>;
}
