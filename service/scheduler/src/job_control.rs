use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain_scheduler::{
    exception::{SchedulerException, SchedulerResult},
    model::{
        entity::JobRecord,
        vo::{shell_quote, ColumnLayout, JobFilter, JobIdentifier, JobPhase, ScriptHandle},
    },
    parser,
    service::{JobControlService, RemoteCommandChannel},
};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::config::SchedulerConfig;

/// Drives PBS through `qsub`, `qstat` and `qdel` over a command channel.
#[derive(TypedBuilder)]
pub struct JobControlServiceImpl {
    channel: Arc<dyn RemoteCommandChannel>,
    #[builder(default)]
    config: SchedulerConfig,
}

impl JobControlServiceImpl {
    /// `wait` with the poll interval and deadline from configuration.
    pub async fn wait_configured(&self, id: &JobIdentifier) -> SchedulerResult<()> {
        self.wait(id, self.config.poll_interval(), self.config.max_wait()).await
    }

    async fn call(&self, command_line: &str) -> SchedulerResult<Vec<String>> {
        debug!(command_line, "Executing scheduler command.");
        let output = self.channel.execute(command_line).await?;
        Ok(output.lines())
    }

    async fn call_qstat(
        &self,
        args: &str,
        layout: &ColumnLayout,
    ) -> SchedulerResult<Vec<JobRecord>> {
        let lines = self.call(&format!("{} {args}", self.config.qstat)).await?;
        Ok(parser::parse_table(layout, &lines)?)
    }
}

#[async_trait]
impl JobControlService for JobControlServiceImpl {
    async fn submit(&self, script: &ScriptHandle) -> SchedulerResult<JobIdentifier> {
        let qsub = format!("{} {}", self.config.qsub, shell_quote(&script.path));
        let command_line = match &script.working_dir {
            Some(dir) => format!("cd {} && {qsub}", shell_quote(dir)),
            None => qsub,
        };
        let lines = self.call(&command_line).await?;
        if lines.is_empty() {
            return Err(SchedulerException::EmptySubmission {
                script: script.path.clone(),
            });
        }

        let id = parser::parse_submission(&lines.join("\n"))?;
        info!(job_id = %id, signature = ?id.signature(), script = %script, "Job submitted.");
        Ok(id)
    }

    async fn query(&self, id: &JobIdentifier) -> SchedulerResult<JobRecord> {
        let layout = &self.config.layouts.single;
        let lines = self.call(&format!("{} {id}", self.config.qstat)).await?;
        if !layout.has_rows(lines.len())
            && parser::reports_unknown_job(&lines, &self.config.not_found_marker)
        {
            return Err(SchedulerException::JobNotFound {
                id: id.clone(),
                output: lines.join("\n"),
            });
        }

        let mut records = parser::parse_table(layout, &lines)?;
        if records.len() != 1 {
            return Err(SchedulerException::MalformedOutput {
                reason: format!(
                    "qstat id did not return the expected number of job statuses: {} != 1",
                    records.len()
                ),
                output: lines.join("\n"),
            });
        }
        let record = records.remove(0);
        if record.id != *id {
            return Err(SchedulerException::MalformedOutput {
                reason: format!("qstat job id did not match expected job id. {} != {id}", record.id),
                output: lines.join("\n"),
            });
        }
        Ok(record)
    }

    async fn query_user(&self, owner: &str) -> SchedulerResult<Vec<JobRecord>> {
        let args = format!("-u {}", shell_quote(owner));
        self.call_qstat(&args, &self.config.layouts.per_user).await
    }

    async fn query_all(&self) -> SchedulerResult<Vec<JobRecord>> {
        self.call_qstat("-a", &self.config.layouts.all_jobs).await
    }

    async fn query_with(&self, filter: &JobFilter) -> SchedulerResult<Vec<JobRecord>> {
        match filter {
            JobFilter::Id(id) => Ok(vec![self.query(id).await?]),
            JobFilter::Owner(owner) => self.query_user(owner).await,
            JobFilter::All => self.query_all().await,
        }
    }

    async fn cancel(&self, id: &JobIdentifier) -> SchedulerResult<()> {
        self.channel.execute(&format!("{} {id}", self.config.qdel)).await?;
        info!(job_id = %id, "Cancellation sent.");
        Ok(())
    }

    async fn wait(
        &self,
        id: &JobIdentifier,
        poll_interval: Duration,
        max_wait: Option<Duration>,
    ) -> SchedulerResult<()> {
        let started = Instant::now();
        let mut phase = JobPhase::Queued;
        let mut polls = 0u32;

        loop {
            let record = match self.query(id).await {
                Ok(record) => record,
                Err(SchedulerException::JobNotFound { .. }) => {
                    phase = phase.disappear();
                    info!(job_id = %id, ?phase, polls, "Job left the scheduler table.");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            polls += 1;

            let next = phase.observe(&record.state);
            if next != phase {
                debug!(job_id = %id, from = ?phase, to = ?next, state = %record.state, "Job phase changed.");
            }
            phase = next;

            if let Some(max_wait) = max_wait {
                if started.elapsed() > max_wait {
                    warn!(job_id = %id, ?max_wait, polls, "Gave up waiting for job.");
                    return Err(SchedulerException::WaitTimeout {
                        id: id.clone(),
                        max_wait,
                    });
                }
            }
            sleep(poll_interval).await;
        }
    }

    async fn discover_signature(&self) -> SchedulerResult<String> {
        let script = format!("{}/tmp{}dummy_script", self.config.scratch_dir, Uuid::new_v4());
        self.channel.execute(&format!("touch {}", shell_quote(&script))).await?;

        let submitted = self.submit(&ScriptHandle::new(&script)).await;
        let cancelled = match &submitted {
            Ok(id) => self.cancel(id).await,
            Err(_) => Ok(()),
        };
        if let Err(e) = self.channel.execute(&format!("rm -f {}", shell_quote(&script))).await {
            warn!("Failed to remove dummy script {script}: {e}");
        }

        cancelled?;
        let id = submitted?;
        id.host().map(str::to_owned).ok_or_else(|| SchedulerException::SubmissionParse {
            output: id.to_string(),
        })
    }
}
