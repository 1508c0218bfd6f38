use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use domain_scheduler::model::vo::ColumnLayouts;
use serde::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "SchedulerConfig::default_qstat")]
    pub qstat: String,
    #[serde(default = "SchedulerConfig::default_qsub")]
    pub qsub: String,
    #[serde(default = "SchedulerConfig::default_qdel")]
    pub qdel: String,
    /// Seconds between two status queries of `wait`.
    #[serde(default = "SchedulerConfig::default_poll_interval")]
    pub poll_interval: u64,
    /// Seconds `wait` may take before giving up. Unbounded if unset.
    #[serde(default = "Default::default")]
    pub max_wait: Option<u64>,
    /// Remote directory the throwaway script of signature discovery is
    /// written to.
    #[serde(default = "SchedulerConfig::default_scratch_dir")]
    pub scratch_dir: String,
    /// Text `qstat` prints when asked about a job it does not know.
    #[serde(default = "SchedulerConfig::default_not_found_marker")]
    pub not_found_marker: String,
    #[serde(default = "Default::default")]
    pub layouts: ColumnLayouts,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            qstat: Self::default_qstat(),
            qsub: Self::default_qsub(),
            qdel: Self::default_qdel(),
            poll_interval: Self::default_poll_interval(),
            max_wait: None,
            scratch_dir: Self::default_scratch_dir(),
            not_found_marker: Self::default_not_found_marker(),
            layouts: Default::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn default_qstat() -> String {
        "/opt/pbs/default/bin/qstat".to_string()
    }
    pub fn default_qsub() -> String {
        "/opt/pbs/default/bin/qsub".to_string()
    }
    pub fn default_qdel() -> String {
        "/opt/pbs/default/bin/qdel".to_string()
    }
    pub fn default_poll_interval() -> u64 {
        5
    }
    pub fn default_scratch_dir() -> String {
        "/tmp".to_string()
    }
    pub fn default_not_found_marker() -> String {
        "Unknown Job Id".to_string()
    }

    /// Layer the optional YAML file at `path` and `PBS__*` environment
    /// variables (e.g. `PBS__MAX_WAIT=600`) over the defaults.
    pub fn build(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(
                Environment::with_prefix("PBS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|config| config.try_deserialize())
            .context("Failed to build scheduler config")
    }

    pub fn from_yaml(s: &str) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(File::from_str(s, FileFormat::Yaml))
            .build()
            .and_then(|config| config.try_deserialize())
            .context("Failed to parse scheduler config")
    }

    #[inline]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }

    #[inline]
    pub fn max_wait(&self) -> Option<Duration> {
        self.max_wait.map(Duration::from_secs)
    }
}
