//! Command channel to the scheduler host.

use std::path::Path;

use anyhow::{bail, Context};
use async_trait::async_trait;
use domain_scheduler::{
    model::vo::{shell_quote, CommandOutput},
    service::RemoteCommandChannel,
};
use serde::{Deserialize, Serialize};
use tokio::process::Command;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshChannelConfig {
    pub host: String,
    pub username: String,
    #[serde(default = "SshChannelConfig::default_port")]
    pub port: u16,
}

impl SshChannelConfig {
    pub fn default_port() -> u16 {
        22
    }
}

/// Runs scheduler commands over `ssh`, or through the local shell when no
/// ssh config is given.
#[derive(Debug)]
pub struct SshCommandChannel {
    ssh: Option<SshTarget>,
}

#[derive(Debug)]
struct SshTarget {
    port: String,
    username_host: String,
}

impl SshCommandChannel {
    pub fn new(config: &Option<SshChannelConfig>) -> Self {
        let Some(SshChannelConfig {
            host,
            username,
            port,
        }) = config
        else {
            return Self { ssh: None };
        };

        Self {
            ssh: Some(SshTarget {
                port: port.to_string(),
                username_host: format!("{username}@{host}"),
            }),
        }
    }

    #[inline]
    pub fn is_remote(&self) -> bool {
        self.ssh.is_some()
    }

    fn command(&self, command_line: &str) -> Command {
        let Some(ssh) = &self.ssh else {
            let mut command = Command::new("sh");
            command.args(["-c", command_line]);
            return command;
        };

        let mut command = Command::new("ssh");
        command.args(["-p", &ssh.port, &ssh.username_host, command_line]);
        command
    }

    /// Copy a local script to `remote_path` so `qsub` can reach it.
    pub async fn stage(&self, local_path: &Path, remote_path: &str) -> anyhow::Result<()> {
        let remote_dir = Path::new(remote_path)
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .filter(|p| !p.is_empty());

        let Some(ssh) = &self.ssh else {
            if let Some(dir) = remote_dir {
                tokio::fs::create_dir_all(&dir).await?;
            }
            tokio::fs::copy(local_path, remote_path)
                .await
                .with_context(|| format!("copy {} to {remote_path}", local_path.display()))?;
            return Ok(());
        };

        if let Some(dir) = remote_dir {
            let out = self.command(&mkdir_line(&dir)).output().await.context("ssh")?;
            if !out.status.success() {
                bail!(
                    "Unable to create directory {dir} for pbs script. Exit status: {}",
                    out.status
                )
            }
        }
        let out = Command::new("scp")
            .arg("-P")
            .arg(&ssh.port)
            .arg(local_path)
            .arg(format!("{}:{remote_path}", ssh.username_host))
            .output()
            .await
            .context("scp")?;
        if !out.status.success() {
            bail!("Exit Status not 0 for scp. real: {}", out.status)
        }
        Ok(())
    }
}

fn mkdir_line(dir: &str) -> String {
    format!("mkdir -p {}", shell_quote(dir))
}

#[async_trait]
impl RemoteCommandChannel for SshCommandChannel {
    async fn execute(&self, command_line: &str) -> anyhow::Result<CommandOutput> {
        let out = self
            .command(command_line)
            .output()
            .await
            .with_context(|| format!("Failed to run: {command_line}"))?;
        // qstat exits non-zero for unknown jobs, its text is still wanted
        if !out.status.success() {
            tracing::debug!(command_line, status = %out.status, "Command exited with failure.");
        }
        Ok(CommandOutput::from_bytes(&out.stdout, &out.stderr))
    }
}
