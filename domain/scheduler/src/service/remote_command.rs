use async_trait::async_trait;

use crate::model::vo::CommandOutput;

/// Runs one command line on the scheduler host.
///
/// Calls are issued one at a time; a failed call means the command could not
/// be run at all. A command exiting non-zero is not a failure here, its text
/// is returned as usual.
#[async_trait]
pub trait RemoteCommandChannel: Send + Sync {
    async fn execute(&self, command_line: &str) -> anyhow::Result<CommandOutput>;
}
