use async_trait::async_trait;
use mockall::mock;

use crate::{model::vo::CommandOutput, service::RemoteCommandChannel};

mock! {
    pub RemoteCommandChannel {}
    #[async_trait]
    impl RemoteCommandChannel for RemoteCommandChannel {
        async fn execute(&self, command_line: &str) -> anyhow::Result<CommandOutput>;
    }
}
