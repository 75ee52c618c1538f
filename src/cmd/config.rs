use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use serde_json::json;

use crate::client::config::ClientConfig;
use crate::config::{CommonConfig, ConfigArgs};
use crate::display::display_json;
use crate::logs::LogConfig;

use super::RunCommand;

/// Display the configuration in use, in JSON format.
#[derive(Args)]
pub struct ConfigCommandArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for ConfigCommandArgs {
    async fn run(&self) -> Result<()> {
        let ps = self.config.build_path_set()?;
        let client: ClientConfig = ps.load_config("client", ClientConfig::default)?;
        let logs: LogConfig = ps.load_config("logs", LogConfig::default)?;
        display_json(json!({"client": client, "logs": logs}))
    }
}
