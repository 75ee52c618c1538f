use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::display::display_json;

use super::{ClientArgs, RunCommand};

/// Display the identity behind the stored session token.
#[derive(Args)]
pub struct WhoamiArgs {
    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for WhoamiArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;
        let info = nav.services().auth.get_token().await?;
        display_json(info)
    }
}
