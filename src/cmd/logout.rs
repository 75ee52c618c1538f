use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;
use crate::views;

use super::{ClientArgs, RunCommand};

/// Forget the stored session token.
#[derive(Args)]
pub struct LogoutArgs {
    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for LogoutArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;
        let effects = views::logout(&nav.services().auth)?;
        nav.apply(Route::MainMenu, effects).await?;
        Ok(())
    }
}
