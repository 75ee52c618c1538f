use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;

use super::{ClientArgs, RunCommand};

/// Show the main menu: recommendations plus popular action and comedy movies.
#[derive(Args)]
pub struct MenuArgs {
    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for MenuArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;
        nav.open(&Route::MainMenu).await
    }
}
