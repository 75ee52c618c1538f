use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;

use super::{ClientArgs, RunCommand};

/// Show the movies you watched and rated.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for ProfileArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;
        nav.open(&Route::UserProfile).await
    }
}
