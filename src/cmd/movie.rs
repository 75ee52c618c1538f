use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;

use super::{ClientArgs, RunCommand};

/// Show the details of a movie, including whether you watched and rated it.
#[derive(Args)]
pub struct MovieArgs {
    /// Movie id.
    pub id: i64,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for MovieArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;
        nav.open(&Route::MovieDetails(self.id)).await
    }
}
