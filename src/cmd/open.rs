use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;

use super::{ClientArgs, RunCommand};

/// Open a screen by its path, e.g. `/movieDetails/1` or `/searchResults/heat`.
#[derive(Args)]
pub struct OpenArgs {
    /// The route path.
    pub route: Route,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for OpenArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;
        nav.open(&self.route).await
    }
}
