use anyhow::{bail, Result};
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;
use crate::views;

use super::{ClientArgs, RunCommand};

/// Search movies by title.
#[derive(Args)]
pub struct SearchArgs {
    /// Search words, joined with spaces.
    #[arg(required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub client: ClientArgs,
}

impl SearchArgs {
    pub fn query(&self) -> String {
        self.words.join(" ")
    }
}

#[async_trait]
impl RunCommand for SearchArgs {
    async fn run(&self) -> Result<()> {
        let effects = views::search_for_movies(&self.query());
        if effects.is_empty() {
            bail!("search words cannot be empty");
        }
        let nav = self.client.build_navigator()?;
        nav.apply(Route::MainMenu, effects).await?;
        Ok(())
    }
}
