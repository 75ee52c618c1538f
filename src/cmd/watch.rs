use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;
use crate::views::movie_details::MovieDetailsView;
use crate::views::View;

use super::{ClientArgs, RunCommand};

/// Add a movie to your watched list.
#[derive(Args)]
pub struct WatchArgs {
    /// Movie id.
    pub id: i64,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for WatchArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;
        let services = nav.services();

        let route = Route::MovieDetails(self.id);
        let mut view =
            MovieDetailsView::new(self.id, services.auth.clone(), services.movie_details.clone());
        view.load()
            .await
            .with_context(|| format!("load route '{route}'"))?;

        let effects = view.update_client_movies_watched().await?;
        nav.apply(route, effects).await?;
        Ok(())
    }
}
