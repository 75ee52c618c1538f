use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Args;
use log::info;

use crate::router::Route;
use crate::views::movie_details::MovieDetailsView;
use crate::views::View;

use super::{ClientArgs, RunCommand};

/// Rate a movie. A rating of 0 leaves the current rating untouched.
#[derive(Args)]
pub struct RateArgs {
    /// Movie id.
    pub id: i64,

    /// Rating value.
    pub rating: f64,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for RateArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;
        let services = nav.services();

        let route = Route::MovieDetails(self.id);
        let mut view =
            MovieDetailsView::new(self.id, services.auth.clone(), services.movie_details.clone());
        view.load()
            .await
            .with_context(|| format!("load route '{route}'"))?;

        let effects = view.update_client_ratings(self.rating).await?;
        if effects.is_empty() {
            info!("Rating is 0, nothing to submit");
            return nav.show_view(&view);
        }
        nav.apply(route, effects).await?;
        Ok(())
    }
}
