use anyhow::{bail, Result};
use async_trait::async_trait;
use log::info;
use serde_json::json;

use crate::display::DisplayStyle;
use crate::services::auth::AuthService;
use crate::services::movie_details::MovieDetailsService;
use crate::types::movie::Movie;
use crate::types::token::TokenInfo;

use super::{Effect, View};

pub struct MovieDetailsView {
    movie_id: i64,
    user_id: Option<i64>,

    auth: AuthService,
    service: MovieDetailsService,

    pub current_user: Option<TokenInfo>,
    pub movie_details: Option<Movie>,
    /// Genres joined with `,`.
    pub movie_genres: String,
    pub has_watched_movie: bool,
    /// The user's rating, zero when not rated yet.
    pub current_rate: f64,
    pub is_loaded: bool,
}

impl MovieDetailsView {
    pub fn new(movie_id: i64, auth: AuthService, service: MovieDetailsService) -> Self {
        Self {
            movie_id,
            user_id: None,
            auth,
            service,
            current_user: None,
            movie_details: None,
            movie_genres: String::new(),
            has_watched_movie: false,
            current_rate: 0.0,
            is_loaded: false,
        }
    }

    /// Submits a rating. A zero rating means "no choice" and sends nothing.
    pub async fn update_client_ratings(&self, user_rating: f64) -> Result<Vec<Effect>> {
        if !user_rating.is_finite() {
            bail!("invalid rating {user_rating}");
        }
        if user_rating == 0.0 {
            return Ok(Vec::new());
        }
        let user_id = self.require_user()?;

        let resp = self
            .service
            .set_user_rated_movie(self.movie_id, user_id, user_rating)
            .await?;
        info!("Rated movie {} with {user_rating}", self.movie_id);
        Ok(vec![Effect::Alert(resp.message), Effect::Reload])
    }

    pub async fn update_client_movies_watched(&self) -> Result<Vec<Effect>> {
        let user_id = self.require_user()?;

        let resp = self
            .service
            .set_user_watched_movie(self.movie_id, user_id)
            .await?;
        info!("Marked movie {} as watched", self.movie_id);
        Ok(vec![Effect::Alert(resp.message), Effect::Reload])
    }

    pub fn logout(&self) -> Result<Vec<Effect>> {
        super::logout(&self.auth)
    }

    fn require_user(&self) -> Result<i64> {
        match self.user_id {
            Some(user_id) => Ok(user_id),
            None => bail!("movie {} is not loaded yet", self.movie_id),
        }
    }
}

#[async_trait]
impl View for MovieDetailsView {
    async fn load(&mut self) -> Result<()> {
        let token = self.auth.get_token().await?;
        let user_id = token.user_id;

        let info = self.service.get_movie_details(self.movie_id, user_id).await?;
        self.movie_genres = info.genres.join(",");
        self.movie_details = Some(info.movie_info);
        self.has_watched_movie = info.has_watched;
        self.user_id = Some(user_id);
        self.current_rate = info.movie_rating;
        self.current_user = Some(token);
        self.is_loaded = true;
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    fn render(&self, style: DisplayStyle) -> Result<String> {
        if let DisplayStyle::Json = style {
            let state = json!({
                "currentUser": self.current_user,
                "movieInfo": self.movie_details,
                "genres": self.movie_genres,
                "hasWatched": self.has_watched_movie,
                "movieRating": self.current_rate,
            });
            return Ok(serde_json::to_string_pretty(&state)?);
        }

        let movie = self.movie_details.clone().unwrap_or_default();
        let mut out = String::new();
        let title = movie.title.unwrap_or_else(|| format!("Movie {}", self.movie_id));
        out.push_str(&console::style(title).bold().to_string());
        if let Some(year) = movie.year {
            out.push_str(&format!(" ({year})"));
        }
        out.push('\n');

        let mut field = |name: &str, value: String| {
            if !value.is_empty() {
                out.push_str(&format!("{name}: {value}\n"));
            }
        };
        field("Genres", self.movie_genres.clone());
        field("Released", movie.released_date.unwrap_or_default());
        field("Poster", movie.poster.unwrap_or_default());
        field("Overview", movie.overview.unwrap_or_default());
        field(
            "Watched",
            String::from(if self.has_watched_movie { "yes" } else { "no" }),
        );
        let rating = if self.current_rate == 0.0 {
            String::from("not rated")
        } else {
            self.current_rate.to_string()
        };
        field("Your rating", rating);

        Ok(out)
    }
}
