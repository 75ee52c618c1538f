use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use crate::display::DisplayStyle;
use crate::services::auth::AuthService;
use crate::services::user_profile::UserProfileService;
use crate::types::movie::Movie;
use crate::types::token::TokenInfo;

use super::{render_section, Effect, View};

pub struct UserProfileView {
    auth: AuthService,
    service: UserProfileService,

    pub current_user: Option<TokenInfo>,
    pub user_watched_movies: Vec<Movie>,
    pub user_rated_movies: Vec<Movie>,
    /// True iff the backend returned at least one watched movie.
    pub has_watched_movies: bool,
    /// True iff the backend returned at least one rated movie.
    pub has_rated_movies: bool,
    pub is_loaded: bool,
}

impl UserProfileView {
    pub fn new(auth: AuthService, service: UserProfileService) -> Self {
        Self {
            auth,
            service,
            current_user: None,
            user_watched_movies: Vec::new(),
            user_rated_movies: Vec::new(),
            has_watched_movies: false,
            has_rated_movies: false,
            is_loaded: false,
        }
    }

    pub fn logout(&self) -> Result<Vec<Effect>> {
        super::logout(&self.auth)
    }
}

#[async_trait]
impl View for UserProfileView {
    async fn load(&mut self) -> Result<()> {
        let token = self.auth.get_token().await?;
        let user_id = token.user_id;

        let movies = self
            .service
            .get_user_watched_and_rated_movies(user_id)
            .await?;
        self.has_watched_movies = !movies.user_watched_movies.is_empty();
        self.user_watched_movies = movies.user_watched_movies;
        self.has_rated_movies = !movies.user_rated_movies.is_empty();
        self.user_rated_movies = movies.user_rated_movies;
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
                "hasWatchedMovies": self.has_watched_movies,
                "userWatchedMovies": self.user_watched_movies,
                "hasRatedMovies": self.has_rated_movies,
                "userRatedMovies": self.user_rated_movies,
            });
            return Ok(serde_json::to_string_pretty(&state)?);
        }

        let mut out = String::new();
        if let Some(name) = self.current_user.as_ref().and_then(|u| u.username.as_ref()) {
            out.push_str(&format!("Profile of {name}\n"));
        }
        if self.has_watched_movies {
            render_section(&mut out, "Watched movies", &self.user_watched_movies);
        } else {
            out.push_str("You haven't watched any movie yet\n");
        }
        if self.has_rated_movies {
            render_section(&mut out, "Rated movies", &self.user_rated_movies);
        } else {
            out.push_str("You haven't rated any movie yet\n");
        }
        Ok(out)
    }
}
