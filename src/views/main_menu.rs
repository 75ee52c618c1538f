use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use crate::display::DisplayStyle;
use crate::services::auth::AuthService;
use crate::services::main_menu::MainMenuService;
use crate::types::movie::Movie;
use crate::types::token::TokenInfo;

use super::{render_section, Effect, View};

pub struct MainMenuView {
    auth: AuthService,
    service: MainMenuService,

    pub current_user: Option<TokenInfo>,
    pub popular_action_movies: Vec<Movie>,
    pub popular_comedy_movies: Vec<Movie>,
    pub user_recommended_movies: Vec<Movie>,
    pub is_loaded: bool,
}

impl MainMenuView {
    pub fn new(auth: AuthService, service: MainMenuService) -> Self {
        Self {
            auth,
            service,
            current_user: None,
            popular_action_movies: Vec::new(),
            popular_comedy_movies: Vec::new(),
            user_recommended_movies: Vec::new(),
            is_loaded: false,
        }
    }

    pub fn search_for_movies(&self, input: &str) -> Vec<Effect> {
        super::search_for_movies(input)
    }

    pub fn logout(&self) -> Result<Vec<Effect>> {
        super::logout(&self.auth)
    }
}

#[async_trait]
impl View for MainMenuView {
    async fn load(&mut self) -> Result<()> {
        let token = self.auth.get_token().await?;
        let user_id = token.user_id;

        let menu = self.service.get_main_menu_movies(user_id).await?;
        self.popular_action_movies = menu.popular_action_movies;
        self.popular_comedy_movies = menu.popular_comedy_movies;
        self.user_recommended_movies = menu.recommended_user_movies;
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
                "popularActionMovies": self.popular_action_movies,
                "popularComedyMovies": self.popular_comedy_movies,
                "recommendedUserMovies": self.user_recommended_movies,
            });
            return Ok(serde_json::to_string_pretty(&state)?);
        }

        let mut out = String::new();
        render_section(&mut out, "Recommended for you", &self.user_recommended_movies);
        render_section(&mut out, "Popular action movies", &self.popular_action_movies);
        render_section(&mut out, "Popular comedy movies", &self.popular_comedy_movies);
        Ok(out)
    }
}
