use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use crate::display::DisplayStyle;
use crate::services::auth::AuthService;
use crate::services::search_results::SearchResultsService;
use crate::types::movie::Movie;
use crate::types::token::TokenInfo;

use super::{render_section, Effect, View};

pub struct SearchResultsView {
    search_words: String,

    auth: AuthService,
    service: SearchResultsService,

    pub current_user: Option<TokenInfo>,
    pub movies_searched: Vec<Movie>,
    pub is_loaded: bool,
}

impl SearchResultsView {
    pub fn new(search_words: String, auth: AuthService, service: SearchResultsService) -> Self {
        Self {
            search_words,
            auth,
            service,
            current_user: None,
            movies_searched: Vec::new(),
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
impl View for SearchResultsView {
    async fn load(&mut self) -> Result<()> {
        let token = self.auth.get_token().await?;

        let results = self
            .service
            .get_search_results_movies(&self.search_words)
            .await?;
        self.movies_searched = results.movies_searched;
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
                "moviesSearched": self.movies_searched,
            });
            return Ok(serde_json::to_string_pretty(&state)?);
        }

        let mut out = String::new();
        let title = format!("Results for '{}'", self.search_words);
        render_section(&mut out, &title, &self.movies_searched);
        Ok(out)
    }
}
