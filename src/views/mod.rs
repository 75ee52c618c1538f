//! Screen-level state. A view reads its inputs, calls one service and binds
//! the response into public fields. User actions return [`Effect`]s instead
//! of driving the terminal directly, the runtime applies them.

pub mod login;
pub mod main_menu;
pub mod movie_details;
pub mod search_results;
pub mod sign_up;
pub mod user_profile;

#[cfg(test)]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::display::{render_table, DisplayStyle};
use crate::router::Route;
use crate::services::auth::AuthService;
use crate::types::movie::Movie;

/// Shown for every login or sign-up failure, whatever the cause.
pub const AUTH_FAILED_MESSAGE: &str = "Username and/or Email doesn't exists";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(Route),
    Alert(String),
    /// Re-open the current route from scratch.
    Reload,
}

/// A screen that fetches its data when opened.
#[async_trait]
pub trait View: Send {
    /// Resolves the session identity, then fetches the screen data. On error
    /// the view stays unloaded.
    async fn load(&mut self) -> Result<()>;

    fn is_loaded(&self) -> bool;

    fn render(&self, style: DisplayStyle) -> Result<String>;
}

/// Clears the session and returns to the login screen.
pub fn logout(auth: &AuthService) -> Result<Vec<Effect>> {
    auth.logout()?;
    info!("Logged out");
    Ok(vec![Effect::Navigate(Route::Login)])
}

/// Route change issued by the search bar. An empty query goes nowhere.
pub fn search_for_movies(input: &str) -> Vec<Effect> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }
    vec![Effect::Navigate(Route::SearchResults(input.to_string()))]
}

fn render_section(out: &mut String, title: &str, movies: &[Movie]) {
    out.push_str(&console::style(title).bold().to_string());
    out.push('\n');
    out.push_str(&render_table(movies.to_vec()));
    out.push('\n');
}
