//! Drives views in the terminal: opens a route, loads its view, prints it and
//! follows the effects user actions return.

pub mod terminal;

use std::collections::VecDeque;

use anyhow::{Context, Result};
use log::info;

use crate::display::DisplayStyle;
use crate::router::Route;
use crate::services::Services;
use crate::views::main_menu::MainMenuView;
use crate::views::movie_details::MovieDetailsView;
use crate::views::search_results::SearchResultsView;
use crate::views::user_profile::UserProfileView;
use crate::views::{Effect, View};

use self::terminal::Terminal;

pub struct Navigator<T: Terminal> {
    services: Services,
    terminal: T,
    style: DisplayStyle,
}

impl<T: Terminal> Navigator<T> {
    pub fn new(services: Services, terminal: T, style: DisplayStyle) -> Self {
        Self {
            services,
            terminal,
            style,
        }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Builds the view bound to a route. The login and sign-up screens take
    /// their input from the command line and have nothing to load.
    pub fn view_for(&self, route: &Route) -> Option<Box<dyn View>> {
        let services = &self.services;
        let view: Box<dyn View> = match route {
            Route::Login | Route::SignUp => return None,
            Route::MainMenu => Box::new(MainMenuView::new(
                services.auth.clone(),
                services.main_menu.clone(),
            )),
            Route::MovieDetails(id) => Box::new(MovieDetailsView::new(
                *id,
                services.auth.clone(),
                services.movie_details.clone(),
            )),
            Route::UserProfile => Box::new(UserProfileView::new(
                services.auth.clone(),
                services.user_profile.clone(),
            )),
            Route::SearchResults(query) => Box::new(SearchResultsView::new(
                query.clone(),
                services.auth.clone(),
                services.search_results.clone(),
            )),
        };
        Some(view)
    }

    /// Loads and prints the screen behind a route.
    pub async fn open(&self, route: &Route) -> Result<()> {
        info!("Open route '{route}'");
        let mut view = match self.view_for(route) {
            Some(view) => view,
            None => {
                self.terminal.show(&Self::hint(route));
                return Ok(());
            }
        };

        view.load()
            .await
            .with_context(|| format!("load route '{route}'"))?;
        self.show_view(view.as_ref())
    }

    pub fn show_view(&self, view: &dyn View) -> Result<()> {
        let text = view.render(self.style)?;
        self.terminal.show(&text);
        Ok(())
    }

    /// Applies effects in order. `current` is the route a `Reload` re-opens;
    /// it follows every `Navigate`.
    pub async fn apply(&self, current: Route, effects: Vec<Effect>) -> Result<Route> {
        let mut current = current;
        let mut pending: VecDeque<Effect> = effects.into();
        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::Alert(message) => self.terminal.alert(&message),
                Effect::Reload => self.open(&current).await?,
                Effect::Navigate(route) => {
                    self.open(&route).await?;
                    current = route;
                }
            }
        }
        Ok(current)
    }

    fn hint(route: &Route) -> String {
        match route {
            Route::SignUp => String::from("Create an account with `estgflix signup`"),
            _ => String::from("Please log in with `estgflix login`"),
        }
    }
}
