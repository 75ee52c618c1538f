use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Every screen reachable by path. Parsing and printing round-trip through
/// the same patterns:
///
/// | Pattern | Route |
/// |---|---|
/// | `/` | [`Route::Login`] |
/// | `/signup` | [`Route::SignUp`] |
/// | `/mainMenu` | [`Route::MainMenu`] |
/// | `/movieDetails/:movie_id` | [`Route::MovieDetails`] |
/// | `/userProfile` | [`Route::UserProfile`] |
/// | `/searchResults/:search_result` | [`Route::SearchResults`] |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    MainMenu,
    MovieDetails(i64),
    UserProfile,
    SearchResults(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Route> {
        let path = path.trim();
        let path = path.strip_prefix('/').unwrap_or(path);
        let (head, rest) = match path.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let route = match (head, rest) {
            ("", None) => Route::Login,
            ("signup", None) => Route::SignUp,
            ("mainMenu", None) => Route::MainMenu,
            ("userProfile", None) => Route::UserProfile,
            ("movieDetails", Some(id)) => {
                let id = id
                    .parse::<i64>()
                    .with_context(|| format!("invalid movie id '{id}' in route"))?;
                Route::MovieDetails(id)
            }
            // The rest of the path is the query, it may contain '/'
            ("searchResults", Some(query)) if !query.is_empty() => Route::SearchResults(query.to_string()),
            _ => bail!("unknown route '/{path}'"),
        };
        Ok(route)
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "/"),
            Route::SignUp => write!(f, "/signup"),
            Route::MainMenu => write!(f, "/mainMenu"),
            Route::MovieDetails(id) => write!(f, "/movieDetails/{id}"),
            Route::UserProfile => write!(f, "/userProfile"),
            Route::SearchResults(query) => write!(f, "/searchResults/{query}"),
        }
    }
}
