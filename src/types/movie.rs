use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::display::TerminalDisplay;

/// Read-only projection of a movie as the backend serializes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(rename = "movieId", alias = "movie_id", default)]
    pub movie_id: Option<i64>,

    #[serde(rename = "imdbId", alias = "imdb_id", default)]
    pub imdb_id: Option<i64>,

    #[serde(rename = "tmdbId", alias = "tmdb_id", default)]
    pub tmdb_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub released_date: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub overview: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub poster: Option<String>,
}

/// Display strings sometimes arrive as numbers (`"year": 1995`).
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn show_id(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

impl TerminalDisplay for Movie {
    fn table_titles() -> Vec<&'static str> {
        vec!["ID", "Title", "Year", "IMDb", "TMDb"]
    }

    fn table_row(self) -> Vec<String> {
        vec![
            show_id(self.movie_id),
            self.title.unwrap_or_default(),
            self.year.unwrap_or_default(),
            show_id(self.imdb_id),
            show_id(self.tmdb_id),
        ]
    }
}
