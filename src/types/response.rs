use serde::{Deserialize, Serialize};

use super::movie::Movie;

/// Generic `{"message": ...}` body returned by register, rate and watch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainMenuMovies {
    #[serde(default)]
    pub popular_action_movies: Vec<Movie>,

    #[serde(default)]
    pub popular_comedy_movies: Vec<Movie>,

    #[serde(default)]
    pub recommended_user_movies: Vec<Movie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailsInfo {
    pub movie_info: Movie,

    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(default)]
    pub has_watched: bool,

    /// Zero when the user has not rated the movie.
    #[serde(default)]
    pub movie_rating: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub movies_searched: Vec<Movie>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMovies {
    #[serde(default)]
    pub user_watched_movies: Vec<Movie>,

    #[serde(default)]
    pub user_rated_movies: Vec<Movie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_movie_details_info() {
        let info: MovieDetailsInfo = serde_json::from_value(json!({
            "movieInfo": {"movieId": 5, "title": "Heat"},
            "genres": ["Action", "Crime"],
            "hasWatched": true,
            "movieRating": 3.5,
        }))
        .unwrap();

        assert_eq!(info.movie_info.movie_id, Some(5));
        assert_eq!(info.genres, vec!["Action", "Crime"]);
        assert!(info.has_watched);
        assert_eq!(info.movie_rating, 3.5);
    }

    #[test]
    fn test_main_menu_movies() {
        let menu: MainMenuMovies = serde_json::from_value(json!({
            "popularActionMovies": [{"movieId": 1}],
            "popularComedyMovies": [],
            "recommendedUserMovies": [{"movieId": 2}, {"movieId": 3}],
        }))
        .unwrap();

        assert_eq!(menu.popular_action_movies.len(), 1);
        assert!(menu.popular_comedy_movies.is_empty());
        assert_eq!(menu.recommended_user_movies.len(), 2);
    }
}
