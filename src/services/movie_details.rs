use crate::client::request::ApiRequest;
use crate::client::{ApiClient, RequestError};
use crate::types::response::{MessageResponse, MovieDetailsInfo, RatingRequest};

#[derive(Clone)]
pub struct MovieDetailsService {
    client: ApiClient,
}

impl MovieDetailsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /movieDetails/{id}?userID=`
    pub async fn get_movie_details(
        &self,
        movie_id: i64,
        user_id: i64,
    ) -> Result<MovieDetailsInfo, RequestError> {
        let req = ApiRequest::get(&["movieDetails".to_string(), movie_id.to_string()])
            .query("userID", user_id);
        self.client.request_json(req).await
    }

    /// `POST /movieDetails/{id}/{userId}`, marks the movie as watched.
    pub async fn set_user_watched_movie(
        &self,
        movie_id: i64,
        user_id: i64,
    ) -> Result<MessageResponse, RequestError> {
        let req = ApiRequest::post(&[
            "movieDetails".to_string(),
            movie_id.to_string(),
            user_id.to_string(),
        ])
        .raw_body("");
        self.client.request_json(req).await
    }

    /// `POST /movieDetails/rate/{id}/{userId}`
    pub async fn set_user_rated_movie(
        &self,
        movie_id: i64,
        user_id: i64,
        rating: f64,
    ) -> Result<MessageResponse, RequestError> {
        let req = ApiRequest::post(&[
            "movieDetails".to_string(),
            "rate".to_string(),
            movie_id.to_string(),
            user_id.to_string(),
        ])
        .json(&RatingRequest { rating })?;
        self.client.request_json(req).await
    }
}
