use crate::client::request::ApiRequest;
use crate::client::{ApiClient, RequestError};
use crate::types::response::UserMovies;

#[derive(Clone)]
pub struct UserProfileService {
    client: ApiClient,
}

impl UserProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /userProfile?userID=`, everything the user watched and rated.
    pub async fn get_user_watched_and_rated_movies(
        &self,
        user_id: i64,
    ) -> Result<UserMovies, RequestError> {
        let req = ApiRequest::get(&["userProfile"]).query("userID", user_id);
        self.client.request_json(req).await
    }
}
