use crate::client::request::ApiRequest;
use crate::client::{ApiClient, RequestError};
use crate::types::response::MainMenuMovies;

#[derive(Clone)]
pub struct MainMenuService {
    client: ApiClient,
}

impl MainMenuService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /mainMenu?userID=`, popular action and comedy movies plus the
    /// user's recommendations.
    pub async fn get_main_menu_movies(&self, user_id: i64) -> Result<MainMenuMovies, RequestError> {
        let req = ApiRequest::get(&["mainMenu"]).query("userID", user_id);
        self.client.request_json(req).await
    }
}
