use crate::client::request::ApiRequest;
use crate::client::{ApiClient, RequestError};
use crate::types::response::SearchResults;

#[derive(Clone)]
pub struct SearchResultsService {
    client: ApiClient,
}

impl SearchResultsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /searchResults/{query}`
    pub async fn get_search_results_movies(&self, query: &str) -> Result<SearchResults, RequestError> {
        let req = ApiRequest::get(&["searchResults", query]);
        self.client.request_json(req).await
    }
}
