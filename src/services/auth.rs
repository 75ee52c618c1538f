use anyhow::Result;

use crate::client::request::ApiRequest;
use crate::client::{ApiClient, RequestError};
use crate::storage::{LocalStorage, CURRENT_USER_KEY};
use crate::types::response::MessageResponse;
use crate::types::token::{LoginResponse, TokenInfo};
use crate::types::user::{User, UserRequest};

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    storage: LocalStorage,
}

impl AuthService {
    pub fn new(client: ApiClient, storage: LocalStorage) -> Self {
        Self { client, storage }
    }

    /// `POST /login`
    pub async fn login(&self, user: &User) -> Result<LoginResponse, RequestError> {
        let req = ApiRequest::post(&["login"]).json(&UserRequest { user })?;
        self.client.request_json(req).await
    }

    /// `POST /register`
    pub async fn register(&self, user: &User) -> Result<MessageResponse, RequestError> {
        let req = ApiRequest::post(&["register"]).json(&UserRequest { user })?;
        self.client.request_json(req).await
    }

    /// `GET /me`, resolves the identity behind the stored token.
    pub async fn get_token(&self) -> Result<TokenInfo, RequestError> {
        self.client.request_json(ApiRequest::get(&["me"])).await
    }

    pub fn save_token(&self, token: &str) -> Result<()> {
        self.storage.set_item(CURRENT_USER_KEY, token)
    }

    /// Forgets the session locally, the backend is not told.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove_item(CURRENT_USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::client::mock::{temp_storage, MockTransport};

    #[tokio::test]
    async fn test_login_request() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"token": "abc"}));
        let auth = AuthService::new(
            ApiClient::new(transport.clone()),
            temp_storage("auth_login"),
        );

        let resp = auth.login(&User::new("alice", "pw")).await.unwrap();
        assert_eq!(resp.token.as_deref(), Some("abc"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].display_path(), "/login");
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"user": {"username": "alice", "password": "pw"}}));
    }

    #[tokio::test]
    async fn test_register_and_me() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"message": "User successfully created"}));
        transport.push_json(200, json!({"user_id": 9, "username": "alice"}));
        let auth = AuthService::new(
            ApiClient::new(transport.clone()),
            temp_storage("auth_register"),
        );

        let resp = auth.register(&User::new("alice", "pw")).await.unwrap();
        assert_eq!(resp.message, "User successfully created");

        let info = auth.get_token().await.unwrap();
        assert_eq!(info.user_id, 9);

        let requests = transport.requests();
        assert_eq!(requests[0].display_path(), "/register");
        assert_eq!(requests[1].method, Method::GET);
        assert_eq!(requests[1].display_path(), "/me");
    }

    #[test]
    fn test_save_token_and_logout() {
        let storage = temp_storage("auth_logout");
        let auth = AuthService::new(ApiClient::new(MockTransport::new()), storage.clone());

        auth.save_token("tok").unwrap();
        assert_eq!(
            storage.get_item(CURRENT_USER_KEY).unwrap().as_deref(),
            Some("tok")
        );

        auth.logout().unwrap();
        assert_eq!(storage.get_item(CURRENT_USER_KEY).unwrap(), None);
    }
}
