pub mod config;
pub mod factory;
pub mod interceptor;
#[cfg(test)]
pub mod mock;
pub mod request;
pub mod transport;

use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use self::interceptor::Interceptor;
use self::request::{ApiRequest, ApiResponse};
use self::transport::Transport;

/// Error types that can occur during backend requests
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(#[from] anyhow::Error),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Server error: code {code}, {message}")]
    Server { code: u16, message: String },

    #[error("Server returned invalid json: {0:?}")]
    InvalidJson(String),
}

impl RequestError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RequestError::Server { code: 401, .. })
    }
}

/// Issues requests against the backend. Cloning is cheap, all clones share
/// the same transport and interceptor chain.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            interceptors: Vec::new(),
        }
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Sends the request and decodes a successful JSON body into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        req: ApiRequest,
    ) -> Result<T, RequestError> {
        let resp = self.execute(req).await?;
        if !resp.is_success() {
            return Err(RequestError::Server {
                code: resp.status,
                message: error_message(&resp.body),
            });
        }

        match serde_json::from_str(&resp.body) {
            Ok(data) => Ok(data),
            Err(_) => Err(RequestError::InvalidJson(resp.body)),
        }
    }

    /// Runs the interceptor chain and hands the request to the transport.
    pub async fn execute(&self, mut req: ApiRequest) -> Result<ApiResponse, RequestError> {
        for interceptor in self.interceptors.iter() {
            interceptor.intercept(&mut req)?;
        }
        debug!("{} {}", req.method, req.display_path());
        self.transport.send(req).await
    }
}

/// The backend reports errors as `{"message": ..}`, `{"mensagem": ..}` or
/// plain text.
fn error_message(body: &str) -> String {
    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "mensagem"] {
            if let Some(Value::String(msg)) = obj.get(key) {
                return msg.clone();
            }
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::interceptor::JwtInterceptor;
    use super::mock::{temp_storage, MockTransport};
    use super::*;
    use crate::types::token::TokenInfo;

    #[tokio::test]
    async fn test_request_json() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"user_id": 4, "username": "bob"}));

        let client = ApiClient::new(transport.clone());
        let info: TokenInfo = client.request_json(ApiRequest::get(&["me"])).await.unwrap();
        assert_eq!(info.user_id, 4);
        assert_eq!(info.username.as_deref(), Some("bob"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_server_errors() {
        let transport = MockTransport::new();
        transport.push_json(401, json!({"mensagem": "Invalid token"}));
        transport.push_text(500, "boom\n");
        transport.push_text(200, "<html>");

        let client = ApiClient::new(transport.clone());

        let err = client
            .request_json::<TokenInfo>(ApiRequest::get(&["me"]))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Server error: code 401, Invalid token");

        let err = client
            .request_json::<TokenInfo>(ApiRequest::get(&["me"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Server { code: 500, ref message } if message == "boom"));

        let err = client
            .request_json::<TokenInfo>(ApiRequest::get(&["me"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidJson(ref body) if body == "<html>"));
    }

    #[tokio::test]
    async fn test_interceptor_runs_on_every_request() {
        let storage = temp_storage("client_interceptor");
        let transport = MockTransport::new();
        transport.push_json(200, json!({"user_id": 1}));
        transport.push_json(200, json!({"user_id": 1}));

        let client = ApiClient::new(transport.clone())
            .with_interceptor(Arc::new(JwtInterceptor::new(storage.clone())));

        client.execute(ApiRequest::get(&["me"])).await.unwrap();
        storage
            .set_item(crate::storage::CURRENT_USER_KEY, "tok")
            .unwrap();
        client.execute(ApiRequest::get(&["me"])).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].headers.get("Authorization"), Some("Bearer {}"));
        assert_eq!(requests[1].headers.get("Authorization"), Some("Bearer tok"));
    }
}
