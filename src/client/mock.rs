use std::collections::VecDeque;
use std::env;
use std::fs;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;

use crate::storage::LocalStorage;

use super::request::{ApiRequest, ApiResponse};
use super::transport::Transport;
use super::RequestError;

/// Records every request and answers with scripted responses in order.
/// Runs out of responses as a network error.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<ApiResponse>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_text(status, &body.to_string());
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(ApiResponse {
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, req: ApiRequest) -> Result<ApiResponse, RequestError> {
        let path = req.display_path();
        self.requests.lock().unwrap().push(req);
        match self.responses.lock().unwrap().pop_front() {
            Some(resp) => Ok(resp),
            None => Err(RequestError::Network(anyhow!(
                "connection refused: {path}"
            ))),
        }
    }
}

/// Fresh, empty storage file under the system temp dir.
pub fn temp_storage(name: &str) -> LocalStorage {
    let path = env::temp_dir()
        .join("_estgflix_test_storage")
        .join(format!("{name}.json"));
    let _ = fs::remove_file(&path);
    LocalStorage::new(path)
}
