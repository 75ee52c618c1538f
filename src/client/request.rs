use reqwest::Method;
use serde::Serialize;

use crate::header::{HeaderMap, HEADER_ACCEPT, HEADER_CONTENT_TYPE, MIME_JSON};

use super::RequestError;

/// A backend call before it is put on the wire. Path segments are relative
/// to the configured server url and are percent-encoded by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiRequest {
    pub fn new<S: ToString>(method: Method, path: &[S]) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_ACCEPT, MIME_JSON);
        Self {
            method,
            path: path.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            headers,
            body: None,
        }
    }

    pub fn get<S: ToString>(path: &[S]) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post<S: ToString>(path: &[S]) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, RequestError> {
        let json = serde_json::to_string(body)
            .map_err(|e| RequestError::Client(format!("encode json body: {e}")))?;
        self.headers.insert(HEADER_CONTENT_TYPE, MIME_JSON);
        self.body = Some(json);
        Ok(self)
    }

    /// A body with no content type, e.g. the empty body of a bare POST.
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// `/a/b?k=v`, for logs and assertions.
    pub fn display_path(&self) -> String {
        let mut path = format!("/{}", self.path.join("/"));
        if !self.query.is_empty() {
            let kvs: Vec<_> = self.query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            path.push('?');
            path.push_str(&kvs.join("&"));
        }
        path
    }
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
