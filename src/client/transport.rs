use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Url;

use super::request::{ApiRequest, ApiResponse};
use super::RequestError;

/// Puts an [`ApiRequest`] on the wire and returns whatever comes back,
/// whatever the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, req: ApiRequest) -> Result<ApiResponse, RequestError>;
}

pub struct HttpTransport {
    base: Url,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(server: &str) -> Result<Self> {
        let server = server.trim_end_matches('/');
        let base = match Url::parse(server) {
            Ok(url) => url,
            Err(_) => bail!("invalid server url '{server}'"),
        };
        match base.scheme() {
            "http" | "https" => {}
            _ => bail!(
                "invalid url scheme, expect 'http' or 'https', not '{}'",
                base.scheme()
            ),
        }
        if base.cannot_be_a_base() {
            bail!("invalid server url '{server}'");
        }

        let client = reqwest::Client::builder()
            .build()
            .context("build http client")?;
        Ok(Self { base, client })
    }

    pub fn build_url(&self, req: &ApiRequest) -> Result<Url, RequestError> {
        let mut url = self.base.clone();
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().extend(&req.path);
            }
            Err(_) => return Err(RequestError::Client(format!("invalid base url '{}'", self.base))),
        }
        if !req.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&req.query);
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, req: ApiRequest) -> Result<ApiResponse, RequestError> {
        let url = self.build_url(&req)?;
        debug!("Request server: {} {}", req.method, url);

        let mut builder = self.client.request(req.method, url);
        for (name, value) in req.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let request = match builder.build() {
            Ok(request) => request,
            Err(e) => return Err(RequestError::Client(format!("build request failed: {e:#}"))),
        };

        let resp = match self.client.execute(request).await {
            Ok(resp) => resp,
            Err(e) => return Err(RequestError::Network(e.into())),
        };

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| RequestError::Network(e.into()))?;
        debug!("Server responded with status {status}, body size {}", body.len());

        Ok(ApiResponse { status, body })
    }
}
