use crate::header::HEADER_AUTHORIZATION;
use crate::storage::{LocalStorage, CURRENT_USER_KEY};

use super::request::ApiRequest;
use super::RequestError;

/// Hook run on every outgoing request before it reaches the transport.
pub trait Interceptor: Send + Sync {
    fn intercept(&self, req: &mut ApiRequest) -> Result<(), RequestError>;
}

/// Attaches the stored session token as a bearer token.
///
/// The token is forwarded verbatim. When nothing is stored the placeholder
/// `{}` is sent instead, so the header is present on every request.
pub struct JwtInterceptor {
    storage: LocalStorage,
}

impl JwtInterceptor {
    pub const EMPTY_TOKEN: &'static str = "{}";

    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }
}

impl Interceptor for JwtInterceptor {
    fn intercept(&self, req: &mut ApiRequest) -> Result<(), RequestError> {
        let token = self
            .storage
            .get_item(CURRENT_USER_KEY)
            .map_err(|e| RequestError::Client(format!("read session token: {e:#}")))?;
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => Self::EMPTY_TOKEN.to_string(),
        };

        req.headers
            .insert(HEADER_AUTHORIZATION, format!("Bearer {token}"));
        Ok(())
    }
}
