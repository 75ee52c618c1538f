use std::sync::Arc;

use anyhow::Result;

use crate::config::{CommonConfig, PathSet};
use crate::services::Services;
use crate::storage::LocalStorage;

use super::config::ClientConfig;
use super::interceptor::JwtInterceptor;
use super::transport::HttpTransport;
use super::ApiClient;

pub struct ClientFactory {
    cfg: ClientConfig,
}

impl ClientFactory {
    pub fn new(cfg: ClientConfig) -> Self {
        Self { cfg }
    }

    pub fn load(ps: &PathSet) -> Result<Self> {
        let cfg = ps.load_config("client", ClientConfig::default)?;
        Ok(Self { cfg })
    }

    pub fn build_storage(&self) -> LocalStorage {
        LocalStorage::new(&self.cfg.storage_path)
    }

    /// Client over http with the session token attached to every request.
    pub fn build_client(&self) -> Result<ApiClient> {
        let transport = HttpTransport::new(&self.cfg.server)?;
        let interceptor = JwtInterceptor::new(self.build_storage());
        Ok(ApiClient::new(Arc::new(transport)).with_interceptor(Arc::new(interceptor)))
    }

    pub fn build_services(&self) -> Result<Services> {
        let client = self.build_client()?;
        Ok(Services::new(client, self.build_storage()))
    }
}
