use anyhow::{bail, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::config::{expandenv, CommonConfig, PathSet};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClientConfig {
    /// Base url of the backend api, every request path is appended to it.
    #[serde(default = "ClientConfig::default_server")]
    pub server: String,

    /// File backing the local storage; empty means `<data>/local_storage.json`.
    #[serde(default = "ClientConfig::default_storage_path")]
    pub storage_path: String,
}

impl CommonConfig for ClientConfig {
    fn default() -> Self {
        Self {
            server: Self::default_server(),
            storage_path: Self::default_storage_path(),
        }
    }

    fn complete(&mut self, ps: &PathSet) -> Result<()> {
        self.server = expandenv("server", &self.server)?;
        self.server = self.server.trim_end_matches('/').to_string();
        if self.server.is_empty() {
            bail!("server cannot be empty");
        }
        match Url::parse(&self.server) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => bail!("invalid server url '{}', expect an http(s) url", self.server),
        }

        self.storage_path = expandenv("storage_path", &self.storage_path)?;
        if self.storage_path.is_empty() {
            let path = ps.data_path.join("local_storage.json");
            self.storage_path = format!("{}", path.display());
        }

        Ok(())
    }
}

impl ClientConfig {
    pub fn default_server() -> String {
        String::from("http://localhost:5000/api")
    }

    pub fn default_storage_path() -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use super::*;

    fn path_set(name: &str) -> PathSet {
        let base = env::temp_dir().join("_estgflix_test_client_config").join(name);
        let _ = fs::remove_dir_all(&base);
        PathSet::new(Some(base.join("config")), Some(base.join("data"))).unwrap()
    }

    #[test]
    fn test_defaults() {
        let ps = path_set("defaults");
        let cfg = ps.load_config("client", ClientConfig::default).unwrap();
        assert_eq!(cfg.server, "http://localhost:5000/api");
        assert_eq!(
            cfg.storage_path,
            format!("{}", ps.data_path.join("local_storage.json").display())
        );
    }

    #[test]
    fn test_custom_server() {
        let ps = path_set("custom");
        fs::write(
            ps.config_path.join("client.toml"),
            "server = \"https://movies.example.com/api/\"\nstorage_path = \"/tmp/estgflix.json\"\n",
        )
        .unwrap();
        let cfg = ps.load_config("client", ClientConfig::default).unwrap();
        assert_eq!(cfg.server, "https://movies.example.com/api");
        assert_eq!(cfg.storage_path, "/tmp/estgflix.json");
    }

    #[test]
    fn test_invalid_server() {
        let ps = path_set("invalid");
        fs::write(ps.config_path.join("client.toml"), "server = \"ftp://x\"\n").unwrap();
        let result = ps.load_config("client", ClientConfig::default);
        assert!(result.is_err());
    }
}
