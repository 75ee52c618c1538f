use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::dirs::ensure_parent_exists;
use crate::filelock::{read_file_lock, update_file_lock};

/// Key under which the session token is stored.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// A string key/value store persisted as a JSON object in a single file.
///
/// Every call re-reads the file, so two processes sharing the same path see
/// each other's writes. There is no in-memory cache.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut items = match read_file_lock(&self.path)? {
            Some(data) => self.parse_items(&data),
            None => BTreeMap::new(),
        };
        Ok(items.remove(key))
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        ensure_parent_exists(&self.path).context("ensure local storage directory")?;
        self.update_items(true, |items| {
            items.insert(key.to_string(), value.to_string());
            true
        })?;
        info!("Stored item '{key}' in local storage");
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        let removed = self.update_items(false, |items| items.remove(key).is_some())?;
        if removed {
            info!("Removed item '{key}' from local storage");
        }
        Ok(())
    }

    /// Read-modify-write under one exclusive lock. `update` returns whether
    /// it changed anything.
    fn update_items<F>(&self, create: bool, update: F) -> Result<bool>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        update_file_lock(&self.path, create, |data| {
            let mut items = self.parse_items(&data);
            if !update(&mut items) {
                return Ok(None);
            }
            Ok(Some(serde_json::to_vec_pretty(&items)?))
        })
    }

    fn parse_items(&self, data: &[u8]) -> BTreeMap<String, String> {
        if data.is_empty() {
            return BTreeMap::new();
        }
        match serde_json::from_slice(data) {
            Ok(items) => items,
            Err(_) => {
                warn!(
                    "Local storage file '{}' has invalid data, we will ignore it",
                    self.path.display()
                );
                BTreeMap::new()
            }
        }
    }
}
