use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Creates the directory (and its parents) if it is missing.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("create directory '{}'", path.display()))?;
    }
    Ok(())
}

/// Creates the parent directory of a file path if it is missing.
pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}
