use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use anyhow::{Context, Result};
use file_lock::{FileLock, FileOptions};

/// Reads the whole file under a shared lock, `None` if it does not exist.
pub fn read_file_lock(path: &Path) -> Result<Option<Vec<u8>>> {
    let lock_opts = FileOptions::new().read(true);
    let mut file = match FileLock::lock(path, true, lock_opts) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("lock file '{}'", path.display()))
        }
    };

    let mut data = Vec::new();
    file.file
        .read_to_end(&mut data)
        .with_context(|| format!("read file '{}'", path.display()))?;
    Ok(Some(data))
}

/// Rewrites the file under a single exclusive lock held from read to write.
/// `update` gets the current content and returns the new one, or `None` to
/// leave the file untouched. Without `create`, a missing file is left alone.
/// Returns whether the file was written.
pub fn update_file_lock<F>(path: &Path, create: bool, update: F) -> Result<bool>
where
    F: FnOnce(Vec<u8>) -> Result<Option<Vec<u8>>>,
{
    let lock_opts = FileOptions::new().read(true).write(true).create(create);
    let mut file = match FileLock::lock(path, true, lock_opts) {
        Ok(file) => file,
        Err(err) if !create && err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => {
            return Err(err).with_context(|| format!("lock file '{}'", path.display()))
        }
    };

    let mut data = Vec::new();
    file.file
        .read_to_end(&mut data)
        .with_context(|| format!("read file '{}'", path.display()))?;

    let data = match update(data)? {
        Some(data) => data,
        None => return Ok(false),
    };

    file.file.seek(SeekFrom::Start(0))?;
    file.file.set_len(0)?;
    file.file
        .write_all(&data)
        .with_context(|| format!("write file '{}'", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use super::*;

    #[test]
    fn test_update_then_read() {
        let path = env::temp_dir().join("_estgflix_test_filelock");
        let _ = fs::remove_file(&path);

        // Missing file is not created without `create`
        let written = update_file_lock(&path, false, |_| Ok(Some(b"x".to_vec()))).unwrap();
        assert!(!written);
        assert!(!path.exists());

        update_file_lock(&path, true, |data| {
            assert!(data.is_empty());
            Ok(Some(b"first content".to_vec()))
        })
        .unwrap();
        update_file_lock(&path, true, |data| {
            assert_eq!(data, b"first content");
            Ok(Some(b"second".to_vec()))
        })
        .unwrap();

        // Shorter content truncates the old one
        let data = read_file_lock(&path).unwrap().unwrap();
        assert_eq!(data, b"second");

        let written = update_file_lock(&path, true, |_| Ok(None)).unwrap();
        assert!(!written);
        assert_eq!(read_file_lock(&path).unwrap().unwrap(), b"second");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_nonexistent_file() {
        let path = env::temp_dir().join("_estgflix_nonexistent_file");
        let result = read_file_lock(&path).unwrap();
        assert!(result.is_none());
    }
}
