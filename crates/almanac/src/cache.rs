//! Write-once disk cache for raw almanac responses.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::trace;

use crate::error::AlmanacError;

/// One-file-per-key JSON store.
///
/// `store` is write-if-absent: the first response recorded for a key
/// wins and later writes are ignored, so a cache directory shared
/// between runs never rewrites history.
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    /// Opens a cache rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, AlmanacError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, &e))?;
        Ok(Self { dir })
    }

    /// Reads the payload stored under `key`, if any.
    pub fn load(&self, key: &str) -> Result<Option<Value>, AlmanacError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(|e| io_error(&path, &e))?;
        let value = serde_json::from_slice(&bytes).map_err(|e| AlmanacError::Cache {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        trace!(key, "cache hit");
        Ok(Some(value))
    }

    /// Stores `value` under `key` unless the key already exists.
    pub fn store(&self, key: &str, value: &Value) -> Result<(), AlmanacError> {
        let path = self.key_path(key);
        if path.exists() {
            return Ok(());
        }
        let bytes = serde_json::to_vec(value).map_err(|e| AlmanacError::Cache {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::write(&path, bytes).map_err(|e| io_error(&path, &e))?;
        trace!(key, "response cached");
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn io_error(path: &Path, e: &std::io::Error) -> AlmanacError {
    AlmanacError::Cache {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
