//! Directory-backed store for book cover images

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tokio::fs;

use crate::error::{AppError, AppResult};

/// Image files keyed by file name under a single root directory
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet
    pub async fn ensure_root(&self) -> AppResult<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Decode a base64 payload without touching the store
    pub fn decode(payload: &str) -> AppResult<Vec<u8>> {
        STANDARD
            .decode(payload.trim())
            .map_err(|e| AppError::Validation(format!("file: invalid base64 payload ({})", e)))
    }

    pub async fn exists(&self, name: &str) -> AppResult<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        Ok(fs::try_exists(self.path_for(name)).await?)
    }

    /// Base64 contents of `name`, `None` when the name is empty or no such file exists
    pub async fn read_base64(&self, name: &str) -> AppResult<Option<String>> {
        if name.is_empty() {
            return Ok(None);
        }
        // A concurrent update may remove the file at any point
        match fs::read(self.path_for(name)).await {
            Ok(bytes) => Ok(Some(STANDARD.encode(bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write raw bytes under `name`, replacing any previous file
    pub async fn write(&self, name: &str, bytes: &[u8]) -> AppResult<()> {
        if name.is_empty() {
            return Err(AppError::Internal("image write without a file name".to_string()));
        }
        fs::write(self.path_for(name), bytes).await?;
        Ok(())
    }

    /// Remove `name` if present; returns whether a file was deleted
    pub async fn remove(&self, name: &str) -> AppResult<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        match fs::remove_file(self.path_for(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
