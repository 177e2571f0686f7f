//! Local-disk asset storage.
//!
//! Files are written once under the asset directory and never touched again.
//! Callers get back a relative reference (`assets/<filename>`) that the HTTP
//! layer or a static file server resolves.

use std::fs;
use std::path::{Path, PathBuf};

use crate::infrastructure::ports::{AssetStoreError, AssetStorePort};

/// Path prefix of every reference handed back to callers.
pub const ASSET_REF_PREFIX: &str = "assets";

pub struct FileAssetStore {
    root: PathBuf,
}

impl FileAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetStorePort for FileAssetStore {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, AssetStoreError> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename.starts_with('.') {
            return Err(AssetStoreError::write(filename, "invalid asset filename"));
        }

        fs::create_dir_all(&self.root)
            .map_err(|e| AssetStoreError::directory(self.root.display(), e))?;

        let path = self.root.join(filename);
        fs::write(&path, bytes).map_err(|e| AssetStoreError::write(filename, e))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Saved asset");
        Ok(format!("{}/{}", ASSET_REF_PREFIX, filename))
    }
}
