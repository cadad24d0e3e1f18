use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{StorageConfig, entities::app_errors::CoreError},
    storage::{
        entities::StoredFile,
        ports::MediaStorage,
        value_objects::{MediaArea, ensure_safe_path},
    },
};

/// Media written below local directories, one root per area.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    properties_root: PathBuf,
    users_root: PathBuf,
    uploads_root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(config: &StorageConfig) -> Self {
        let static_root = PathBuf::from(&config.static_path);

        Self {
            properties_root: static_root.join("properties"),
            users_root: static_root.join("users"),
            uploads_root: PathBuf::from(&config.uploads_path),
        }
    }

    fn root(&self, area: MediaArea) -> &Path {
        match area {
            MediaArea::Properties => &self.properties_root,
            MediaArea::Users => &self.users_root,
            MediaArea::Uploads => &self.uploads_root,
        }
    }

    fn resolve(&self, area: MediaArea, path: &str) -> Result<PathBuf, CoreError> {
        ensure_safe_path(path)?;
        Ok(self.root(area).join(path))
    }

    /// Creates every area root. Called once at startup.
    pub async fn ensure_roots(&self) -> Result<(), CoreError> {
        for root in [&self.properties_root, &self.users_root, &self.uploads_root] {
            tokio::fs::create_dir_all(root)
                .await
                .map_err(|e| storage_error("create media root", root, e))?;
        }

        Ok(())
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> CoreError {
    tracing::error!(
        error = %e,
        path = %path.display(),
        "Failed to {}",
        action
    );
    CoreError::StorageError(format!("failed to {action}: {e}"))
}

impl MediaStorage for LocalMediaStorage {
    #[instrument(skip(self, payload), fields(size = payload.len()))]
    async fn put(&self, area: MediaArea, path: &str, payload: Bytes) -> Result<StoredFile, CoreError> {
        let target = self.resolve(area, path)?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create media directory", parent, e))?;
        }

        let size = payload.len() as u64;
        tokio::fs::write(&target, &payload)
            .await
            .map_err(|e| storage_error("write media file", &target, e))?;

        tracing::debug!(path = %target.display(), "Media file stored");

        Ok(StoredFile {
            path: path.to_string(),
            size,
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, area: MediaArea, path: &str) -> Result<(), CoreError> {
        let target = self.resolve(area, path)?;

        match tokio::fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("delete media file", &target, e)),
        }
    }

    async fn create_dir(&self, area: MediaArea, path: &str) -> Result<(), CoreError> {
        let target = self.resolve(area, path)?;

        tokio::fs::create_dir_all(&target)
            .await
            .map_err(|e| storage_error("create media directory", &target, e))
    }

    #[instrument(skip(self))]
    async fn remove_dir(&self, area: MediaArea, path: &str) -> Result<(), CoreError> {
        let target = self.resolve(area, path)?;

        match tokio::fs::remove_dir_all(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("remove media directory", &target, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(dir: &tempfile::TempDir) -> LocalMediaStorage {
        LocalMediaStorage::new(&StorageConfig {
            uploads_path: dir.path().join("uploads").to_string_lossy().into_owned(),
            static_path: dir.path().join("static").to_string_lossy().into_owned(),
        })
    }

    #[tokio::test]
    async fn test_put_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        let path = "0190c3e0/pic-20250101-101010-0.jpg";

        storage
            .put(MediaArea::Properties, path, Bytes::from_static(b"one"))
            .await
            .unwrap();
        let stored = storage
            .put(MediaArea::Properties, path, Bytes::from_static(b"second"))
            .await
            .unwrap();

        assert_eq!(stored.size, 6);
        let on_disk = std::fs::read(dir.path().join("static/properties").join(path)).unwrap();
        assert_eq!(on_disk, b"second");
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        assert!(storage.delete(MediaArea::Uploads, "nada.pdf").await.is_ok());
        assert!(storage.remove_dir(MediaArea::Properties, "nada").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_dir_drops_contents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        storage.create_dir(MediaArea::Properties, "abc").await.unwrap();
        storage
            .put(MediaArea::Properties, "abc/main-pic.png", Bytes::from_static(b"png"))
            .await
            .unwrap();
        storage.remove_dir(MediaArea::Properties, "abc").await.unwrap();

        assert!(!dir.path().join("static/properties/abc").exists());
    }

    #[tokio::test]
    async fn test_rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        let result = storage
            .put(MediaArea::Users, "../secreto.txt", Bytes::from_static(b"x"))
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}
