use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

use super::entities::StoredFile;
use super::value_objects::MediaArea;

/// Port for the media files backing listings, projects and profiles.
#[cfg_attr(test, mockall::automock)]
pub trait MediaStorage: Send + Sync {
    /// Writes `payload` at `path`, creating parent directories and overwriting any existing file.
    fn put(
        &self,
        area: MediaArea,
        path: &str,
        payload: Bytes,
    ) -> impl Future<Output = Result<StoredFile, CoreError>> + Send;

    /// Deletes the file at `path`. A missing file is not an error.
    fn delete(&self, area: MediaArea, path: &str)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_dir(
        &self,
        area: MediaArea,
        path: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Removes a directory and everything below it. A missing directory is not an error.
    fn remove_dir(
        &self,
        area: MediaArea,
        path: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
