use bytes::Bytes;

use crate::domain::storage::value_objects::file_extension;

/// A file received from a multipart upload, fully buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            data,
        }
    }

    /// Extension of the client supplied name, including the leading dot.
    pub fn extension(&self) -> String {
        file_extension(&self.file_name)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Where a stored file lives relative to its media area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub path: String,
    pub size: u64,
}
