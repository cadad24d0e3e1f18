use std::collections::HashMap;

use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use sibra_core::domain::storage::entities::UploadedFile;
use tracing::error;

use super::server::api_entities::api_error::ApiError;

/// A fully buffered multipart form, files grouped by field name.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, Vec<String>>,
    pub files: HashMap<String, Vec<UploadedFile>>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or("").to_string();

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await.map_err(multipart_error)?;
                    if data.is_empty() {
                        continue;
                    }

                    form.files
                        .entry(name)
                        .or_default()
                        .push(UploadedFile::new(file_name, content_type, data));
                }
                None => {
                    let value = field.text().await.map_err(multipart_error)?;
                    form.fields.entry(name).or_default().push(value);
                }
            }
        }

        Ok(form)
    }

    /// First non-blank value of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)?
            .iter()
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
    }

    pub fn take_files(&mut self, name: &str) -> Vec<UploadedFile> {
        self.files.remove(name).unwrap_or_default()
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.take_files(name).into_iter().next()
    }

    pub fn require_file(&mut self, name: &str) -> Result<UploadedFile, ApiError> {
        self.take_file(name)
            .ok_or_else(|| ApiError::BadRequest(format!("Missing '{name}' file")))
    }

    /// Every value of a repeatable text field. Each occurrence may also hold a JSON array or a
    /// comma separated list.
    pub fn list(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .map(|values| values.iter().flat_map(|value| split_list(value)).collect())
            .unwrap_or_default()
    }
}

fn split_list(value: &str) -> Vec<String> {
    let value = value.trim();

    serde_json::from_str::<Vec<String>>(value).unwrap_or_else(|_| {
        value
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    })
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(e.body_text());
    }

    error!("Failed to read multipart field: {}", e);
    ApiError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
}
