use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_UPLOAD_SIZE: usize = 64 << 20;
pub const MAX_PICTURE_BATCH_SIZE: usize = 90 << 20;

/// Top level directories media is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaArea {
    /// Listing pictures, one directory per property.
    Properties,
    /// Profile pictures.
    Users,
    /// Project media and documents.
    Uploads,
}

/// Extension of `file_name` including the dot, or an empty string.
pub fn file_extension(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);

    base.rfind('.')
        .map(|idx| base[idx..].to_ascii_lowercase())
        .unwrap_or_default()
}

/// Rejects names that could escape the media area.
pub fn ensure_safe_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
    {
        return Err(CoreError::InvalidInput(format!("invalid file name: {name}")));
    }

    Ok(())
}

/// Validates every segment of a relative path.
pub fn ensure_safe_path(path: &str) -> Result<(), CoreError> {
    if path.starts_with('/') {
        return Err(CoreError::InvalidInput(format!("invalid path: {path}")));
    }

    path.split('/').try_for_each(ensure_safe_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("fachada.JPG"), ".jpg");
        assert_eq!(file_extension("plano.final.pdf"), ".pdf");
        assert_eq!(file_extension("sin_extension"), "");
        assert_eq!(file_extension("C:\\fotos\\sala.png"), ".png");
    }

    #[test]
    fn test_rejects_traversal() {
        assert!(ensure_safe_path("properties/../../etc/passwd").is_err());
        assert!(ensure_safe_path("/etc/passwd").is_err());
        assert!(ensure_safe_name("a/b.png").is_err());
        assert!(ensure_safe_path("0190c3e0/pic-20250101-101010-0.jpg").is_ok());
    }
}
