//! Pass-through copy of an uploaded file
//!
//! The dashboard offers the user's original upload back under a name of
//! their choosing. Bytes are copied unchanged.

use std::path::Path;

use tracing::info;

use crate::error::{FolioError, FolioResult};

/// Copy `source` to `destination` byte for byte, returning the byte count
pub fn save_copy(source: &Path, destination: &Path) -> FolioResult<u64> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| FolioError::Export(format!("Failed to create directory: {}", e)))?;
    }

    let bytes = std::fs::copy(source, destination).map_err(|e| {
        FolioError::Export(format!(
            "Failed to copy {} to {}: {}",
            source.display(),
            destination.display(),
            e
        ))
    })?;

    info!(from = %source.display(), to = %destination.display(), bytes, "saved copy of upload");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_is_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("upload.csv");
        let contents = b"Type,Market Value\r\nMutual Fund,\"\xe2\x82\xb91,000\"\r\n";
        std::fs::write(&source, contents).unwrap();

        let destination = temp_dir.path().join("downloads").join("holdings.csv");
        let bytes = save_copy(&source, &destination).unwrap();

        assert_eq!(bytes, contents.len() as u64);
        assert_eq!(std::fs::read(&destination).unwrap(), contents);
    }

    #[test]
    fn test_missing_source_is_export_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = save_copy(
            &temp_dir.path().join("missing.csv"),
            &temp_dir.path().join("out.csv"),
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::Export(_)));
    }
}
