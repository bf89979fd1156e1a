//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use poa_core::{application::ports::Filesystem, error::PoaResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> PoaResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> PoaResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> poa_core::error::PoaError {
    use poa_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use poa_core::{application::ApplicationError, error::PoaError};

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("app/src");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn write_file_replaces_content() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("package.json");

        fs.write_file(&file, "{}").unwrap();
        fs.write_file(&file, r#"{"a":1}"#).unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn missing_parent_is_filesystem_error() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("missing/package.json");

        let err = fs.write_file(&file, "{}").unwrap_err();
        match err {
            PoaError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn directory_over_existing_file_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("taken");
        std::fs::write(&file, "").unwrap();

        assert!(fs.create_dir_all(&file.join("src")).is_err());
    }
}
