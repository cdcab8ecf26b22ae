//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use kiln_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::PathState,
    error::{KilnError, KilnResult},
};

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
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> KilnResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn inspect(&self, path: &Path) -> KilnResult<PathState> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PathState::Missing),
            Err(e) => return Err(map_io_error(path, e, "inspect")),
        };

        if !metadata.is_dir() {
            return Ok(PathState::File);
        }

        let entries = std::fs::read_dir(path)
            .map_err(|e| map_io_error(path, e, "list directory"))?
            .count();
        Ok(PathState::Directory { entries })
    }

    fn remove_dir_all(&self, path: &Path) -> KilnResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KilnError {
    ApplicationError::filesystem(path, format!("failed to {operation}: {e}")).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn inspect_reports_missing_file_and_directory() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        assert_eq!(fs.inspect(&tmp.path().join("nope")).unwrap(), PathState::Missing);
        assert_eq!(
            fs.inspect(tmp.path()).unwrap(),
            PathState::Directory { entries: 0 }
        );

        let file = tmp.path().join("notes.txt");
        fs.write_file(&file, "hi").unwrap();
        assert_eq!(fs.inspect(&file).unwrap(), PathState::File);
        assert_eq!(
            fs.inspect(tmp.path()).unwrap(),
            PathState::Directory { entries: 1 }
        );
    }

    #[test]
    fn write_then_read_back() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("a/b");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("x.txt"), "content").unwrap();

        assert_eq!(fs.read_to_string(&dir.join("x.txt")).unwrap(), "content");
    }

    #[test]
    fn write_without_parent_fails_with_path() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("missing/file.txt");

        let err = fs.write_file(&target, "x").unwrap_err();
        assert!(err.to_string().contains("failed to write file"));
    }

    #[test]
    fn remove_dir_all_clears_tree() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("project");

        fs.create_dir_all(&root.join("src")).unwrap();
        fs.write_file(&root.join("src/main.ts"), "").unwrap();
        fs.remove_dir_all(&root).unwrap();

        assert!(!fs.exists(&root));
    }
}
