//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kiln-adapters` crate provides implementations.

use std::path::Path;

use crate::application::error::InstallError;
use crate::domain::{PackageManager, PathState};
use crate::error::KilnResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFilesystem` (production)
/// - `kiln_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All paths are absolute; the orchestrator joins artifact paths onto the
/// resolved project root before calling in.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KilnResult<()>;

    /// Write content to a file. The parent directory must exist.
    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()>;

    fn read_to_string(&self, path: &Path) -> KilnResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// What is at `path`, and for directories how many entries it holds.
    fn inspect(&self, path: &Path) -> KilnResult<PathState>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> KilnResult<()>;
}

/// Port for the dependency install step.
///
/// Implemented by `kiln_adapters::installer::ProcessInstaller`, which runs
/// the package manager as a child process.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInstaller: Send + Sync {
    /// Install dependencies for the project rooted at `root`.
    fn install(&self, root: &Path, manager: PackageManager) -> Result<(), InstallError>;
}
