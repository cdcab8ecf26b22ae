//! Infrastructure adapters for Kiln.
//!
//! This crate implements the ports defined in `kiln-core::application::ports`
//! and ships the built-in framework generators. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod generators;
pub mod installer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generators::{FrameworkGenerator, builtin_registry};
pub use installer::{InstallLine, OutputStream, ProcessInstaller};
