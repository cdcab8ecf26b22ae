//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kiln-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: file operations and target inspection
//!   - `DependencyInstaller`: the package-manager subprocess
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `SetupService::setup_project`, `ValidationService::validate_project`

pub mod output;

pub use output::{DependencyInstaller, Filesystem};

#[cfg(test)]
pub use output::{MockDependencyInstaller, MockFilesystem};
