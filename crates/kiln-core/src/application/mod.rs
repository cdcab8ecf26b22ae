//! Application layer for Kiln.
//!
//! This layer contains:
//! - **Registry**: framework → generator dispatch
//! - **Services**: use case orchestration (SetupService, ValidationService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer sequences the domain rules but holds none itself.
//! Option compatibility and path safety live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod registry;
pub mod services;

pub use services::{
    InstallStatus, SetupOutcome, SetupService, SkipReason, ValidationResult, ValidationService,
    validate_project_path,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DependencyInstaller, Filesystem};

pub use error::{ApplicationError, InstallError};
pub use registry::{Generator, GeneratorRegistry};
