//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "set up a project" or "validate a project".

pub mod path_guard;
pub mod setup_service;
pub mod validation_service;

pub use path_guard::validate_project_path;
pub use setup_service::{InstallStatus, SetupOutcome, SetupService, SkipReason};
pub use validation_service::{ValidationResult, ValidationService};
