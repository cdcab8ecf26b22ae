// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kiln.
//!
//! Pure rules with no I/O: the option model, the capability table, path
//! safety and the in-memory artifact set. Filesystem and process concerns
//! are reached through ports defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: path checks take a [`PathState`] instead of probing disk
//! - **Value types**: configs and artifact sets are `Clone + PartialEq`

pub mod capabilities;
pub mod config;
pub mod entities;
pub mod error;
pub mod path_safety;
pub mod value_objects;

pub use capabilities::{
    AxisSupport, BuildConfig, CAPABILITY_TABLE, FrameworkDef, FrameworkFamily,
    GeneratorCapability, find_framework,
};
pub use config::{ProjectConfig, ProjectConfigBuilder};
pub use entities::{ArtifactSet, RelativePath};
pub use error::{DomainError, ErrorCategory};
pub use path_safety::{
    PathPolicy, PathState, check_project_path, normalize_path, resolve_project_path,
    validate_path_safety,
};
pub use value_objects::{
    Animation, Axis, AxisValue, ComponentFormat, DataFetching, DataViz, FormManagement, Framework,
    I18n, Icons, Language, PackageManager, Routing, StateManagement, Structure, Styling, Testing,
    UiLibrary, Utilities,
};
