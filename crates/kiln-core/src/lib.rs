//! Kiln Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the Kiln frontend scaffolder.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             kiln-cli (CLI)              │
//! │     builds ProjectConfig, shows report  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (SetupService, ValidationService)     │
//! │     GeneratorRegistry dispatch          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Generator, Filesystem, Installer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      kiln-adapters (Infrastructure)     │
//! │ (generators, LocalFilesystem, process)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectConfig, capability table,       │
//! │  path safety, ArtifactSet)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kiln_core::prelude::*;
//! # fn registry() -> GeneratorRegistry { unimplemented!() }
//! # fn filesystem() -> Box<dyn Filesystem> { unimplemented!() }
//!
//! let registry = registry();
//! let config = ProjectConfig::builder("my-app", Framework::React)
//!     .styling(Styling::Tailwind)
//!     .dry_run(true)
//!     .build();
//!
//! let service = SetupService::new(&registry, filesystem(), PathPolicy::from_env());
//! let outcome = service.setup_project(&config, std::path::Path::new(".")).unwrap();
//! for path in outcome.written_paths() {
//!     println!("{}", path.display());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DependencyInstaller, Filesystem, Generator, GeneratorRegistry, InstallError,
        InstallStatus, SetupOutcome, SetupService, ValidationResult, ValidationService,
    };
    pub use crate::domain::{
        Animation, ArtifactSet, DataFetching, DataViz, FormManagement, Framework,
        GeneratorCapability, I18n, Icons, Language, PackageManager, PathPolicy, PathState,
        ProjectConfig, Routing, StateManagement, Structure, Styling, Testing, UiLibrary,
        Utilities,
    };
    pub use crate::error::{ErrorCategory, KilnError, KilnResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
