//! Unified error handling for Kiln Core.
//!
//! Wraps domain and application errors behind one type with a category
//! (for exit codes and styling) and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Kiln Core operations.
#[derive(Debug, Error, Clone)]
pub enum KilnError {
    /// Path, configuration or artifact rule violations.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration and adapter failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KilnError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Kiln".into(),
                "Please report it at: https://github.com/kiln-dev/kiln/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Path => ErrorCategory::Path,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Generation => ErrorCategory::Generation,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// True when the error was raised before anything touched the disk.
    pub fn is_pre_mutation(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Path | ErrorCategory::Configuration | ErrorCategory::Generation
        ) && !matches!(
            self,
            Self::Application(ApplicationError::FilesystemError { .. })
        )
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Empty, unsafe or occupied target; directory creation failures.
    Path,
    /// Unregistered framework or option outside its capability.
    Configuration,
    /// A generator failed or produced an invalid artifact set.
    Generation,
    /// Package manager failed.
    Install,
    Internal,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Configuration => "configuration",
            Self::Generation => "generation",
            Self::Install => "install",
            Self::Internal => "internal",
        }
    }
}

/// Convenient result type alias.
pub type KilnResult<T> = Result<T, KilnError>;

impl From<crate::application::InstallError> for KilnError {
    fn from(err: crate::application::InstallError) -> Self {
        Self::Application(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_categories_map_through() {
        let err: KilnError = DomainError::UnsafePath {
            path: PathBuf::from("/etc/app"),
            protected: "/etc".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Path);
        assert!(err.is_pre_mutation());
        assert!(err.to_string().contains("/etc/app"));
    }

    #[test]
    fn filesystem_failures_are_path_errors_after_mutation() {
        let err: KilnError = ApplicationError::FilesystemError {
            path: PathBuf::from("/tmp/x"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Path);
        assert!(!err.is_pre_mutation());
    }
}
