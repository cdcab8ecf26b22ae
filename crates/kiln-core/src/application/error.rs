//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the driven
//! adapters, not rule violations. Rule violations are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Failure of the dependency install collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstallError {
    #[error("failed to start `{program}`: {reason}")]
    Spawn { program: String, reason: String },

    #[error("`{program} install` exited with {}", describe_code(.code))]
    NonZeroExit { program: String, code: Option<i32> },

    #[error("failed reading {stream} of `{program}`: {reason}")]
    Stream {
        program: String,
        stream: &'static str,
        reason: String,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A generator could not produce its artifacts.
    #[error("{framework} generator failed: {reason}")]
    GenerationFailed { framework: String, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    #[error(transparent)]
    Install(#[from] InstallError),

    /// An adapter's internal lock was poisoned.
    #[error("{resource} lock poisoned")]
    LockError { resource: &'static str },
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Install(InstallError::Spawn { program, .. }) => vec![
                format!("Is `{program}` installed and on PATH?"),
                "Or re-run with --no-install and install manually".into(),
            ],
            Self::Install(_) => vec![
                "The project files were written; run the install command manually".into(),
            ],
            Self::GenerationFailed { .. } | Self::LockError { .. } => {
                vec!["This appears to be a bug in Kiln; please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GenerationFailed { .. } => ErrorCategory::Generation,
            Self::FilesystemError { .. } => ErrorCategory::Path,
            Self::Install(_) => ErrorCategory::Install,
            Self::LockError { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_exit_mentions_status_or_signal() {
        let exited = InstallError::NonZeroExit {
            program: "pnpm".into(),
            code: Some(1),
        };
        assert_eq!(exited.to_string(), "`pnpm install` exited with status 1");

        let killed = InstallError::NonZeroExit {
            program: "npm".into(),
            code: None,
        };
        assert!(killed.to_string().contains("signal"));
    }

    #[test]
    fn spawn_failure_suggests_no_install() {
        let err = ApplicationError::from(InstallError::Spawn {
            program: "bun".into(),
            reason: "not found".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Install);
        assert!(err.suggestions().iter().any(|s| s.contains("--no-install")));
    }
}
