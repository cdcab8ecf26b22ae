// ============================================================================
// domain/error.rs - PATH, CONFIGURATION AND ARTIFACT ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry into reports)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path errors
    // ========================================================================
    #[error("project path is empty")]
    EmptyPath,

    #[error("cannot resolve '{path}' to an absolute path: {reason}")]
    PathResolution { path: String, reason: String },

    #[error("refusing to write to protected location {} (inside {protected})", .path.display())]
    UnsafePath { path: PathBuf, protected: String },

    #[error("{} exists and is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{} is not empty ({entries} conflicting {})", .path.display(), entry_noun(.entries))]
    DirectoryNotEmpty { path: PathBuf, entries: usize },

    #[error("cannot derive a project name from '{path}'")]
    MissingProjectName { path: String },

    // ========================================================================
    // Configuration errors
    // ========================================================================
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("no generator registered for framework '{framework}'")]
    UnregisteredFramework { framework: String },

    #[error("{framework} does not support {axis} '{value}' (supported: {supported})")]
    UnsupportedOption {
        framework: String,
        axis: String,
        value: String,
        supported: String,
    },

    #[error("{framework} does not expose a {axis} choice, but '{value}' was selected")]
    AxisNotExposed {
        framework: String,
        axis: String,
        value: String,
    },

    // ========================================================================
    // Artifact invariants
    // ========================================================================
    #[error("artifact set is empty")]
    EmptyArtifactSet,

    #[error("duplicate path in artifact set: {path}")]
    DuplicatePath { path: String },

    #[error("artifact paths must be relative and stay inside the project: {path}")]
    InvalidArtifactPath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPath => vec![
                "Pass a target directory, e.g. `kiln new my-app`".into(),
            ],
            Self::UnsafePath { protected, .. } => vec![
                format!("{protected} is a system directory"),
                "Choose a directory under your home or workspace folder".into(),
            ],
            Self::NotADirectory { path } => vec![
                format!("Remove or rename the file at {}", path.display()),
                "Or choose a different project path".into(),
            ],
            Self::DirectoryNotEmpty { path, .. } => vec![
                "Kiln never merges into or overwrites an existing project".into(),
                format!("Empty {} or choose a new directory", path.display()),
            ],
            Self::MissingProjectName { .. } => vec![
                "Pass an explicit name with --name".into(),
            ],
            Self::UnknownValue { kind, expected, .. } => vec![
                format!("Valid {kind} values: {expected}"),
            ],
            Self::UnregisteredFramework { .. } => vec![
                "Try: kiln list to see available frameworks".into(),
            ],
            Self::UnsupportedOption {
                framework,
                axis,
                supported,
                ..
            } => vec![
                format!("{framework} supports these {axis} choices: {supported}"),
                format!("Try: kiln list --framework {framework}"),
            ],
            Self::AxisNotExposed { framework, axis, .. } => vec![
                format!("{framework} handles {axis} itself; drop that option"),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyPath
            | Self::PathResolution { .. }
            | Self::UnsafePath { .. }
            | Self::NotADirectory { .. }
            | Self::DirectoryNotEmpty { .. }
            | Self::MissingProjectName { .. } => ErrorCategory::Path,
            Self::UnknownValue { .. }
            | Self::UnregisteredFramework { .. }
            | Self::UnsupportedOption { .. }
            | Self::AxisNotExposed { .. } => ErrorCategory::Configuration,
            Self::EmptyArtifactSet | Self::DuplicatePath { .. } | Self::InvalidArtifactPath { .. } => {
                ErrorCategory::Generation
            }
        }
    }
}

fn entry_noun(entries: &usize) -> &'static str {
    if *entries == 1 { "entry" } else { "entries" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Path,
    Configuration,
    Generation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_not_empty_names_the_entry_count() {
        let err = DomainError::DirectoryNotEmpty {
            path: PathBuf::from("/tmp/app"),
            entries: 3,
        };
        assert_eq!(err.to_string(), "/tmp/app is not empty (3 conflicting entries)");

        let single = DomainError::DirectoryNotEmpty {
            path: PathBuf::from("/tmp/app"),
            entries: 1,
        };
        assert!(single.to_string().ends_with("(1 conflicting entry)"));
    }

    #[test]
    fn categories_partition_variants() {
        assert_eq!(DomainError::EmptyPath.category(), ErrorCategory::Path);
        assert_eq!(
            DomainError::UnregisteredFramework {
                framework: "qwik".into()
            }
            .category(),
            ErrorCategory::Configuration
        );
        assert_eq!(DomainError::EmptyArtifactSet.category(), ErrorCategory::Generation);
    }

    #[test]
    fn unsupported_option_suggests_list_command() {
        let err = DomainError::UnsupportedOption {
            framework: "vue".into(),
            axis: "routing".into(),
            value: "react-router".into(),
            supported: "vue-router".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("kiln list")));
    }
}
