//! Path normalisation and safety rules.
//!
//! Pure functions over paths. The only environment read is
//! [`PathPolicy::from_env`], done once at process entry, plus the fallback
//! working-directory lookup in [`normalize_path`].

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::domain::error::DomainError;

/// System directories a project may never be written into.
///
/// Windows entries compare case-insensitively and accept either separator.
pub const PROTECTED_DIRECTORIES: &[&str] = &[
    "/bin",
    "/sbin",
    "/boot",
    "/dev",
    "/etc",
    "/lib",
    "/lib64",
    "/proc",
    "/sys",
    "/usr",
    "/var",
    "/System",
    "/Library",
    "/private/etc",
    r"C:\Windows",
    r"C:\Program Files",
    r"C:\Program Files (x86)",
    r"C:\ProgramData",
];

/// What currently exists at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    Missing,
    File,
    Directory { entries: usize },
}

/// Environment-derived inputs to the safety check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPolicy {
    temp_root: PathBuf,
}

impl PathPolicy {
    pub fn new(temp_root: impl Into<PathBuf>) -> Self {
        Self {
            temp_root: clean(&temp_root.into()),
        }
    }

    /// Reads the system temporary directory.
    pub fn from_env() -> Self {
        Self::new(std::env::temp_dir())
    }

    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }
}

/// Lexically remove `.` and `..` without touching the filesystem.
///
/// `..` never climbs above the root of an absolute path.
fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Resolve a user-supplied path to a clean absolute path.
///
/// Relative paths are joined onto `cwd`. If the result is still relative
/// (because `cwd` was), it is anchored on the process working directory.
pub fn normalize_path(user_path: &Path, cwd: &Path) -> Result<PathBuf, DomainError> {
    if user_path.to_string_lossy().trim().is_empty() {
        return Err(DomainError::EmptyPath);
    }

    let joined = if user_path.is_absolute() {
        user_path.to_path_buf()
    } else {
        cwd.join(user_path)
    };

    let cleaned = clean(&joined);
    if cleaned.is_absolute() {
        return Ok(cleaned);
    }

    let process_cwd = std::env::current_dir().map_err(|e| DomainError::PathResolution {
        path: user_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let anchored = clean(&process_cwd.join(cleaned));
    if anchored.is_absolute() {
        Ok(anchored)
    } else {
        Err(DomainError::PathResolution {
            path: user_path.display().to_string(),
            reason: "working directory is not absolute".into(),
        })
    }
}

/// Forward-slash form without a trailing separator, for prefix matching.
fn comparable(path: &str) -> String {
    let mut s = path.replace('\\', "/");
    while s.len() > 1 && s.ends_with('/') {
        s.pop();
    }
    s
}

fn is_filesystem_root(candidate: &str) -> bool {
    if candidate == "/" {
        return true;
    }
    // `C:` or `C:/`
    let bytes = candidate.as_bytes();
    matches!(bytes, [drive, b':'] | [drive, b':', b'/'] if drive.is_ascii_alphabetic())
}

fn is_within(candidate: &str, base: &str, ignore_case: bool) -> bool {
    let (candidate, base) = if ignore_case {
        (candidate.to_ascii_lowercase(), base.to_ascii_lowercase())
    } else {
        (candidate.to_string(), base.to_string())
    };

    candidate == base
        || candidate
            .strip_prefix(base.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Reject filesystem roots and anything equal to or inside a protected
/// directory. Paths under the policy's temp root are always allowed.
pub fn validate_path_safety(path: &Path, policy: &PathPolicy) -> Result<(), DomainError> {
    let candidate = comparable(&path.to_string_lossy());

    let temp = comparable(&policy.temp_root.to_string_lossy());
    if !is_filesystem_root(&temp) && is_within(&candidate, &temp, cfg!(windows)) {
        debug!(path = %path.display(), "path is under the temp root");
        return Ok(());
    }

    if is_filesystem_root(&candidate) {
        return Err(DomainError::UnsafePath {
            path: path.to_path_buf(),
            protected: candidate,
        });
    }

    for protected in PROTECTED_DIRECTORIES {
        let windows_entry = protected.contains(':');
        let base = comparable(protected);
        if is_within(&candidate, &base, windows_entry) {
            return Err(DomainError::UnsafePath {
                path: path.to_path_buf(),
                protected: (*protected).to_string(),
            });
        }
    }

    Ok(())
}

/// Normalise then safety-check a user path.
pub fn resolve_project_path(
    user_path: &Path,
    cwd: &Path,
    policy: &PathPolicy,
) -> Result<PathBuf, DomainError> {
    let absolute = normalize_path(user_path, cwd)?;
    validate_path_safety(&absolute, policy)?;
    Ok(absolute)
}

/// Decide whether a target may be generated into, given what exists there.
pub fn check_project_path(path: &Path, state: PathState) -> Result<(), DomainError> {
    match state {
        PathState::Missing | PathState::Directory { entries: 0 } => Ok(()),
        PathState::File => Err(DomainError::NotADirectory {
            path: path.to_path_buf(),
        }),
        PathState::Directory { entries } => Err(DomainError::DirectoryNotEmpty {
            path: path.to_path_buf(),
            entries,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PathPolicy {
        PathPolicy::new("/tmp")
    }

    // ── normalize_path ───────────────────────────────────────────────────────

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!(
            normalize_path(Path::new(""), Path::new("/home/dev")),
            Err(DomainError::EmptyPath)
        );
        assert_eq!(
            normalize_path(Path::new("  "), Path::new("/home/dev")),
            Err(DomainError::EmptyPath)
        );
    }

    #[cfg(unix)]
    #[test]
    fn relative_paths_join_the_working_directory() {
        let out = normalize_path(Path::new("apps/./web"), Path::new("/home/dev")).unwrap();
        assert_eq!(out, PathBuf::from("/home/dev/apps/web"));
    }

    #[cfg(unix)]
    #[test]
    fn parent_segments_are_cleaned() {
        let out = normalize_path(Path::new("../site"), Path::new("/home/dev/work")).unwrap();
        assert_eq!(out, PathBuf::from("/home/dev/site"));
    }

    #[cfg(unix)]
    #[test]
    fn parent_segments_never_climb_above_root() {
        let out = normalize_path(Path::new("/../../etc/x"), Path::new("/")).unwrap();
        assert_eq!(out, PathBuf::from("/etc/x"));
    }

    #[test]
    fn relative_cwd_is_anchored_on_process_directory() {
        let out = normalize_path(Path::new("site"), Path::new("relative")).unwrap();
        assert!(out.is_absolute());
        assert!(out.ends_with("relative/site"));
    }

    // ── validate_path_safety ─────────────────────────────────────────────────

    #[test]
    fn protected_directories_and_children_are_rejected() {
        for path in ["/etc", "/etc/newproj", "/usr/local/app", "/System/Library/x"] {
            let err = validate_path_safety(Path::new(path), &policy()).unwrap_err();
            assert!(matches!(err, DomainError::UnsafePath { .. }), "{path}");
        }
    }

    #[test]
    fn filesystem_root_is_rejected() {
        assert!(validate_path_safety(Path::new("/"), &policy()).is_err());
        assert!(validate_path_safety(Path::new(r"D:\"), &policy()).is_err());
    }

    #[test]
    fn prefix_match_respects_component_boundaries() {
        assert!(validate_path_safety(Path::new("/userbin/app"), &policy()).is_ok());
        assert!(validate_path_safety(Path::new("/usrlocal"), &policy()).is_ok());
        assert!(validate_path_safety(Path::new("/etcetera/app"), &policy()).is_ok());
        assert!(validate_path_safety(Path::new("/home/dev/etc"), &policy()).is_ok());
    }

    #[test]
    fn windows_entries_match_case_insensitively_with_either_separator() {
        for path in [
            r"C:\Windows\System32\app",
            "c:/windows/app",
            r"C:\PROGRAM FILES\thing",
            r"c:\programdata",
        ] {
            assert!(
                validate_path_safety(Path::new(path), &policy()).is_err(),
                "{path}"
            );
        }
        assert!(validate_path_safety(Path::new(r"C:\Users\dev\app"), &policy()).is_ok());
    }

    #[test]
    fn temp_root_overrides_the_deny_list() {
        let macos = PathPolicy::new("/var/folders/xy/abc123/T");
        assert!(validate_path_safety(Path::new("/var/folders/xy/abc123/T/proj"), &macos).is_ok());
        assert!(validate_path_safety(Path::new("/var/folders/xy/abc123/T"), &macos).is_ok());
        assert!(validate_path_safety(Path::new("/var/log/proj"), &macos).is_err());
        assert!(validate_path_safety(Path::new("/var/folders/xy/abc123/Tmp"), &macos).is_err());
    }

    #[test]
    fn root_temp_dir_grants_nothing() {
        let weird = PathPolicy::new("/");
        assert!(validate_path_safety(Path::new("/etc/app"), &weird).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_rejects_traversal_into_protected_dirs() {
        let err = resolve_project_path(
            Path::new("../../../etc/newproj"),
            Path::new("/home/dev"),
            &policy(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::UnsafePath { .. }));
    }

    // ── check_project_path ───────────────────────────────────────────────────

    #[test]
    fn missing_and_empty_targets_are_accepted() {
        let p = Path::new("/tmp/app");
        assert!(check_project_path(p, PathState::Missing).is_ok());
        assert!(check_project_path(p, PathState::Directory { entries: 0 }).is_ok());
    }

    #[test]
    fn occupied_targets_report_entry_count() {
        let p = Path::new("/tmp/app");
        assert_eq!(
            check_project_path(p, PathState::Directory { entries: 4 }),
            Err(DomainError::DirectoryNotEmpty {
                path: p.to_path_buf(),
                entries: 4
            })
        );
        assert!(matches!(
            check_project_path(p, PathState::File),
            Err(DomainError::NotADirectory { .. })
        ));
    }
}
