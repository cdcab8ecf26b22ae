//! Target-directory check over the filesystem port.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::{PathState, check_project_path};
use crate::error::KilnResult;

/// Accept a missing path or an empty directory; reject files and
/// populated directories.
///
/// Returns what was found so the caller knows whether it will be creating
/// the root itself.
pub fn validate_project_path(filesystem: &dyn Filesystem, path: &Path) -> KilnResult<PathState> {
    let state = filesystem.inspect(path)?;
    debug!(path = %path.display(), ?state, "inspected target");
    check_project_path(path, state)?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::DomainError;
    use crate::error::KilnError;

    fn fs_reporting(state: PathState) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_inspect().returning(move |_| Ok(state));
        fs
    }

    #[test]
    fn missing_path_is_accepted() {
        let fs = fs_reporting(PathState::Missing);
        assert_eq!(
            validate_project_path(&fs, Path::new("/tmp/new")).unwrap(),
            PathState::Missing
        );
    }

    #[test]
    fn populated_directory_names_the_entry_count() {
        let fs = fs_reporting(PathState::Directory { entries: 2 });
        let err = validate_project_path(&fs, Path::new("/tmp/app")).unwrap_err();

        assert!(matches!(
            err,
            KilnError::Domain(DomainError::DirectoryNotEmpty { entries: 2, .. })
        ));
        assert!(err.to_string().contains("2 conflicting entries"));
    }
}
