use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path};

use crate::domain::error::DomainError;

/// A project-relative path.
///
/// Invariant: never absolute, never escapes the project root (no `..`),
/// never empty. Stored with `/` separators so ordering and output are the
/// same on every platform.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let invalid = || DomainError::InvalidArtifactPath {
            path: path.display().to_string(),
        };

        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(segment) => {
                    segments.push(segment.to_str().ok_or_else(invalid)?);
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid());
                }
            }
        }

        if segments.is_empty() {
            return Err(invalid());
        }
        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// The containing directory, if this path is nested.
    pub fn parent(&self) -> Option<RelativePath> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| Self(parent.to_string()))
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The complete output of one generator run, held in memory.
///
/// Directories keep insertion order (parents are declared before
/// children). Files are keyed by path, so iteration order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    directories: Vec<RelativePath>,
    files: BTreeMap<RelativePath, String>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a directory. Declaring the same directory twice is an error.
    pub fn add_directory(&mut self, path: impl AsRef<Path>) -> Result<(), DomainError> {
        let path = RelativePath::new(path)?;
        if self.directories.contains(&path) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }
        self.directories.push(path);
        Ok(())
    }

    /// Add a file. Adding the same path twice is an error.
    pub fn add_file(
        &mut self,
        path: impl AsRef<Path>,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        let path = RelativePath::new(path)?;
        if self.files.contains_key(&path) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }
        self.files.insert(path, content.into());
        Ok(())
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.directories.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = (&RelativePath, &str)> {
        self.files.iter().map(|(path, content)| (path, content.as_str()))
    }

    /// Content of a file, looked up by its `/`-separated path.
    pub fn content(&self, path: &str) -> Option<&str> {
        let key = RelativePath::new(path).ok()?;
        self.files.get(&key).map(String::as_str)
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.content(path).is_some()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    /// A set with no files is not a project.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyArtifactSet);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_normalizes_separators_and_dots() {
        let p = RelativePath::new("./src/./components/App.tsx").unwrap();
        assert_eq!(p.as_str(), "src/components/App.tsx");
        assert_eq!(p.parent().unwrap().as_str(), "src/components");
        assert_eq!(RelativePath::new("index.html").unwrap().parent(), None);
    }

    #[test]
    fn relative_path_rejects_escapes() {
        for bad in ["/etc/passwd", "../outside", "src/../../x", "", "."] {
            assert!(
                matches!(
                    RelativePath::new(bad),
                    Err(DomainError::InvalidArtifactPath { .. })
                ),
                "{bad:?} was accepted"
            );
        }
    }

    #[test]
    fn duplicate_files_and_directories_are_rejected() {
        let mut set = ArtifactSet::new();
        set.add_directory("src").unwrap();
        set.add_file("src/main.ts", "").unwrap();

        assert_eq!(
            set.add_directory("./src"),
            Err(DomainError::DuplicatePath { path: "src".into() })
        );
        assert_eq!(
            set.add_file("src/main.ts", "again"),
            Err(DomainError::DuplicatePath {
                path: "src/main.ts".into()
            })
        );
    }

    #[test]
    fn files_iterate_in_path_order() {
        let mut set = ArtifactSet::new();
        set.add_file("src/main.ts", "b").unwrap();
        set.add_file("index.html", "a").unwrap();
        set.add_file("package.json", "c").unwrap();

        let order: Vec<_> = set.files().map(|(p, _)| p.as_str()).collect();
        assert_eq!(order, ["index.html", "package.json", "src/main.ts"]);
        assert_eq!(set.content("src/main.ts"), Some("b"));
    }

    #[test]
    fn directories_keep_declaration_order() {
        let mut set = ArtifactSet::new();
        for dir in ["src", "src/shared", "public"] {
            set.add_directory(dir).unwrap();
        }
        let order: Vec<_> = set.directories().map(RelativePath::as_str).collect();
        assert_eq!(order, ["src", "src/shared", "public"]);
    }

    #[test]
    fn empty_set_fails_validation() {
        let mut set = ArtifactSet::new();
        assert_eq!(set.validate(), Err(DomainError::EmptyArtifactSet));

        set.add_directory("src").unwrap();
        assert_eq!(set.validate(), Err(DomainError::EmptyArtifactSet));

        set.add_file("README.md", "# app").unwrap();
        assert!(set.validate().is_ok());
    }
}
