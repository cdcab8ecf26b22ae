//! Validation Service - post-generation inspection of a project tree.
//!
//! Re-derives what the config implies and checks it against the disk.
//! Every check is independent: a failing check, or a config that no
//! longer resolves, never prevents the remaining checks from running.

use std::fmt;
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ports::Filesystem, registry::GeneratorRegistry},
    domain::{ArtifactSet, PathState, ProjectConfig, find_framework},
    error::KilnResult,
};

/// One named pass/fail check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub check: String,
    pub passed: bool,
    pub detail: String,
}

impl ValidationResult {
    fn new(check: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            passed,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "ok" } else { "FAIL" };
        write!(f, "[{mark}] {}: {}", self.check, self.detail)
    }
}

pub struct ValidationService<'a> {
    registry: &'a GeneratorRegistry,
    filesystem: Box<dyn Filesystem>,
}

impl<'a> ValidationService<'a> {
    pub fn new(registry: &'a GeneratorRegistry, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            registry,
            filesystem,
        }
    }

    /// Run every check against the project at `root`.
    ///
    /// The caller decides what a failure means; there is no aggregate.
    #[instrument(skip_all, fields(root = %root.display(), framework = %config.framework()))]
    pub fn validate_project(&self, root: &Path, config: &ProjectConfig) -> Vec<ValidationResult> {
        let mut results = vec![self.check_root(root)];

        match self.expected_artifacts(root, config) {
            Ok(artifacts) => {
                for dir in artifacts.directories() {
                    results.push(self.check_exists(root, &format!("directory {dir}"), dir.as_path()));
                }
                for (file, _) in artifacts.files() {
                    results.push(self.check_exists(root, &format!("file {file}"), file.as_path()));
                }
            }
            Err(e) => results.push(ValidationResult::new(
                "expected artifacts",
                false,
                format!("cannot derive artifact list: {e}"),
            )),
        }

        results.push(self.check_manifest(root, config));
        results.push(self.check_build_config(root, config));
        if config.language().is_typescript() {
            results.push(self.check_exists(root, "tsconfig", Path::new("tsconfig.json")));
        }

        debug!(
            checks = results.len(),
            failed = results.iter().filter(|r| !r.passed).count(),
            "validation finished"
        );
        results
    }

    /// Regenerate in memory, named after the directory being checked.
    fn expected_artifacts(&self, root: &Path, config: &ProjectConfig) -> KilnResult<ArtifactSet> {
        let dry = config.for_root(root)?.as_dry_run();
        self.registry.resolve(&dry)?.generate(&dry)
    }

    fn check_root(&self, root: &Path) -> ValidationResult {
        match self.filesystem.inspect(root) {
            Ok(PathState::Directory { entries }) => {
                ValidationResult::new("project root", true, format!("{entries} entries"))
            }
            Ok(PathState::File) => ValidationResult::new("project root", false, "is a file"),
            Ok(PathState::Missing) => ValidationResult::new("project root", false, "does not exist"),
            Err(e) => ValidationResult::new("project root", false, e.to_string()),
        }
    }

    fn check_exists(&self, root: &Path, check: &str, relative: &Path) -> ValidationResult {
        let path = root.join(relative);
        let found = self.filesystem.exists(&path);
        let detail = if found { "present" } else { "missing" };
        ValidationResult::new(check, found, format!("{} {detail}", relative.display()))
    }

    fn check_manifest(&self, root: &Path, config: &ProjectConfig) -> ValidationResult {
        let check = "package.json names framework";
        let Some(def) = find_framework(config.framework()) else {
            return ValidationResult::new(check, false, "framework has no table entry");
        };

        match self.filesystem.read_to_string(&root.join("package.json")) {
            Ok(manifest) if manifest.contains(&format!("\"{}\"", def.package)) => {
                ValidationResult::new(check, true, format!("lists {}", def.package))
            }
            Ok(_) => ValidationResult::new(check, false, format!("does not list {}", def.package)),
            Err(e) => ValidationResult::new(check, false, e.to_string()),
        }
    }

    fn check_build_config(&self, root: &Path, config: &ProjectConfig) -> ValidationResult {
        let check = "build config";
        match find_framework(config.framework()) {
            Some(def) => {
                let name = def.build_config.file_name(config.language());
                self.check_exists(root, check, Path::new(name))
            }
            None => ValidationResult::new(check, false, "framework has no table entry"),
        }
    }
}
