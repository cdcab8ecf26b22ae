//! Setup Service - main application orchestrator.
//!
//! Turns a [`ProjectConfig`] into a project directory:
//! 1. Resolve the target path and check it is safe
//! 2. Check the target is missing or empty
//! 3. Look up the generator and check every option against it
//! 4. Generate all artifacts in memory
//! 5. Materialise (skipped in dry-run)
//! 6. Install dependencies (skipped in dry-run or when not configured)
//!
//! Stages 1-4 never touch the disk. A failure in stage 5 removes the root
//! if this run created it. A failure in stage 6 is reported in the outcome
//! and leaves the written files in place.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        error::InstallError,
        ports::{DependencyInstaller, Filesystem},
        registry::GeneratorRegistry,
        services::path_guard::validate_project_path,
    },
    domain::{
        ArtifactSet, Framework, PackageManager, PathPolicy, PathState, ProjectConfig,
        resolve_project_path,
    },
    error::KilnResult,
};

/// Why the install stage did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    DryRun,
    /// No package manager in the config.
    NotConfigured,
    /// The service was built without an installer.
    NoInstaller,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    Skipped(SkipReason),
    Completed { manager: PackageManager },
    Failed {
        manager: PackageManager,
        error: InstallError,
    },
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub root: PathBuf,
    pub project_name: String,
    pub framework: Framework,
    /// Absolute directories, root first, in creation order.
    pub directories: Vec<PathBuf>,
    /// Absolute file paths, sorted.
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
    pub install: InstallStatus,
}

impl SetupOutcome {
    /// Every path that was written (or, in dry-run, would have been).
    pub fn written_paths(&self) -> impl Iterator<Item = &Path> {
        self.directories
            .iter()
            .chain(self.files.iter())
            .map(PathBuf::as_path)
    }
}

/// Main project setup service.
pub struct SetupService<'a> {
    registry: &'a GeneratorRegistry,
    filesystem: Box<dyn Filesystem>,
    installer: Option<Box<dyn DependencyInstaller>>,
    policy: PathPolicy,
}

impl<'a> SetupService<'a> {
    /// Create a service over a registry and filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kiln_core::prelude::*;
    /// # fn adapters() -> (GeneratorRegistry, Box<dyn Filesystem>) { unimplemented!() }
    ///
    /// let (registry, filesystem) = adapters();
    /// let service = SetupService::new(&registry, filesystem, PathPolicy::from_env());
    /// let config = ProjectConfig::builder("my-app", Framework::React).build();
    /// let outcome = service.setup_project(&config, std::path::Path::new(".")).unwrap();
    /// println!("created {}", outcome.root.display());
    /// ```
    pub fn new(
        registry: &'a GeneratorRegistry,
        filesystem: Box<dyn Filesystem>,
        policy: PathPolicy,
    ) -> Self {
        Self {
            registry,
            filesystem,
            installer: None,
            policy,
        }
    }

    pub fn with_installer(mut self, installer: Box<dyn DependencyInstaller>) -> Self {
        self.installer = Some(installer);
        self
    }

    #[instrument(
        skip_all,
        fields(
            framework = %config.framework(),
            path = %config.project_path().display(),
            dry_run = config.is_dry_run()
        )
    )]
    pub fn setup_project(&self, config: &ProjectConfig, cwd: &Path) -> KilnResult<SetupOutcome> {
        // 1. Resolve
        let root = resolve_project_path(config.project_path(), cwd, &self.policy)?;
        let config = config.for_root(&root)?;
        let project_name = config.project_name()?;
        debug!(root = %root.display(), %project_name, "resolved target");

        // 2. Validate target
        let existing = validate_project_path(self.filesystem.as_ref(), &root)?;

        // 3. Capability check
        let generator = self.registry.resolve(&config)?;

        // 4. Generate
        let artifacts = generator.generate(&config)?;
        artifacts.validate()?;
        info!(
            files = artifacts.file_count(),
            directories = artifacts.directory_count(),
            "artifacts generated"
        );

        let directories: Vec<PathBuf> = std::iter::once(root.clone())
            .chain(artifacts.directories().map(|d| root.join(d.as_path())))
            .collect();
        let files: Vec<PathBuf> = artifacts
            .files()
            .map(|(path, _)| root.join(path.as_path()))
            .collect();

        let mut outcome = SetupOutcome {
            root,
            project_name,
            framework: config.framework(),
            directories,
            files,
            dry_run: config.is_dry_run(),
            install: InstallStatus::Skipped(SkipReason::DryRun),
        };

        if config.is_dry_run() {
            info!("dry run: nothing written");
            return Ok(outcome);
        }

        // 5. Materialise
        if let Err(e) = self.materialize(&outcome.root, &artifacts) {
            if existing == PathState::Missing {
                warn!("write failed, attempting rollback");
                self.rollback(&outcome.root);
            }
            return Err(e);
        }
        info!(root = %outcome.root.display(), "project written");

        // 6. Install
        outcome.install = self.install(&outcome.root, config.package_manager());
        Ok(outcome)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn materialize(&self, root: &Path, artifacts: &ArtifactSet) -> KilnResult<()> {
        let mut created = BTreeSet::new();

        self.filesystem.create_dir_all(root)?;
        created.insert(root.to_path_buf());

        for dir in artifacts.directories() {
            let path = root.join(dir.as_path());
            self.filesystem.create_dir_all(&path)?;
            created.insert(path);
        }

        for (relative, content) in artifacts.files() {
            let path = root.join(relative.as_path());
            if let Some(parent) = path.parent() {
                if !created.contains(parent) {
                    self.filesystem.create_dir_all(parent)?;
                    created.insert(parent.to_path_buf());
                }
            }
            self.filesystem.write_file(&path, content)?;
        }

        Ok(())
    }

    fn install(&self, root: &Path, manager: Option<PackageManager>) -> InstallStatus {
        let Some(manager) = manager else {
            return InstallStatus::Skipped(SkipReason::NotConfigured);
        };
        let Some(installer) = &self.installer else {
            return InstallStatus::Skipped(SkipReason::NoInstaller);
        };

        info!(%manager, "installing dependencies");
        match installer.install(root, manager) {
            Ok(()) => InstallStatus::Completed { manager },
            Err(error) => {
                warn!(%error, "install failed; project files kept");
                InstallStatus::Failed { manager, error }
            }
        }
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "rollback failed"
            );
        } else {
            info!("rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockDependencyInstaller, MockFilesystem};
    use crate::application::registry::Generator;
    use crate::domain::{
        DomainError, GeneratorCapability, Language, Routing, find_framework,
    };
    use crate::error::KilnError;

    /// Emits a fixed two-directory, two-file project.
    struct StubGenerator;

    impl Generator for StubGenerator {
        fn supported_options(&self) -> &'static GeneratorCapability {
            &find_framework(Framework::Vanilla).unwrap().capability
        }

        fn generate(&self, config: &ProjectConfig) -> KilnResult<ArtifactSet> {
            self.supported_options().check(Framework::Vanilla, config)?;
            let mut set = ArtifactSet::new();
            set.add_directory("src")?;
            set.add_directory("src/utils")?;
            set.add_file("package.json", "{}")?;
            set.add_file("src/lib/main.ts", "console.log('hi');")?;
            Ok(set)
        }
    }

    fn registry() -> GeneratorRegistry {
        let mut registry = GeneratorRegistry::new();
        registry.register(Framework::Vanilla, StubGenerator);
        registry
    }

    fn policy() -> PathPolicy {
        PathPolicy::new("/tmp")
    }

    fn config() -> crate::domain::ProjectConfigBuilder {
        ProjectConfig::builder("site", Framework::Vanilla).language(Language::TypeScript)
    }

    fn cwd() -> &'static Path {
        Path::new("/home/dev")
    }

    fn empty_target() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_inspect().returning(|_| Ok(PathState::Missing));
        fs
    }

    #[cfg(unix)]
    #[test]
    fn dry_run_reports_paths_without_writing() {
        let registry = registry();
        let mut fs = empty_target();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut installer = MockDependencyInstaller::new();
        installer.expect_install().never();

        let service = SetupService::new(&registry, Box::new(fs), policy())
            .with_installer(Box::new(installer));
        let outcome = service
            .setup_project(
                &config()
                    .dry_run(true)
                    .package_manager(PackageManager::Npm)
                    .build(),
                cwd(),
            )
            .unwrap();

        assert!(outcome.dry_run);
        assert_eq!(outcome.project_name, "site");
        assert_eq!(outcome.install, InstallStatus::Skipped(SkipReason::DryRun));
        let paths: Vec<_> = outcome.written_paths().collect();
        assert_eq!(
            paths,
            [
                Path::new("/home/dev/site"),
                Path::new("/home/dev/site/src"),
                Path::new("/home/dev/site/src/utils"),
                Path::new("/home/dev/site/package.json"),
                Path::new("/home/dev/site/src/lib/main.ts"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn materialize_creates_undeclared_parents_once() {
        let registry = registry();
        let mut fs = empty_target();
        // root, src, src/utils, then src/lib on demand for main.ts
        fs.expect_create_dir_all().times(4).returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service = SetupService::new(&registry, Box::new(fs), policy());
        let outcome = service.setup_project(&config().build(), cwd()).unwrap();

        assert_eq!(
            outcome.install,
            InstallStatus::Skipped(SkipReason::NotConfigured)
        );
    }

    #[cfg(unix)]
    #[test]
    fn unsafe_path_fails_before_inspecting_the_target() {
        let registry = registry();
        let mut fs = MockFilesystem::new();
        fs.expect_inspect().never();

        let service = SetupService::new(&registry, Box::new(fs), policy());
        let config = ProjectConfig::builder("/etc/newproj", Framework::Vanilla).build();
        let err = service.setup_project(&config, cwd()).unwrap_err();

        assert!(matches!(err, KilnError::Domain(DomainError::UnsafePath { .. })));
    }

    #[test]
    fn unsupported_option_fails_without_writing() {
        let registry = registry();
        let mut fs = empty_target();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = SetupService::new(&registry, Box::new(fs), policy());
        let config = config().routing(Routing::VueRouter).build();
        let err = service.setup_project(&config, cwd()).unwrap_err();

        assert!(matches!(
            err,
            KilnError::Domain(DomainError::AxisNotExposed { .. })
        ));
    }

    #[test]
    fn write_failure_rolls_back_a_created_root() {
        let registry = registry();
        let mut fs = empty_target();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::filesystem(path, "disk full").into())
        });
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        let service = SetupService::new(&registry, Box::new(fs), policy());
        let err = service.setup_project(&config().build(), cwd()).unwrap_err();

        assert!(matches!(
            err,
            KilnError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn write_failure_leaves_a_preexisting_root_alone() {
        let registry = registry();
        let mut fs = MockFilesystem::new();
        fs.expect_inspect()
            .returning(|_| Ok(PathState::Directory { entries: 0 }));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .returning(|path, _| Err(ApplicationError::filesystem(path, "denied").into()));
        fs.expect_remove_dir_all().never();

        let service = SetupService::new(&registry, Box::new(fs), policy());
        assert!(service.setup_project(&config().build(), cwd()).is_err());
    }

    #[test]
    fn install_failure_is_reported_not_unwound() {
        let registry = registry();
        let mut fs = empty_target();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().never();

        let mut installer = MockDependencyInstaller::new();
        installer
            .expect_install()
            .withf(|_, manager| *manager == PackageManager::Pnpm)
            .times(1)
            .returning(|_, _| {
                Err(InstallError::NonZeroExit {
                    program: "pnpm".into(),
                    code: Some(1),
                })
            });

        let service = SetupService::new(&registry, Box::new(fs), policy())
            .with_installer(Box::new(installer));
        let outcome = service
            .setup_project(&config().package_manager(PackageManager::Pnpm).build(), cwd())
            .unwrap();

        assert!(matches!(
            outcome.install,
            InstallStatus::Failed {
                manager: PackageManager::Pnpm,
                ..
            }
        ));
    }

    #[test]
    fn missing_installer_skips_install() {
        let registry = registry();
        let mut fs = empty_target();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = SetupService::new(&registry, Box::new(fs), policy());
        let outcome = service
            .setup_project(&config().package_manager(PackageManager::Bun).build(), cwd())
            .unwrap();
        assert_eq!(outcome.install, InstallStatus::Skipped(SkipReason::NoInstaller));
    }
}
