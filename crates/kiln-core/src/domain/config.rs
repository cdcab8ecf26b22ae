//! The project configuration: the sole input of a generation run.
//!
//! Built once through [`ProjectConfigBuilder`] and read-only afterwards.
//! Every optional axis is an `Option<T>`; `None` means the user chose
//! nothing for that axis and contributes no dependencies and no code.

use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{
    Animation, DataFetching, DataViz, FormManagement, Framework, I18n, Icons, Language,
    PackageManager, Routing, StateManagement, Structure, Styling, Testing, UiLibrary, Utilities,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: Option<String>,
    project_path: PathBuf,
    language: Language,
    framework: Framework,
    styling: Option<Styling>,
    routing: Option<Routing>,
    state_management: Option<StateManagement>,
    data_fetching: Option<DataFetching>,
    testing: Option<Testing>,
    ui_library: Option<UiLibrary>,
    form_management: Option<FormManagement>,
    animation: Option<Animation>,
    icons: Option<Icons>,
    data_viz: Option<DataViz>,
    utilities: Option<Utilities>,
    i18n: Option<I18n>,
    structure: Structure,
    package_manager: Option<PackageManager>,
    dry_run: bool,
}

impl ProjectConfig {
    pub fn builder(path: impl Into<PathBuf>, framework: Framework) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(path, framework)
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn styling(&self) -> Option<Styling> {
        self.styling
    }

    pub fn routing(&self) -> Option<Routing> {
        self.routing
    }

    pub fn state_management(&self) -> Option<StateManagement> {
        self.state_management
    }

    pub fn data_fetching(&self) -> Option<DataFetching> {
        self.data_fetching
    }

    pub fn testing(&self) -> Option<Testing> {
        self.testing
    }

    pub fn ui_library(&self) -> Option<UiLibrary> {
        self.ui_library
    }

    pub fn form_management(&self) -> Option<FormManagement> {
        self.form_management
    }

    pub fn animation(&self) -> Option<Animation> {
        self.animation
    }

    pub fn icons(&self) -> Option<Icons> {
        self.icons
    }

    pub fn data_viz(&self) -> Option<DataViz> {
        self.data_viz
    }

    pub fn utilities(&self) -> Option<Utilities> {
        self.utilities
    }

    pub fn i18n(&self) -> Option<I18n> {
        self.i18n
    }

    pub fn structure(&self) -> Structure {
        self.structure
    }

    /// `None` means dependency installation is not configured.
    pub fn package_manager(&self) -> Option<PackageManager> {
        self.package_manager
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// The explicit name, or the last component of the configured path.
    pub fn project_name(&self) -> Result<String, DomainError> {
        self.project_name_for(&self.project_path)
    }

    /// The explicit name, or the last component of `root`.
    ///
    /// The orchestrator passes the resolved root so that `.` names the
    /// project after the working directory.
    pub fn project_name_for(&self, root: &Path) -> Result<String, DomainError> {
        if let Some(name) = &self.project_name {
            return Ok(name.clone());
        }

        root.components()
            .rev()
            .find_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| DomainError::MissingProjectName {
                path: root.display().to_string(),
            })
    }

    /// A copy anchored on a resolved root, with the name made explicit.
    ///
    /// Generators only see the config, so the orchestrator hands them this
    /// copy; a relative `.` then still yields the directory's real name.
    pub fn for_root(&self, root: &Path) -> Result<Self, DomainError> {
        let name = self.project_name_for(root)?;
        Ok(Self {
            project_name: Some(name),
            project_path: root.to_path_buf(),
            ..self.clone()
        })
    }

    /// A copy with `dry_run` switched on. Used by the validator to re-derive
    /// the expected artifact set without side effects.
    pub fn as_dry_run(&self) -> Self {
        Self {
            dry_run: true,
            ..self.clone()
        }
    }
}

/// Builder for [`ProjectConfig`].
///
/// Axis setters accept either a value or an `Option`, so CLI code can pass
/// parsed `Option<T>` flags straight through.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    inner: ProjectConfig,
}

macro_rules! axis_setters {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        $(
            pub fn $field(mut self, value: impl Into<Option<$ty>>) -> Self {
                self.inner.$field = value.into();
                self
            }
        )+
    };
}

impl ProjectConfigBuilder {
    fn new(path: impl Into<PathBuf>, framework: Framework) -> Self {
        Self {
            inner: ProjectConfig {
                project_name: None,
                project_path: path.into(),
                language: Language::TypeScript,
                framework,
                styling: None,
                routing: None,
                state_management: None,
                data_fetching: None,
                testing: None,
                ui_library: None,
                form_management: None,
                animation: None,
                icons: None,
                data_viz: None,
                utilities: None,
                i18n: None,
                structure: Structure::default(),
                package_manager: None,
                dry_run: false,
            },
        }
    }

    /// Explicit project name. Blank names fall back to the path.
    pub fn name(mut self, name: impl Into<Option<String>>) -> Self {
        self.inner.project_name = name
            .into()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.inner.language = language;
        self
    }

    axis_setters! {
        styling: Styling,
        routing: Routing,
        state_management: StateManagement,
        data_fetching: DataFetching,
        testing: Testing,
        ui_library: UiLibrary,
        form_management: FormManagement,
        animation: Animation,
        icons: Icons,
        data_viz: DataViz,
        utilities: Utilities,
        i18n: I18n,
        package_manager: PackageManager,
    }

    pub fn structure(mut self, structure: Structure) -> Self {
        self.inner.structure = structure;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.inner.dry_run = dry_run;
        self
    }

    pub fn build(self) -> ProjectConfig {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_every_axis_unset() {
        let config = ProjectConfig::builder("app", Framework::Vue).build();

        assert_eq!(config.language(), Language::TypeScript);
        assert_eq!(config.structure(), Structure::FeatureBased);
        assert_eq!(config.styling(), None);
        assert_eq!(config.routing(), None);
        assert_eq!(config.package_manager(), None);
        assert!(!config.is_dry_run());
    }

    #[test]
    fn setters_accept_values_and_options() {
        let routing: Option<Routing> = None;
        let config = ProjectConfig::builder("app", Framework::React)
            .styling(Styling::Tailwind)
            .routing(routing)
            .state_management(Some(StateManagement::Zustand))
            .build();

        assert_eq!(config.styling(), Some(Styling::Tailwind));
        assert_eq!(config.routing(), None);
        assert_eq!(config.state_management(), Some(StateManagement::Zustand));
    }

    #[test]
    fn project_name_falls_back_to_last_path_component() {
        let config = ProjectConfig::builder("work/dashboard/", Framework::Svelte).build();
        assert_eq!(config.project_name().unwrap(), "dashboard");
    }

    #[test]
    fn explicit_name_wins_and_blank_name_is_ignored() {
        let named = ProjectConfig::builder("work/app", Framework::Svelte)
            .name(Some("Storefront".to_string()))
            .build();
        assert_eq!(named.project_name().unwrap(), "Storefront");

        let blank = ProjectConfig::builder("work/app", Framework::Svelte)
            .name(Some("   ".to_string()))
            .build();
        assert_eq!(blank.project_name().unwrap(), "app");
    }

    #[test]
    fn root_path_has_no_name() {
        let config = ProjectConfig::builder("/", Framework::Astro).build();
        assert!(matches!(
            config.project_name(),
            Err(DomainError::MissingProjectName { .. })
        ));
    }

    #[test]
    fn for_root_pins_name_and_path() {
        let config = ProjectConfig::builder(".", Framework::React).build();
        assert!(config.project_name().is_err());

        let anchored = config.for_root(Path::new("/home/dev/shop")).unwrap();
        assert_eq!(anchored.project_name().unwrap(), "shop");
        assert_eq!(anchored.project_path(), Path::new("/home/dev/shop"));
        assert_eq!(anchored.framework(), Framework::React);
    }

    #[test]
    fn as_dry_run_only_flips_the_flag() {
        let config = ProjectConfig::builder("app", Framework::Solid)
            .icons(Icons::Lucide)
            .build();
        let dry = config.as_dry_run();

        assert!(dry.is_dry_run());
        assert_eq!(dry.icons(), config.icons());
        assert_eq!(dry.project_path(), config.project_path());
    }
}
