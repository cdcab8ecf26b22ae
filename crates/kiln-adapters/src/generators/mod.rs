//! Built-in framework generators.
//!
//! A framework module only writes what is specific to it: entry points,
//! components and its build config. Everything driven by the option axes
//! (dependencies, test runner files, styling tool configs, tsconfig,
//! README) is added by [`Scaffold::finish`], so all nine generators treat
//! the axes the same way.
//!
//! Generation never touches the filesystem and never looks at the package
//! manager: the same config always produces the same [`ArtifactSet`].

mod angular;
mod astro;
pub mod clients;
pub mod common;
pub mod fragments;
pub mod i18n;
pub mod layout;
pub mod manifest;
mod next;
pub mod providers;
mod react;
mod solid;
pub mod stores;
pub mod styling;
mod svelte;
mod sveltekit;
pub mod testing;
pub mod tsconfig;
mod vanilla;
pub mod vite;
mod vue;

use std::fmt::Display;
use std::path::Path;

use tracing::{debug, instrument};

use kiln_core::application::{ApplicationError, Generator, GeneratorRegistry};
use kiln_core::domain::{
    ArtifactSet, CAPABILITY_TABLE, Framework, FrameworkDef, GeneratorCapability, Language,
    ProjectConfig, Structure, Testing,
};
use kiln_core::error::KilnResult;

use self::clients::ClientModule;
use self::layout::{FEATURES_README, FEATURES_README_PATH, Layout, utils_source};
use self::manifest::Manifest;
use self::stores::StoreModule;
use self::vite::VitePlugin;

type Emit = fn(&mut Scaffold<'_>) -> KilnResult<()>;

/// A [`Generator`] for one row of the capability table.
pub struct FrameworkGenerator {
    def: &'static FrameworkDef,
    emit: Emit,
}

impl std::fmt::Debug for FrameworkGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameworkGenerator")
            .field("framework", &self.def.framework)
            .finish()
    }
}

impl FrameworkGenerator {
    pub fn for_def(def: &'static FrameworkDef) -> Self {
        let emit: Emit = match def.framework {
            Framework::React => react::emit,
            Framework::Vue => vue::emit,
            Framework::Svelte => svelte::emit,
            Framework::Solid => solid::emit,
            Framework::Angular => angular::emit,
            Framework::Vanilla => vanilla::emit,
            Framework::NextJs => next::emit,
            Framework::Astro => astro::emit,
            Framework::SvelteKit => sveltekit::emit,
        };
        Self { def, emit }
    }

    pub fn framework(&self) -> Framework {
        self.def.framework
    }
}

impl Generator for FrameworkGenerator {
    fn supported_options(&self) -> &'static GeneratorCapability {
        &self.def.capability
    }

    #[instrument(skip_all, fields(framework = %self.def.framework))]
    fn generate(&self, config: &ProjectConfig) -> KilnResult<ArtifactSet> {
        let framework = self.def.framework;
        if config.framework() != framework {
            return Err(generation_failed(
                framework,
                format!("cannot generate a {} project", config.framework()),
            )
            .into());
        }
        self.def.capability.check(framework, config)?;

        let mut scaffold = Scaffold::new(config)?;
        (self.emit)(&mut scaffold)?;
        let set = scaffold.finish()?;

        debug!(
            files = set.file_count(),
            directories = set.directory_count(),
            "generated artifact set"
        );
        Ok(set)
    }
}

/// A registry with one generator per capability-table row.
pub fn builtin_registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    for def in CAPABILITY_TABLE {
        registry.register(def.framework, FrameworkGenerator::for_def(def));
    }
    registry
}

fn generation_failed(framework: Framework, reason: impl Display) -> ApplicationError {
    ApplicationError::GenerationFailed {
        framework: framework.to_string(),
        reason: reason.to_string(),
    }
}

/// Accumulates one project's artifacts and manifest.
pub struct Scaffold<'a> {
    config: &'a ProjectConfig,
    name: String,
    layout: Layout,
    set: ArtifactSet,
    manifest: Manifest,
}

impl<'a> Scaffold<'a> {
    fn new(config: &'a ProjectConfig) -> KilnResult<Self> {
        let name = config.project_name()?;
        let layout = Layout::for_config(config);
        let language = config.language();

        let mut set = ArtifactSet::new();
        for dir in &layout.directories {
            set.add_directory(dir)?;
        }
        set.add_file(layout.utils_module(language), utils_source(language))?;
        if layout.structure == Structure::FeatureBased {
            set.add_file(FEATURES_README_PATH, FEATURES_README)?;
        }

        Ok(Self {
            manifest: Manifest::new(&name),
            config,
            name,
            layout,
            set,
        })
    }

    pub fn config(&self) -> &'a ProjectConfig {
        self.config
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn framework(&self) -> Framework {
        self.config.framework()
    }

    pub fn language(&self) -> Language {
        self.config.language()
    }

    pub fn is_typescript(&self) -> bool {
        self.config.language().is_typescript()
    }

    /// `ts` or `js`.
    pub fn ext(&self) -> &'static str {
        self.config.language().script_extension()
    }

    /// `tsx` or `jsx`.
    pub fn jsx(&self) -> &'static str {
        self.config.language().jsx_extension()
    }

    /// ` lang="ts"` for single-file component script tags, or nothing.
    pub fn lang_attr(&self) -> &'static str {
        if self.is_typescript() { " lang=\"ts\"" } else { "" }
    }

    pub fn file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> KilnResult<()> {
        self.set.add_file(path, content)?;
        Ok(())
    }

    pub fn script(&mut self, name: &str, command: impl Into<String>) {
        self.manifest.script(name, command);
    }

    /// Write the global stylesheet as `{stem}.{css|scss|less}` and return
    /// its file name for the import.
    pub fn stylesheet(&mut self, stem: &str) -> KilnResult<String> {
        let sheet = styling::global_stylesheet(self.config.styling());
        let path = format!("{stem}.{}", sheet.extension);
        self.file(&path, sheet.content)?;
        Ok(path.rsplit('/').next().unwrap_or(&path).to_string())
    }

    /// `vite.config.*`: the framework plugin first, then the styling
    /// plugin, plus the Vitest block when Vitest is selected.
    pub fn vite_config(&mut self, framework_plugin: Option<VitePlugin>) -> KilnResult<()> {
        let mut plugins: Vec<VitePlugin> = framework_plugin.into_iter().collect();
        plugins.extend(styling::vite_plugin(self.config.styling()));
        let vitest = self.config.testing() == Some(Testing::Vitest);
        let path = format!("vite.config.{}", self.ext());
        self.file(path, vite::render(&plugins, vitest))
    }

    /// Write the starter store for the selected state library, if any.
    pub fn store(&mut self) -> KilnResult<Option<StoreModule>> {
        let Some(state) = self.config.state_management() else {
            return Ok(None);
        };
        let module = stores::store_module(self.framework(), self.language(), &self.layout, state);
        self.file(&module.path, module.content.clone())?;
        Ok(Some(module))
    }

    /// Write the data-fetching client for the selected library, if any.
    pub fn client(&mut self) -> KilnResult<Option<ClientModule>> {
        let Some(data) = self.config.data_fetching() else {
            return Ok(None);
        };
        let module = clients::client_module(self.framework(), self.language(), &self.layout, data);
        self.file(&module.path, module.content.clone())?;
        Ok(Some(module))
    }

    /// Write the i18n setup file, if any, and return its path.
    pub fn i18n(&mut self) -> KilnResult<Option<String>> {
        let Some(i18n) = self.config.i18n() else {
            return Ok(None);
        };
        let (path, content) = i18n::setup_module(self.framework(), self.language(), i18n);
        self.file(&path, content)?;
        Ok(Some(path))
    }

    /// Pretty JSON with a trailing newline.
    pub fn json(&mut self, path: impl AsRef<Path>, value: &serde_json::Value) -> KilnResult<()> {
        let mut content = serde_json::to_string_pretty(value)
            .map_err(|e| generation_failed(self.framework(), e))?;
        content.push('\n');
        self.file(path, content)
    }

    /// Add everything the option axes imply and seal the set.
    fn finish(mut self) -> KilnResult<ArtifactSet> {
        let framework = self.framework();
        let language = self.language();

        for fragment in fragments::collect(self.config) {
            self.manifest.merge(&fragment).map_err(|c| {
                generation_failed(
                    framework,
                    format!(
                        "{} is required at both {} and {}",
                        c.package, c.existing, c.requested
                    ),
                )
            })?;
        }

        let tests = testing::setup(framework, language, &self.layout, self.config.testing());
        for (path, content) in tests.files {
            self.file(path, content)?;
        }
        for (name, command) in tests.scripts {
            self.manifest.script(name, command);
        }

        for (path, content) in styling::config_files(framework, language, self.config.styling()) {
            self.file(path, content)?;
        }

        for (path, value) in tsconfig::configs(framework, language) {
            self.json(path, &value)?;
        }
        if let Some(env) = tsconfig::vite_env(framework, language) {
            self.file("src/vite-env.d.ts", env)?;
        }

        let scripts = self.manifest.script_names();
        let scripts: Vec<&str> = scripts.iter().map(String::as_str).collect();
        let readme = common::readme(self.config, &self.name, &scripts);
        self.file("README.md", readme)?;
        self.file(".gitignore", common::gitignore(framework))?;

        let manifest = self
            .manifest
            .render()
            .map_err(|e| generation_failed(framework, e))?;
        self.file("package.json", manifest)?;

        self.set.validate()?;
        Ok(self.set)
    }
}
