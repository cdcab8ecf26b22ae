//! Generator registry: framework → generator dispatch.
//!
//! The registry is a plain value built once at process entry (see
//! `kiln_adapters::builtin_registry`) and borrowed by the services. There
//! is no global state, so tests can build their own registries in parallel.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::domain::{
    ArtifactSet, DomainError, Framework, GeneratorCapability, ProjectConfig,
};
use crate::error::KilnResult;

/// One framework's artifact generator.
///
/// `generate` is a pure function of the config: the same config always
/// yields an identical [`ArtifactSet`]. Implementations re-check their
/// capability first and never substitute defaults for unsupported values.
pub trait Generator: Send + Sync {
    /// The option values this generator can handle.
    fn supported_options(&self) -> &'static GeneratorCapability;

    /// Produce every directory and file for `config`, in memory.
    fn generate(&self, config: &ProjectConfig) -> KilnResult<ArtifactSet>;
}

#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<Framework, Box<dyn Generator>>,
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("frameworks", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `generator` for `framework`, replacing any previous one.
    pub fn register(
        &mut self,
        framework: Framework,
        generator: impl Generator + 'static,
    ) -> &mut Self {
        if self
            .generators
            .insert(framework, Box::new(generator))
            .is_some()
        {
            warn!(%framework, "replaced an existing generator");
        } else {
            debug!(%framework, "registered generator");
        }
        self
    }

    pub fn get(&self, framework: Framework) -> Option<&dyn Generator> {
        self.generators.get(&framework).map(Box::as_ref)
    }

    /// Look up by user-facing name (`"next"`, `"SvelteKit"`, ...).
    pub fn get_by_name(&self, name: &str) -> Option<(Framework, &dyn Generator)> {
        let framework = name.parse::<Framework>().ok()?;
        self.get(framework).map(|g| (framework, g))
    }

    /// Registered frameworks in `Framework` order (the derived `Ord`).
    pub fn frameworks(&self) -> impl Iterator<Item = Framework> + '_ {
        self.generators.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Find the generator for `config` and check every selected option
    /// against its capability.
    pub fn resolve(&self, config: &ProjectConfig) -> KilnResult<&dyn Generator> {
        let framework = config.framework();
        let generator = self
            .get(framework)
            .ok_or_else(|| DomainError::UnregisteredFramework {
                framework: framework.to_string(),
            })?;

        generator.supported_options().check(framework, config)?;
        Ok(generator)
    }
}
