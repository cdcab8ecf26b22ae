//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `KILN_*` environment variables, `__` between sections
//!    (`KILN_DEFAULTS__FRAMEWORK=vue`)
//! 3. `.kiln.toml` in the current directory
//! 4. The config file (`--config`, or the platform config directory)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use kiln_core::domain::{Framework, Language, PackageManager, Structure, Styling, Testing};

/// File name of the per-directory config.
pub const LOCAL_CONFIG_FILE: &str = ".kiln.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Used when a flag is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub framework: Framework,
    pub language: Language,
    pub styling: Option<Styling>,
    pub testing: Option<Testing>,
    pub structure: Structure,
    /// `None` skips the install step unless `--pm` is given.
    pub package_manager: Option<PackageManager>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                framework: Framework::React,
                language: Language::TypeScript,
                styling: None,
                testing: None,
                structure: Structure::FeatureBased,
                package_manager: None,
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// A file passed with `--config` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("failed to seed built-in defaults")?;

        let mut builder = config::Config::builder().add_source(defaults);
        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.as_path()).required(true)),
            None => builder
                .add_source(config::File::from(Self::config_path()).required(false))
                .add_source(config::File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };
        builder = builder.add_source(
            config::Environment::with_prefix("KILN")
                .prefix_separator("_")
                .separator("__"),
        );

        let loaded = builder.build().context("failed to read configuration")?;
        loaded
            .try_deserialize()
            .context("configuration has an invalid value")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kiln.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key such as `defaults.framework`.
    ///
    /// Unset optional values come back as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&tree, |node, part| node.get(part))?;

        Some(match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Every leaf key, dotted, in declaration order.
    pub fn keys(&self) -> Vec<String> {
        fn walk(prefix: &str, node: &serde_json::Value, out: &mut Vec<String>) {
            match node {
                serde_json::Value::Object(map) => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(&path, child, out);
                    }
                }
                _ => out.push(prefix.to_string()),
            }
        }

        let mut keys = Vec::new();
        if let Ok(tree) = serde_json::to_value(self) {
            walk("", &tree, &mut keys);
        }
        keys
    }
}
