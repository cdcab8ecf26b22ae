//! Directory layout: `{Structure, config} → ordered directories` plus the
//! fixed utility module.

use kiln_core::domain::{Language, ProjectConfig, Structure};

/// Where shared code lands for one structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directories to create, parents first.
    pub directories: Vec<&'static str>,
    pub components: &'static str,
    pub utils: &'static str,
    pub store: &'static str,
    pub api: &'static str,
    pub structure: Structure,
}

impl Layout {
    pub fn for_config(config: &ProjectConfig) -> Self {
        let (mut directories, components, utils, store, api) = match config.structure() {
            Structure::FeatureBased => (
                vec![
                    "src",
                    "src/features",
                    "src/shared",
                    "src/shared/components",
                    "src/shared/utils",
                ],
                "src/shared/components",
                "src/shared/utils",
                "src/shared/store",
                "src/shared/api",
            ),
            Structure::LayerBased => (
                vec!["src", "src/components", "src/services", "src/utils"],
                "src/components",
                "src/utils",
                "src/store",
                "src/api",
            ),
        };

        if config.state_management().is_some() {
            directories.push(store);
        }
        if config.data_fetching().is_some() {
            directories.push(api);
        }

        Self {
            directories,
            components,
            utils,
            store,
            api,
            structure: config.structure(),
        }
    }

    /// Path of the utility module every project gets.
    pub fn utils_module(&self, language: Language) -> String {
        format!("{}/index.{}", self.utils, language.script_extension())
    }

    /// Import specifier for `dir` as seen from a file inside `from_dir`.
    ///
    /// Both must live under `src`.
    pub fn import_path(dir: &str, from_dir: &str) -> String {
        let target = if dir == "src" {
            ""
        } else {
            dir.strip_prefix("src/").unwrap_or(dir)
        };
        let depth = from_dir
            .strip_prefix("src")
            .map(|rest| rest.split('/').filter(|s| !s.is_empty()).count())
            .unwrap_or(0);

        let up = if depth == 0 {
            ".".to_string()
        } else {
            vec![".."; depth].join("/")
        };
        if target.is_empty() {
            up
        } else {
            format!("{up}/{target}")
        }
    }

    /// Import specifier for module `stem` inside `dir`, seen from `from_dir`.
    pub fn import_module(dir: &str, stem: &str, from_dir: &str) -> String {
        format!("{}/{stem}", Self::import_path(dir, from_dir))
    }
}

pub fn utils_source(language: Language) -> &'static str {
    match language {
        Language::TypeScript => {
            "export function capitalize(value: string): string {\n  return value.charAt(0).toUpperCase() + value.slice(1);\n}\n"
        }
        Language::JavaScript => {
            "export function capitalize(value) {\n  return value.charAt(0).toUpperCase() + value.slice(1);\n}\n"
        }
    }
}

pub const FEATURES_README_PATH: &str = "src/features/README.md";

pub const FEATURES_README: &str = "\
# Features

Each directory here owns one feature end to end: its components, hooks,
state and API calls live together.

```
features/
  auth/
    components/
    api.ts
    index.ts
```

Code used by more than one feature belongs in `src/shared`.
A feature may import from `shared`, never from another feature.
";

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{DataFetching, Framework, StateManagement};

    #[test]
    fn feature_based_layout_is_parent_first() {
        let config = ProjectConfig::builder("app", Framework::React).build();
        let layout = Layout::for_config(&config);

        assert_eq!(
            layout.directories,
            [
                "src",
                "src/features",
                "src/shared",
                "src/shared/components",
                "src/shared/utils"
            ]
        );
        assert_eq!(layout.utils_module(Language::TypeScript), "src/shared/utils/index.ts");
    }

    #[test]
    fn layer_based_layout_adds_store_and_api_on_demand() {
        let config = ProjectConfig::builder("app", Framework::Vue)
            .structure(Structure::LayerBased)
            .state_management(StateManagement::Pinia)
            .data_fetching(DataFetching::Axios)
            .build();
        let layout = Layout::for_config(&config);

        assert_eq!(
            layout.directories,
            ["src", "src/components", "src/services", "src/utils", "src/store", "src/api"]
        );
        assert_eq!(layout.utils_module(Language::JavaScript), "src/utils/index.js");
    }

    #[test]
    fn import_paths_are_relative_to_the_importer() {
        assert_eq!(Layout::import_path("src/shared/store", "src"), "./shared/store");
        assert_eq!(Layout::import_path("src/api", "src/app"), "../api");
        assert_eq!(Layout::import_path("src/shared/api", "src/routes/blog"), "../../shared/api");
        assert_eq!(Layout::import_module("src", "i18n", "src"), "./i18n");
        assert_eq!(Layout::import_module("src", "i18n", "src/app"), "../i18n");
    }
}
