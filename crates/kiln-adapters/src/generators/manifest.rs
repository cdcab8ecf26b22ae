//! `package.json` builder.

use std::collections::BTreeMap;

use serde::Serialize;

use super::fragments::Fragment;

/// The dependency manifest for one project.
///
/// Scripts keep insertion order; dependency maps are sorted by name.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    name: String,
    private: bool,
    version: &'static str,
    #[serde(rename = "type")]
    module_type: &'static str,
    scripts: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    dependencies: BTreeMap<&'static str, &'static str>,
    #[serde(rename = "devDependencies", skip_serializing_if = "BTreeMap::is_empty")]
    dev_dependencies: BTreeMap<&'static str, &'static str>,
}

/// Two options asked for the same package at different ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub package: &'static str,
    pub existing: &'static str,
    pub requested: &'static str,
}

impl Manifest {
    pub fn new(project_name: &str) -> Self {
        Self {
            name: package_name(project_name),
            private: true,
            version: "0.0.0",
            module_type: "module",
            scripts: serde_json::Map::new(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        }
    }

    /// Set a script; re-setting keeps its original position.
    pub fn script(&mut self, name: &str, command: impl Into<String>) -> &mut Self {
        self.scripts
            .insert(name.to_string(), serde_json::Value::String(command.into()));
        self
    }

    /// Merge one fragment. The same package at the same range may come
    /// from two options (Emotion and MUI both need `@emotion/react`).
    pub fn merge(&mut self, fragment: &Fragment) -> Result<(), Conflict> {
        for &(package, range) in &fragment.dependencies {
            add(&mut self.dependencies, package, range)?;
        }
        for &(package, range) in &fragment.dev_dependencies {
            add(&mut self.dev_dependencies, package, range)?;
        }
        Ok(())
    }

    /// Script names in insertion order.
    pub fn script_names(&self) -> Vec<String> {
        self.scripts.keys().cloned().collect()
    }

    pub fn has_dependency(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn render(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

fn add(
    map: &mut BTreeMap<&'static str, &'static str>,
    package: &'static str,
    range: &'static str,
) -> Result<(), Conflict> {
    match map.get(package) {
        Some(&existing) if existing != range => Err(Conflict {
            package,
            existing,
            requested: range,
        }),
        Some(_) => Ok(()),
        None => {
            map.insert(package, range);
            Ok(())
        }
    }
}

/// npm-safe package name: lowercase, URL-safe characters only, no
/// leading dot or underscore.
pub fn package_name(project_name: &str) -> String {
    let mut slug = String::with_capacity(project_name.len());
    for c in project_name.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~') {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_start_matches(['.', '_']).trim_matches('-');
    if slug.is_empty() {
        "app".to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_name_is_npm_safe() {
        assert_eq!(package_name("My Shop"), "my-shop");
        assert_eq!(package_name("_private.app"), "private.app");
        assert_eq!(package_name("émoji✨site"), "moji-site");
        assert_eq!(package_name("!!!"), "app");
    }

    #[test]
    fn render_keeps_field_and_script_order() {
        let mut manifest = Manifest::new("demo");
        manifest.script("dev", "vite").script("build", "vite build");
        manifest
            .merge(&Fragment::deps(&[("zod", "^3.0.0"), ("axios", "^1.0.0")]))
            .unwrap();

        let json = manifest.render().unwrap();
        let name = json.find("\"name\"").unwrap();
        let scripts = json.find("\"scripts\"").unwrap();
        let deps = json.find("\"dependencies\"").unwrap();
        assert!(name < scripts && scripts < deps);
        assert!(json.find("\"dev\"").unwrap() < json.find("\"build\"").unwrap());
        assert!(json.find("\"axios\"").unwrap() < json.find("\"zod\"").unwrap());
        assert!(!json.contains("devDependencies"));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn identical_packages_merge_and_mismatched_ranges_conflict() {
        let mut manifest = Manifest::new("demo");
        manifest.merge(&Fragment::deps(&[("@emotion/react", "^11.14.0")])).unwrap();
        manifest.merge(&Fragment::deps(&[("@emotion/react", "^11.14.0")])).unwrap();

        let conflict = manifest
            .merge(&Fragment::deps(&[("@emotion/react", "^10.0.0")]))
            .unwrap_err();
        assert_eq!(conflict.existing, "^11.14.0");
        assert_eq!(conflict.requested, "^10.0.0");
    }
}
