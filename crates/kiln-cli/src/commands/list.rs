//! Implementation of the `kiln list` command: the capability matrix.

use serde::Serialize;

use kiln_core::domain::{CAPABILITY_TABLE, FrameworkDef};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

/// One framework row, shaped for JSON.
#[derive(Debug, Serialize)]
struct FrameworkEntry {
    framework: &'static str,
    name: &'static str,
    family: &'static str,
    package: &'static str,
    build_config: &'static str,
    /// Axis name to supported values; `null` when the axis is not exposed.
    options: serde_json::Map<String, serde_json::Value>,
}

impl From<&FrameworkDef> for FrameworkEntry {
    fn from(def: &FrameworkDef) -> Self {
        let options = def
            .capability
            .describe()
            .into_iter()
            .map(|support| {
                let values = match support.values {
                    Some(values) => serde_json::Value::from(values),
                    None => serde_json::Value::Null,
                };
                (support.axis.as_str().replace(' ', "_"), values)
            })
            .collect();

        Self {
            framework: def.framework.as_str(),
            name: def.framework.display_name(),
            family: def.family.as_str(),
            package: def.package,
            build_config: def.build_config.typescript,
            options,
        }
    }
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let defs: Vec<&FrameworkDef> = CAPABILITY_TABLE
        .iter()
        .filter(|def| args.framework.is_none_or(|f| f == def.framework))
        .collect();

    match args.format {
        ListFormat::Json => {
            let entries: Vec<FrameworkEntry> = defs.into_iter().map(FrameworkEntry::from).collect();
            output.json(&entries)?;
        }
        ListFormat::Table => {
            for def in defs {
                output.header(&format!(
                    "{} ({}, {})",
                    def.framework.display_name(),
                    def.framework,
                    def.family.as_str()
                ))?;
                for support in def.capability.describe() {
                    let values = match &support.values {
                        Some(values) if values.is_empty() => "none".to_string(),
                        Some(values) => values.join(", "),
                        None => "-".to_string(),
                    };
                    output.print(&format!("  {:<20} {values}", support.axis.as_str()))?;
                }
                output.print("")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{Framework, find_framework};

    #[test]
    fn entry_marks_unexposed_axes_as_null() {
        let def = find_framework(Framework::Vanilla).unwrap();
        let entry = FrameworkEntry::from(def);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["framework"], "vanilla");
        assert!(json["options"]["language"].is_array());
        assert!(json["options"]["routing"].is_null());
    }

    #[test]
    fn entry_lists_react_routers() {
        let entry = FrameworkEntry::from(find_framework(Framework::React).unwrap());
        let routers = entry.options["routing"].as_array().unwrap();
        assert!(routers.iter().any(|r| r == "react-router"));
        assert_eq!(entry.package, "react");
    }
}
