//! Implementation of the `kiln validate` command.

use std::path::PathBuf;

use tracing::{info, instrument};

use kiln_adapters::{LocalFilesystem, builtin_registry};
use kiln_core::domain::normalize_path;
use kiln_core::prelude::*;

use crate::{
    cli::{OutputFormat, ValidateArgs},
    commands::project_config,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Re-derive the expected tree from the options and check it on disk.
///
/// Every check runs; the exit code reflects whether any failed.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "failed to read the working directory")?;
    let root: PathBuf = normalize_path(&args.path, &cwd).map_err(KilnError::from)?;
    if !root.is_dir() {
        return Err(CliError::ProjectNotFound { path: args.path });
    }

    let project = project_config(&root, &args.options, &config).build();
    let registry = builtin_registry();
    let service = ValidationService::new(&registry, Box::new(LocalFilesystem::new()));
    let results = service.validate_project(&root, &project);

    let failed = results.iter().filter(|r| !r.passed).count();
    info!(checks = results.len(), failed, "validation finished");

    if output.format() == OutputFormat::Json {
        let report: Vec<_> = results
            .iter()
            .map(|r| {
                serde_json::json!({
                    "check": r.check,
                    "passed": r.passed,
                    "detail": r.detail,
                })
            })
            .collect();
        output.json(&report)?;
    } else {
        output.header(&format!("Validating {}", root.display()))?;
        for result in &results {
            let line = format!("{}: {}", result.check, result.detail);
            if result.passed {
                output.success(&line)?;
            } else {
                output.error(&line)?;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::ValidationFailed {
            failed,
            total: results.len(),
        });
    }
    output.success(&format!("All {} checks passed", results.len()))?;
    Ok(())
}
