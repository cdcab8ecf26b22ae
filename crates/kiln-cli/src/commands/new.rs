//! Implementation of the `kiln new` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectConfig`, call the
//! core setup service, and display results. No business logic lives here.

use std::io::IsTerminal;
use std::path::Path;

use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{debug, info, instrument};

use kiln_adapters::{LocalFilesystem, ProcessInstaller, builtin_registry};
use kiln_core::application::SkipReason;
use kiln_core::prelude::*;

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    commands::project_config,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::{OutputManager, start_spinner},
};

/// Execute the `kiln new` command.
///
/// Dispatch sequence:
/// 1. Merge flags with config defaults into a `ProjectConfig`
/// 2. Confirm with the user unless `--yes`, `--quiet`, `--dry-run` or piped
/// 3. Run the setup pipeline (the core refuses unsafe or occupied targets)
/// 4. Report written paths, install status and next steps
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manager = package_manager(&args, &config);
    let project = project_config(&args.path, &args.options, &config)
        .package_manager(manager)
        .dry_run(args.dry_run)
        .build();

    debug!(
        framework = %project.framework(),
        language = %project.language(),
        package_manager = manager.map(|m| m.to_string()).as_deref().unwrap_or("none"),
        "project config resolved"
    );

    let interactive = !global.quiet && !args.yes && !args.dry_run && std::io::stdin().is_terminal();
    if interactive {
        show_configuration(&project, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let cwd = std::env::current_dir().with_cli_context(|| "failed to read the working directory")?;
    let registry = builtin_registry();

    let mut service = SetupService::new(
        &registry,
        Box::new(LocalFilesystem::new()),
        PathPolicy::from_env(),
    );
    if manager.is_some() {
        let bar = output.spinner();
        service = service.with_installer(Box::new(SpinnerInstaller {
            inner: installer_for(bar.clone()),
            bar,
        }));
    }

    info!("setup started");
    let outcome = service.setup_project(&project, &cwd)?;

    if output.format() == OutputFormat::Json {
        output.json(&OutcomeReport::from(&outcome))?;
        return Ok(());
    }
    report(&outcome, &output)
}

/// `--no-install` and dry runs never install; otherwise `--pm` wins over
/// the configured default.
fn package_manager(args: &NewArgs, config: &AppConfig) -> Option<PackageManager> {
    if args.no_install || args.dry_run {
        return None;
    }
    args.package_manager.or(config.defaults.package_manager)
}

/// Streams each installer line into the spinner message.
fn installer_for(bar: ProgressBar) -> ProcessInstaller {
    ProcessInstaller::new().on_line(move |line| {
        let text = line.text.trim();
        if !text.is_empty() {
            bar.set_message(text.to_string());
        }
    })
}

/// Shows the spinner only while the wrapped installer runs.
struct SpinnerInstaller<I> {
    inner: I,
    bar: ProgressBar,
}

impl<I: DependencyInstaller> DependencyInstaller for SpinnerInstaller<I> {
    fn install(&self, root: &Path, manager: PackageManager) -> Result<(), InstallError> {
        start_spinner(&self.bar, &format!("Installing dependencies with {manager}..."));
        let result = self.inner.install(root, manager);
        self.bar.finish_and_clear();
        result
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct OutcomeReport {
    root: String,
    project_name: String,
    framework: Framework,
    dry_run: bool,
    directories: Vec<String>,
    files: Vec<String>,
    install: String,
}

impl From<&SetupOutcome> for OutcomeReport {
    fn from(outcome: &SetupOutcome) -> Self {
        let relative = |path: &Path| {
            path.strip_prefix(&outcome.root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/")
        };
        Self {
            root: outcome.root.display().to_string(),
            project_name: outcome.project_name.clone(),
            framework: outcome.framework,
            dry_run: outcome.dry_run,
            directories: outcome.directories.iter().skip(1).map(|d| relative(d)).collect(),
            files: outcome.files.iter().map(|f| relative(f)).collect(),
            install: install_summary(&outcome.install),
        }
    }
}

fn install_summary(status: &InstallStatus) -> String {
    match status {
        InstallStatus::Skipped(SkipReason::DryRun) => "skipped (dry run)".into(),
        InstallStatus::Skipped(SkipReason::NotConfigured) => "skipped (no package manager)".into(),
        InstallStatus::Skipped(SkipReason::NoInstaller) => "skipped".into(),
        InstallStatus::Completed { manager } => format!("completed ({manager})"),
        InstallStatus::Failed { manager, error } => format!("failed ({manager}): {error}"),
    }
}

fn report(outcome: &SetupOutcome, output: &OutputManager) -> CliResult<()> {
    let name = &outcome.project_name;

    if outcome.dry_run {
        output.header(&format!(
            "Dry run: would create '{name}' at {}",
            outcome.root.display()
        ))?;
        for path in outcome.written_paths().skip(1) {
            let shown = path.strip_prefix(&outcome.root).unwrap_or(path);
            output.detail(&format!("  {}", shown.display()))?;
        }
        output.info(&format!(
            "{} files in {} directories; nothing was written",
            outcome.files.len(),
            outcome.directories.len()
        ))?;
        return Ok(());
    }

    output.success(&format!(
        "Created '{name}' ({}) at {}",
        outcome.framework.display_name(),
        outcome.root.display()
    ))?;
    output.detail(&format!("  {} files written", outcome.files.len()))?;

    let (manager, needs_install) = match &outcome.install {
        InstallStatus::Completed { manager } => {
            output.success(&format!("Dependencies installed with {manager}"))?;
            (*manager, false)
        }
        InstallStatus::Failed { manager, error } => {
            output.warning(&format!("Dependency install failed: {error}"))?;
            output.warning("The project files were kept; install manually when ready.")?;
            (*manager, true)
        }
        InstallStatus::Skipped(_) => (PackageManager::Npm, true),
    };

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", outcome.root.display()))?;
        if needs_install {
            output.print(&format!("  {manager} install"))?;
        }
        output.print(&format!("  {}", manager.run_command("dev")))?;
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(project: &ProjectConfig, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Path:       {}", project.project_path().display()))?;
    out.print(&format!("  Framework:  {}", project.framework().display_name()))?;
    out.print(&format!("  Language:   {}", project.language()))?;
    out.print(&format!("  Structure:  {}", project.structure()))?;

    let choices = [
        ("Styling", project.styling().map(|v| v.to_string())),
        ("Routing", project.routing().map(|v| v.to_string())),
        ("State", project.state_management().map(|v| v.to_string())),
        ("Data", project.data_fetching().map(|v| v.to_string())),
        ("Testing", project.testing().map(|v| v.to_string())),
        ("UI", project.ui_library().map(|v| v.to_string())),
        ("Forms", project.form_management().map(|v| v.to_string())),
        ("Animation", project.animation().map(|v| v.to_string())),
        ("Icons", project.icons().map(|v| v.to_string())),
        ("Charts", project.data_viz().map(|v| v.to_string())),
        ("Utilities", project.utilities().map(|v| v.to_string())),
        ("i18n", project.i18n().map(|v| v.to_string())),
        ("Install", project.package_manager().map(|v| v.to_string())),
    ];
    for (label, value) in choices {
        if let Some(value) = value {
            out.print(&format!("  {:<11} {value}", format!("{label}:")))?;
        }
    }
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
