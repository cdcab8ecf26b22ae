//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  Option values are parsed with the core types' own
//! `FromStr`, so every alias the core accepts works on the command line.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use kiln_core::domain::{
    Animation, DataFetching, DataViz, FormManagement, Framework, I18n, Icons, Language,
    PackageManager, Routing, StateManagement, Structure, Styling, Testing, UiLibrary, Utilities,
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f525} Deterministic frontend project scaffolding",
    long_about = "Kiln generates complete, internally consistent frontend projects \
                  from a framework and a set of library choices.",
    after_help = "EXAMPLES:\n\
        \x20 kiln new shop --framework react --styling tailwind --routing react-router\n\
        \x20 kiln new docs --framework astro --lang js --dry-run\n\
        \x20 kiln list --framework vue\n\
        \x20 kiln completions bash > /usr/share/bash-completion/completions/kiln",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 kiln new my-app --framework react --styling tailwind --state zustand\n\
            \x20 kiln new ../site --framework vanilla --lang js --no-install\n\
            \x20 kiln new admin  --framework angular --routing angular-router --pm pnpm"
    )]
    New(NewArgs),

    /// Check a generated project against its options.
    #[command(
        about = "Validate an existing project",
        after_help = "EXAMPLES:\n\
            \x20 kiln validate my-app --framework react --styling tailwind\n\
            \x20 kiln validate . --framework vue --name my-app"
    )]
    Validate(ValidateArgs),

    /// List frameworks and the options each one supports.
    #[command(
        visible_alias = "ls",
        about = "List frameworks and their supported options",
        after_help = "EXAMPLES:\n\
            \x20 kiln list\n\
            \x20 kiln list --framework svelte\n\
            \x20 kiln list --format json"
    )]
    List(ListArgs),

    /// Initialise a Kiln configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 kiln init           # platform config directory\n\
            \x20 kiln init --local   # .kiln.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
            \x20 kiln completions zsh  > ~/.zfunc/_kiln\n\
            \x20 kiln completions fish > ~/.config/fish/completions/kiln.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Kiln configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kiln config get defaults.framework\n\
            \x20 kiln config list\n\
            \x20 kiln config path"
    )]
    Config(ConfigCommands),
}

/// Parse any core option enum through its `FromStr`.
fn option_value<T>(s: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    s.parse().map_err(|e: T::Err| e.to_string())
}

// ── project options (shared by new / validate) ───────────────────────────────

/// Framework, language and library choices.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectOptions {
    /// UI framework; falls back to `defaults.framework` from the config.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        value_parser = option_value::<Framework>,
        help = "react, vue, svelte, solid, angular, vanilla, nextjs, astro, sveltekit"
    )]
    pub framework: Option<Framework>,

    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_parser = option_value::<Language>,
        help = "typescript (ts) or javascript (js)"
    )]
    pub language: Option<Language>,

    /// Project name, when it differs from the last path component.
    #[arg(long = "name", value_name = "NAME", help = "Project name (default: directory name)")]
    pub name: Option<String>,

    #[arg(
        short = 's',
        long = "styling",
        value_name = "STYLING",
        value_parser = option_value::<Styling>,
        help = "tailwind, scss, less, css-modules, styled-components, emotion, unocss"
    )]
    pub styling: Option<Styling>,

    #[arg(
        short = 'r',
        long = "routing",
        value_name = "ROUTER",
        value_parser = option_value::<Routing>,
        help = "Client-side router"
    )]
    pub routing: Option<Routing>,

    #[arg(
        long = "state",
        value_name = "LIBRARY",
        value_parser = option_value::<StateManagement>,
        help = "State management library"
    )]
    pub state_management: Option<StateManagement>,

    #[arg(
        long = "data-fetching",
        visible_alias = "data",
        value_name = "LIBRARY",
        value_parser = option_value::<DataFetching>,
        help = "tanstack-query, swr, axios, apollo"
    )]
    pub data_fetching: Option<DataFetching>,

    #[arg(
        short = 't',
        long = "testing",
        value_name = "FRAMEWORK",
        value_parser = option_value::<Testing>,
        help = "vitest, jest, playwright, cypress"
    )]
    pub testing: Option<Testing>,

    #[arg(
        long = "ui",
        value_name = "LIBRARY",
        value_parser = option_value::<UiLibrary>,
        help = "Component library"
    )]
    pub ui_library: Option<UiLibrary>,

    #[arg(
        long = "forms",
        value_name = "LIBRARY",
        value_parser = option_value::<FormManagement>,
        help = "Form handling library"
    )]
    pub form_management: Option<FormManagement>,

    #[arg(
        long = "animation",
        value_name = "LIBRARY",
        value_parser = option_value::<Animation>,
        help = "Animation library"
    )]
    pub animation: Option<Animation>,

    #[arg(
        long = "icons",
        value_name = "SET",
        value_parser = option_value::<Icons>,
        help = "Icon set"
    )]
    pub icons: Option<Icons>,

    #[arg(
        long = "data-viz",
        visible_alias = "charts",
        value_name = "LIBRARY",
        value_parser = option_value::<DataViz>,
        help = "Charting library"
    )]
    pub data_viz: Option<DataViz>,

    #[arg(
        long = "utilities",
        visible_alias = "utils",
        value_name = "LIBRARY",
        value_parser = option_value::<Utilities>,
        help = "Date / utility library"
    )]
    pub utilities: Option<Utilities>,

    #[arg(
        long = "i18n",
        value_name = "LIBRARY",
        value_parser = option_value::<I18n>,
        help = "Internationalisation library"
    )]
    pub i18n: Option<I18n>,

    #[arg(
        long = "structure",
        value_name = "LAYOUT",
        value_parser = option_value::<Structure>,
        help = "feature-based or layer-based"
    )]
    pub structure: Option<Structure>,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `kiln new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project directory.  A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "PATH", help = "Project directory")]
    pub path: PathBuf,

    #[command(flatten)]
    pub options: ProjectOptions,

    /// Package manager for the install step.
    #[arg(
        long = "pm",
        value_name = "MANAGER",
        value_parser = option_value::<PackageManager>,
        conflicts_with = "no_install",
        help = "npm, yarn, pnpm or bun (default: defaults.package_manager)"
    )]
    pub package_manager: Option<PackageManager>,

    /// Skip dependency installation even if a package manager is configured.
    #[arg(long = "no-install", help = "Do not install dependencies")]
    pub no_install: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `kiln validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Root of the project to check.
    #[arg(value_name = "PATH", help = "Project directory")]
    pub path: PathBuf,

    #[command(flatten)]
    pub options: ProjectOptions,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only one framework.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        value_parser = option_value::<Framework>,
        help = "Show a single framework"
    )]
    pub framework: Option<Framework>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.kiln.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kiln completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kiln config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.framework`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    fn new_args(args: &[&str]) -> NewArgs {
        let cli = Cli::try_parse_from(std::iter::once("kiln").chain(args.iter().copied())).unwrap();
        match cli.command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command_with_axes() {
        let args = new_args(&[
            "new",
            "shop",
            "--framework",
            "react",
            "--lang",
            "ts",
            "--styling",
            "tailwind",
            "--routing",
            "react-router",
            "--state",
            "zustand",
            "--data",
            "tanstack-query",
        ]);

        assert_eq!(args.path, PathBuf::from("shop"));
        assert_eq!(args.options.framework, Some(Framework::React));
        assert_eq!(args.options.language, Some(Language::TypeScript));
        assert_eq!(args.options.styling, Some(Styling::Tailwind));
        assert_eq!(args.options.routing, Some(Routing::ReactRouter));
        assert_eq!(args.options.state_management, Some(StateManagement::Zustand));
        assert_eq!(args.options.data_fetching, Some(DataFetching::TanStackQuery));
        assert!(!args.dry_run);
    }

    #[test]
    fn option_aliases_are_accepted() {
        let args = new_args(&["new", "x", "-f", "next", "--ui", "antd", "--state", "rtk"]);
        assert_eq!(args.options.framework, Some(Framework::NextJs));
        assert_eq!(args.options.ui_library, Some(UiLibrary::AntDesign));
        assert_eq!(args.options.state_management, Some(StateManagement::ReduxToolkit));
    }

    #[test]
    fn unknown_value_is_a_parse_error() {
        let result = Cli::try_parse_from(["kiln", "new", "x", "--styling", "bootstrap"]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("bootstrap"));
        assert!(err.contains("tailwind"));
    }

    #[test]
    fn pm_and_no_install_conflict() {
        let result = Cli::try_parse_from(["kiln", "new", "x", "--pm", "pnpm", "--no-install"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["kiln", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_defaults_to_table() {
        let cli = Cli::try_parse_from(["kiln", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.format, ListFormat::Table);
                assert!(args.framework.is_none());
            }
            other => panic!("expected List command, got {other:?}"),
        }
    }
}
