//! `kiln config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key, &config))?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            for key in config.keys() {
                let value = config.get(&key).unwrap_or_default();
                output.print(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

fn unknown_key(key: &str, config: &AppConfig) -> CliError {
    CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known keys: {})",
            config.keys().join(", ")
        ),
        source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_lists_known_keys() {
        let err = unknown_key("defaults.lang", &AppConfig::default());
        let message = err.to_string();
        assert!(message.contains("defaults.language"));
        assert_eq!(err.exit_code(), 4);
    }
}
