//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
pub mod validate;

use std::path::Path;

use kiln_core::domain::ProjectConfigBuilder;
use kiln_core::prelude::ProjectConfig;

use crate::cli::ProjectOptions;
use crate::config::AppConfig;

/// Flags first, then `[defaults]` from the loaded config.
pub(crate) fn project_config(
    path: &Path,
    options: &ProjectOptions,
    config: &AppConfig,
) -> ProjectConfigBuilder {
    let defaults = &config.defaults;
    ProjectConfig::builder(path, options.framework.unwrap_or(defaults.framework))
        .language(options.language.unwrap_or(defaults.language))
        .name(options.name.clone())
        .styling(options.styling.or(defaults.styling))
        .routing(options.routing)
        .state_management(options.state_management)
        .data_fetching(options.data_fetching)
        .testing(options.testing.or(defaults.testing))
        .ui_library(options.ui_library)
        .form_management(options.form_management)
        .animation(options.animation)
        .icons(options.icons)
        .data_viz(options.data_viz)
        .utilities(options.utilities)
        .i18n(options.i18n)
        .structure(options.structure.unwrap_or(defaults.structure))
}
