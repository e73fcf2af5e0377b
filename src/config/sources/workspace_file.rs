//! Workspace config file source: liftplan.toml and liftplan.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Add workspace config files to builder.
/// Precedence: liftplan.toml (base) then liftplan.{LIFTPLAN_ENV}.toml when the variable is set.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base_config_path = workspace_root.join("liftplan.toml");
    if base_config_path.exists() {
        debug!(config_path = %base_config_path.display(), "Loading workspace configuration");
        builder = builder.add_source(File::from(base_config_path.as_path()).required(false));
    }

    if let Ok(env_name) = std::env::var("LIFTPLAN_ENV") {
        let env_config_path = workspace_root.join(format!("liftplan.{}.toml", env_name));
        if env_config_path.exists() {
            debug!(config_path = %env_config_path.display(), env = %env_name, "Loading environment overlay");
            builder = builder.add_source(File::from(env_config_path.as_path()).required(false));
        }
    }

    Ok(builder)
}
