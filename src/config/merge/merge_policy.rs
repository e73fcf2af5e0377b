//! Merge rules: defaults, override order, conflict handling.

use crate::config::{default_day_name_id_length, default_description, default_id_length};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("compiler.unit", "lb")?
        .set_default("compiler.id_length", default_id_length() as i64)?
        .set_default("compiler.day_name_id_length", default_day_name_id_length() as i64)?
        .set_default("compiler.description", default_description())
}
