//! Subcommands of the `clubsite` binary.

use std::path::Path;

use clubsite_core::{Config, config::DataConfig};
use color_eyre::eyre::{Result, WrapErr};

pub mod check;
pub mod search;
pub mod serve;

/// Fixture locations from the config file, or the defaults when there is none.
fn data_config(config_path: &Path) -> Result<DataConfig> {
    if !config_path.exists() {
        tracing::info!(?config_path, "no configuration file, using default data directory");
        return Ok(DataConfig::default());
    }

    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    Ok(config.data)
}
