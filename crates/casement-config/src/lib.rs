//! Casement configuration system.
//!
//! TOML-based configuration for the shell window and the embedded page.
//! All sections use serde defaults, so a partial (or absent) config file
//! works out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CasementConfig, PageConfig, WindowConfig, CONFIG_SCHEMA_VERSION};

use casement_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `casement.toml` from the OS config directory, creating a default
/// file if none exists, and validates the result.
pub fn load_config() -> Result<CasementConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
