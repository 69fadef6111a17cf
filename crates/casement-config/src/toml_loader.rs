//! TOML config file loading and creation.

use crate::schema::CasementConfig;
use crate::validation;
use casement_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// If validation fails, a warning is logged and the default config is
/// returned so the shell can still start.
pub fn load_from_path(path: &Path) -> Result<CasementConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: CasementConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(CasementConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/casement/casement.toml`
/// On Linux: `~/.config/casement/casement.toml`
///
/// If the file does not exist, creates a default config file and returns
/// defaults.
pub fn load_default() -> Result<CasementConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(CasementConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("casement").join("casement.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    Ok(())
}

fn default_config_toml() -> &'static str {
    r#"# Casement configuration.
# Every field is optional; missing fields use the built-in defaults.

[window]
title = "Casement"
width = 800
height = 600
min_width = 400
min_height = 300
resizable = true

[page]
# url = "https://example.com"   # omit to load the bundled demo page
zoom = 1.0
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn loads_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casement.toml");
        std::fs::write(&path, "[window]\ntitle = \"Test Shell\"\n").unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.title, "Test Shell");
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casement.toml");
        std::fs::write(&path, "[window\ntitle =").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casement.toml");
        std::fs::write(&path, "[window]\nwidth = 0\n").unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn default_template_parses_and_validates() {
        let config: CasementConfig = toml::from_str(default_config_toml()).unwrap();
        assert!(validation::validate(&config).is_ok());
    }

    #[test]
    fn create_default_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("casement.toml");
        create_default_config(&path).unwrap();
        assert!(path.exists());
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.title, "Casement");
    }
}
