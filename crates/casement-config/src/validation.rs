//! Configuration validation.

use crate::schema::CasementConfig;
use casement_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CasementConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }

    validate_range(&mut errors, "window.width", config.window.width, 1, 16384);
    validate_range(&mut errors, "window.height", config.window.height, 1, 16384);
    validate_range(&mut errors, "window.min_width", config.window.min_width, 1, 16384);
    validate_range(
        &mut errors,
        "window.min_height",
        config.window.min_height,
        1,
        16384,
    );

    if config.window.min_width > config.window.width {
        errors.push("window.min_width must not exceed window.width".into());
    }
    if config.window.min_height > config.window.height {
        errors.push("window.min_height must not exceed window.height".into());
    }

    if !(0.25..=5.0).contains(&config.page.zoom) {
        errors.push(format!(
            "page.zoom must be in 0.25-5.0 (got {})",
            config.page.zoom
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, field: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{field} must be in {min}-{max} (got {value})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CasementConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&CasementConfig::default()).is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        let mut config = CasementConfig::default();
        config.window.width = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("window.width"));
    }

    #[test]
    fn min_size_larger_than_size_rejected() {
        let mut config = CasementConfig::default();
        config.window.min_width = 2000;
        config.window.width = 800;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("min_width"));
    }

    #[test]
    fn zoom_out_of_range_rejected() {
        let mut config = CasementConfig::default();
        config.page.zoom = 10.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("page.zoom"));
    }

    #[test]
    fn empty_title_rejected() {
        let mut config = CasementConfig::default();
        config.window.title = "   ".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn multiple_errors_are_joined() {
        let mut config = CasementConfig::default();
        config.window.width = 0;
        config.page.zoom = 0.0;
        let msg = validate(&config).unwrap_err().to_string();
        assert!(msg.contains("window.width"));
        assert!(msg.contains("page.zoom"));
    }
}
