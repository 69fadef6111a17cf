use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("capture error: {0}")]
    Capture(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures that can terminate a bridge dispatch. These are protocol-level
/// errors: the dispatcher converts them into `success=false` response
/// envelopes. Domain-level validation failures (bad opacity, unknown cursor
/// name) are not errors at this layer; builtins report those inside a
/// successful payload as `{status:"error", message}`.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Function '{0}' not found")]
    NotFound(String),

    #[error("invalid arguments for '{func}': {detail}")]
    InvalidArgs { func: String, detail: String },

    #[error("{0}")]
    Handler(String),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

#[derive(Debug, thiserror::Error)]
pub enum CasementError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width must be >= 1".into());
        assert_eq!(
            err.to_string(),
            "config validation error: window.width must be >= 1"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::Clipboard("access denied".into());
        assert_eq!(err.to_string(), "clipboard error: access denied");

        let err = PlatformError::NotSupported("no capture backend".into());
        assert_eq!(err.to_string(), "not supported: no capture backend");
    }

    #[test]
    fn bridge_not_found_names_the_function() {
        let err = BridgeError::NotFound("spin_window".into());
        assert_eq!(err.to_string(), "Function 'spin_window' not found");
    }

    #[test]
    fn bridge_invalid_args_display() {
        let err = BridgeError::InvalidArgs {
            func: "set_size".into(),
            detail: "expected integer at position 0".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid arguments for 'set_size': expected integer at position 0"
        );
    }

    #[test]
    fn bridge_handler_display_is_bare_detail() {
        let err = BridgeError::Handler("database offline".into());
        assert_eq!(err.to_string(), "database offline");
    }

    #[test]
    fn bridge_error_from_platform() {
        let err: BridgeError = PlatformError::Capture("grab failed".into()).into();
        assert!(matches!(err, BridgeError::Platform(_)));
        assert!(err.to_string().contains("grab failed"));
    }

    #[test]
    fn casement_error_from_config() {
        let err: CasementError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, CasementError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn casement_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CasementError = io_err.into();
        assert!(matches!(err, CasementError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
