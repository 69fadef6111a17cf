pub mod errors;

pub use errors::{BridgeError, CasementError, ConfigError, PlatformError};

pub type Result<T> = std::result::Result<T, CasementError>;
