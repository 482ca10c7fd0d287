//! Configuration loading errors.

use thiserror::Error;

/// Config load error
#[derive(Error, Debug, Clone)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for ConfigLoadError {
    fn from(e: std::io::Error) -> Self {
        ConfigLoadError::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigLoadError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigLoadError::Parse(e.to_string())
    }
}
