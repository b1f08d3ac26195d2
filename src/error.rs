use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Error types shared by every demo
// =============================================================================

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown shape: '{tag}'")]
    UnknownShape { tag: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DemoError {
    pub fn unknown_shape(tag: impl Into<String>) -> Self {
        Self::UnknownShape { tag: tag.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
