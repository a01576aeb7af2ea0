//! # World Error Types
//!
//! Engine operations themselves never fail: unallocated reads are air and a
//! missed ray is `None`. Errors only come from setting a world up.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::WorldConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config text is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid configuration: {field} {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Errors that can occur when constructing a world.
#[derive(Error, Debug)]
pub enum WorldError {
    /// The supplied configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for world construction.
pub type WorldResult<T> = Result<T, WorldError>;
