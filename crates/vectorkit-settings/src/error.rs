//! Error types for the settings crate.
//!
//! This module provides structured error types for loading, saving and
//! validating the editor configuration.

use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A value failed validation.
    #[error("Invalid setting: {0}")]
    Invalid(#[from] vectorkit_core::Error),
}

impl From<vectorkit_core::ConfigError> for SettingsError {
    fn from(err: vectorkit_core::ConfigError) -> Self {
        SettingsError::Invalid(err.into())
    }
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
