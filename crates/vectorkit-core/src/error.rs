//! Error handling for VectorKit
//!
//! The editing core itself has no error channel: stale references are silent
//! no-ops and degenerate geometry is clamped. Errors only surface at the
//! boundaries, when tolerances or configuration files are validated or read.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Represents an invalid tunable value, such as a negative hit radius.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value must be strictly positive
    #[error("'{name}' must be > 0, got {value}")]
    NotPositive {
        /// The name of the offending setting.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// Value must not be negative
    #[error("'{name}' must be >= 0, got {value}")]
    Negative {
        /// The name of the offending setting.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// Value must be finite
    #[error("'{name}' must be finite")]
    NotFinite {
        /// The name of the offending setting.
        name: String,
    },

    /// Integer value below its allowed minimum
    #[error("'{name}' must be at least {min}, got {value}")]
    BelowMinimum {
        /// The name of the offending setting.
        name: String,
        /// The smallest allowed value.
        min: u32,
        /// The rejected value.
        value: u32,
    },
}

impl ConfigError {
    /// Checks that `value` is finite and strictly positive.
    pub fn check_positive(name: &str, value: f64) -> std::result::Result<(), ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NotFinite {
                name: name.to_string(),
            });
        }
        if value <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Checks that `value` is finite and not negative.
    pub fn check_non_negative(name: &str, value: f64) -> std::result::Result<(), ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NotFinite {
                name: name.to_string(),
            });
        }
        if value < 0.0 {
            return Err(ConfigError::Negative {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }
}

/// Main error type for VectorKit
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
