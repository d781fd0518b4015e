//! VectorKit Settings Crate
//!
//! Handles editor configuration: interaction tolerances, style defaults and
//! drawing-tool defaults, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, ShapeDefaults, StyleDefaults};
pub use error::SettingsError;
