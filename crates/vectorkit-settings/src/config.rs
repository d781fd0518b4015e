//! Configuration and settings management for VectorKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Interaction tolerances (hit radii, margins, numeric floors)
//! - Style defaults applied to newly created shapes
//! - Shape defaults for the drawing tools

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vectorkit_core::constants;
use vectorkit_core::{ConfigError, InteractionTolerances};

use crate::error::{Result, SettingsError};

/// Name of the configuration directory below the platform config dir.
const CONFIG_DIR_NAME: &str = "vectorkit";

/// File name of the default configuration file.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Style applied to shapes created by the drawing tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    /// Fill color, `None` for no fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Stroke color
    pub stroke: String,
    /// Stroke width in scene units
    pub stroke_width: f64,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: "#000000".to_string(),
            stroke_width: 2.0,
        }
    }
}

/// Defaults for the shape drawing tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    /// Width/height of new rectangles, diameter of new circles and polygons
    pub size: f64,
    /// Number of sides of new polygons
    pub polygon_sides: u32,
    /// Offset applied to duplicated shapes
    pub duplicate_offset: f64,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            size: constants::DEFAULT_SHAPE_SIZE,
            polygon_sides: constants::DEFAULT_POLYGON_SIDES,
            duplicate_offset: constants::DUPLICATE_OFFSET,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Hit-testing and transform tolerances
    pub interaction: InteractionTolerances,
    /// Style of new shapes
    pub style: StyleDefaults,
    /// Drawing tool defaults
    pub shapes: ShapeDefaults,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved editor config to {}", path.display());
        Ok(())
    }

    /// Loads the config at `path`, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Ignoring config at {}: {}; using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.interaction.validate()?;

        ConfigError::check_non_negative("style.stroke_width", self.style.stroke_width)?;

        ConfigError::check_positive("shapes.size", self.shapes.size)?;
        if self.shapes.polygon_sides < 3 {
            return Err(ConfigError::BelowMinimum {
                name: "shapes.polygon_sides".to_string(),
                min: 3,
                value: self.shapes.polygon_sides,
            }
            .into());
        }
        if !self.shapes.duplicate_offset.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "shapes.duplicate_offset".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Returns `<platform config dir>/vectorkit/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("platform config directory unavailable".to_string())
    })?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (expected .json or .toml)",
                path.display()
            ))),
        }
    }
}
