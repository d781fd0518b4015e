//! # VectorKit
//!
//! Editing core for interactive vector-shape editors:
//! - Shapes made of points joined by line, arc and cubic bezier edges
//! - A selection graph keeping objects, edges and points consistent
//! - Pointer hit testing with handle, point, edge and body priorities
//! - Gesture-scoped move, resize, rotate and curve-editing transforms
//!
//! ## Architecture
//!
//! VectorKit is organized as a workspace with multiple crates:
//!
//! 1. **vectorkit-core** - Error types, interaction constants and tolerances
//! 2. **vectorkit-settings** - Configuration file handling and validation
//! 3. **vectorkit-designer** - Scene, selection, hit testing, transforms and the canvas
//! 4. **vectorkit** - This facade, re-exporting the crates above

pub use vectorkit_designer as designer;
pub use vectorkit_settings as settings;

pub use vectorkit_core::{ConfigError, Error, InteractionTolerances, Result};

pub use vectorkit_designer::{
    apply_display_transform, resolve_hit, ArcParams, Bounds, Canvas, CurveKind, Edge, EdgeCurve,
    HandlePair, HandleSide, HitKind, HitTarget, InteractionKind, InteractionSession, Modifiers,
    Point, ResizeHandle, SelectionManager, Shape, ShapeKind, ShapeStore, Style, Tool,
};

pub use vectorkit_settings::{Config, SettingsError, ShapeDefaults, StyleDefaults};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Creates a canvas configured from `config`: interaction tolerances,
/// the style of new shapes and the drawing tool defaults.
///
/// The duplicate offset is not canvas state; pass
/// `config.shapes.duplicate_offset` to [`Canvas::duplicate_selected`].
pub fn build_canvas(config: &Config) -> Canvas {
    let mut canvas = Canvas::with_tolerances(config.interaction);
    canvas.set_default_style(Style {
        fill: config.style.fill.clone(),
        stroke: config.style.stroke.clone(),
        stroke_width: config.style.stroke_width,
    });
    canvas.set_shape_defaults(config.shapes.size, config.shapes.polygon_sides);
    tracing::debug!(
        size = config.shapes.size,
        sides = config.shapes.polygon_sides,
        "canvas configured"
    );
    canvas
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
