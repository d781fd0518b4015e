//! # VectorKit Core
//!
//! Core types shared by the VectorKit crates.
//! Provides the error taxonomy, the interaction constants used by hit testing
//! and the transform engine, and the tunable [`InteractionTolerances`].

pub mod constants;
pub mod error;
pub mod tolerances;

pub use error::{ConfigError, Error, Result};
pub use tolerances::InteractionTolerances;
