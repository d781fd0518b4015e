//! Tunable interaction tolerances.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{ConfigError, Result};

/// Hit radii, margins and numeric floors used by hit testing and transforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionTolerances {
    pub resize_handle_radius: f64,
    pub rotate_handle_radius: f64,
    pub rotate_handle_offset: f64,
    pub bezier_handle_radius: f64,
    pub point_radius: f64,
    pub edge_threshold: f64,
    pub body_margin: f64,
    pub arc_radius_epsilon: f64,
    pub min_arc_sagitta: f64,
    pub min_arc_chord: f64,
    pub min_box_dimension: f64,
    pub flatten_tolerance: f64,
}

impl Default for InteractionTolerances {
    fn default() -> Self {
        Self {
            resize_handle_radius: constants::RESIZE_HANDLE_HIT_RADIUS,
            rotate_handle_radius: constants::ROTATE_HANDLE_HIT_RADIUS,
            rotate_handle_offset: constants::ROTATE_HANDLE_OFFSET,
            bezier_handle_radius: constants::BEZIER_HANDLE_HIT_RADIUS,
            point_radius: constants::POINT_HIT_RADIUS,
            edge_threshold: constants::EDGE_HIT_THRESHOLD,
            body_margin: constants::BODY_HIT_MARGIN,
            arc_radius_epsilon: constants::ARC_RADIUS_EPSILON,
            min_arc_sagitta: constants::MIN_ARC_SAGITTA,
            min_arc_chord: constants::MIN_ARC_CHORD,
            min_box_dimension: constants::MIN_BOX_DIMENSION,
            flatten_tolerance: constants::FLATTEN_TOLERANCE,
        }
    }
}

impl InteractionTolerances {
    /// Validates every tolerance.
    ///
    /// Radii, floors and the flattening tolerance must be strictly positive;
    /// margins and offsets may be zero.
    pub fn validate(&self) -> Result<()> {
        ConfigError::check_positive("resize_handle_radius", self.resize_handle_radius)?;
        ConfigError::check_positive("rotate_handle_radius", self.rotate_handle_radius)?;
        ConfigError::check_non_negative("rotate_handle_offset", self.rotate_handle_offset)?;
        ConfigError::check_positive("bezier_handle_radius", self.bezier_handle_radius)?;
        ConfigError::check_positive("point_radius", self.point_radius)?;
        ConfigError::check_positive("edge_threshold", self.edge_threshold)?;
        ConfigError::check_non_negative("body_margin", self.body_margin)?;
        ConfigError::check_positive("arc_radius_epsilon", self.arc_radius_epsilon)?;
        ConfigError::check_positive("min_arc_sagitta", self.min_arc_sagitta)?;
        ConfigError::check_non_negative("min_arc_chord", self.min_arc_chord)?;
        ConfigError::check_positive("min_box_dimension", self.min_box_dimension)?;
        ConfigError::check_positive("flatten_tolerance", self.flatten_tolerance)?;
        Ok(())
    }
}
