//! Default interaction constants.
//!
//! All distances are in scene units.

/// Hit radius of the eight bounding-box resize handles.
pub const RESIZE_HANDLE_HIT_RADIUS: f64 = 10.0;

/// Hit radius of the rotation handle.
pub const ROTATE_HANDLE_HIT_RADIUS: f64 = 10.0;

/// Distance of the rotation handle above the top edge of the bounding box.
pub const ROTATE_HANDLE_OFFSET: f64 = 30.0;

/// Hit radius of bezier control-handle circles.
pub const BEZIER_HANDLE_HIT_RADIUS: f64 = 8.0;

/// Hit radius of shape points.
pub const POINT_HIT_RADIUS: f64 = 10.0;

/// Maximum (exclusive) pointer distance for an edge hit.
pub const EDGE_HIT_THRESHOLD: f64 = 10.0;

/// Outward margin added to a bounding box when hit testing object bodies.
pub const BODY_HIT_MARGIN: f64 = 5.0;

/// Floor added to half the chord when rescaling a bulged arc.
pub const ARC_RADIUS_EPSILON: f64 = 0.1;

/// Minimum sagitta produced by direct arc-curvature editing.
pub const MIN_ARC_SAGITTA: f64 = 1.0;

/// Chords shorter than this carry no visible arc and render as lines.
pub const MIN_ARC_CHORD: f64 = 0.5;

/// Minimum bounding-box dimension used by resize.
pub const MIN_BOX_DIMENSION: f64 = 1.0;

/// Tolerance used when flattening arcs and beziers for edge hit testing.
pub const FLATTEN_TOLERANCE: f64 = 0.25;

/// Default size of shapes created by the rectangle, circle and polygon tools.
pub const DEFAULT_SHAPE_SIZE: f64 = 100.0;

/// Default number of sides for the polygon tool.
pub const DEFAULT_POLYGON_SIDES: u32 = 6;

/// Offset applied to duplicated shapes.
pub const DUPLICATE_OFFSET: f64 = 10.0;
