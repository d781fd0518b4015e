//! Pure geometric rules used by interaction sessions.

use lyon::geom::euclid::default::Transform2D;
use lyon::geom::{vector, Angle};

use crate::geometry::{radius_from_sagitta, Bounds};
use crate::hit_test::{BoxSide, ResizeHandle};
use crate::model::{ArcParams, Point};

/// New radius for an arc whose chord changed from `d0` to `d1`.
///
/// A bulged arc (`r0 > d0 / 2`) scales with the chord but never drops below
/// `d1 / 2 + epsilon`. Otherwise the radius only grows as far as needed to
/// still span the chord. A zero-length starting chord takes the second
/// branch.
pub fn rescale_arc_radius(r0: f64, d0: f64, d1: f64, epsilon: f64) -> f64 {
    if d0 > f64::EPSILON && r0 > d0 / 2.0 {
        (d1 / 2.0 + epsilon).max(r0 * d1 / d0)
    } else {
        (d1 / 2.0).max(r0)
    }
}

/// Radius and sweep flag of the minor arc from `p1` to `p2` that bulges
/// towards `pointer`.
///
/// Returns `None` when the chord is shorter than `min_chord`; such an edge
/// is treated as a straight line and left alone.
pub fn arc_from_bulge(
    p1: Point,
    p2: Point,
    pointer: Point,
    min_sagitta: f64,
    min_chord: f64,
) -> Option<(f64, bool)> {
    let chord = p2 - p1;
    let d = chord.length();
    if d < min_chord.max(f64::EPSILON) {
        return None;
    }
    let cross = chord.cross(pointer - p1);
    let sweep = cross <= 0.0;
    let sagitta = (cross.abs() / d).max(min_sagitta);
    Some((radius_from_sagitta(d, sagitta), sweep))
}

/// Applies [`arc_from_bulge`] to an arc's parameters. Large-arc is cleared.
pub fn bend_arc(params: &mut ArcParams, radius: f64, sweep: bool) {
    params.set_radius(radius);
    params.sweep = sweep;
    params.large_arc = false;
}

fn floor_signed(value: f64, min: f64) -> f64 {
    if value.abs() >= min {
        value
    } else if value < 0.0 {
        -min
    } else {
        min
    }
}

/// Affine mapping of a resize gesture: `p' = new_origin + (p - old_origin) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeMapping {
    pub old_origin: Point,
    pub new_origin: Point,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ResizeMapping {
    /// Computes the mapping for dragging `handle` of `bounds` by `delta`.
    ///
    /// Both the original box and the resulting extent are floored to
    /// `min_dimension` per axis; the extent keeps its sign so dragging past
    /// the opposite edge mirrors the shape. Axes the handle does not drag
    /// keep a scale of 1.
    pub fn new(bounds: &Bounds, handle: ResizeHandle, delta: Point, min_dimension: f64) -> Self {
        let (new_x, scale_x) = axis_mapping(
            bounds.min_x,
            bounds.max_x,
            handle.x_side(),
            delta.x,
            min_dimension,
        );
        let (new_y, scale_y) = axis_mapping(
            bounds.min_y,
            bounds.max_y,
            handle.y_side(),
            delta.y,
            min_dimension,
        );
        Self {
            old_origin: bounds.origin(),
            new_origin: Point::new(new_x, new_y),
            scale_x,
            scale_y,
        }
    }

    /// Exactly one axis mirrored.
    pub fn flips_orientation(&self) -> bool {
        (self.scale_x < 0.0) != (self.scale_y < 0.0)
    }

    pub fn to_transform(&self) -> Transform2D<f64> {
        Transform2D::translation(-self.old_origin.x, -self.old_origin.y)
            .then_scale(self.scale_x, self.scale_y)
            .then_translate(vector(self.new_origin.x, self.new_origin.y))
    }

    pub fn apply(&self, p: Point) -> Point {
        apply_transform(&self.to_transform(), p)
    }

    /// Scales arc radii by the absolute scale factors and inverts the sweep
    /// on a single-axis flip.
    pub fn apply_to_arc(&self, params: &mut ArcParams) {
        params.radius_x *= self.scale_x.abs();
        params.radius_y *= self.scale_y.abs();
        if self.flips_orientation() {
            params.sweep = !params.sweep;
        }
    }
}

/// Returns the new origin coordinate and scale along one axis.
fn axis_mapping(min: f64, max: f64, side: Option<BoxSide>, delta: f64, floor: f64) -> (f64, f64) {
    let old = (max - min).max(floor);
    match side {
        None => (min, 1.0),
        Some(BoxSide::Max) => {
            let extent = floor_signed(old + delta, floor);
            (min, extent / old)
        }
        Some(BoxSide::Min) => {
            let extent = floor_signed(old - delta, floor);
            (max - extent, extent / old)
        }
    }
}

/// Rotation by `angle` radians about `center`.
pub fn rotation_about(center: Point, angle: f64) -> Transform2D<f64> {
    Transform2D::translation(-center.x, -center.y)
        .then_rotate(Angle::radians(angle))
        .then_translate(vector(center.x, center.y))
}

pub fn apply_transform(transform: &Transform2D<f64>, p: Point) -> Point {
    Point::from_lyon(transform.transform_point(p.to_lyon()))
}
