//! Geometry primitives: bounding boxes, distances and curve sampling.
//!
//! Arc and bezier evaluation goes through `lyon::geom`; arcs are stored in
//! SVG endpoint form and converted to centre form on demand.

use lyon::geom::{Angle, Arc, ArcFlags, CubicBezierSegment, SvgArc};
use serde::{Deserialize, Serialize};

use crate::model::{ArcParams, CurveKind, Point, Shape};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Box spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Closed-interval containment on both axes.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn expanded(&self, margin: f64) -> Bounds {
        Bounds::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }
}

/// Distance from `p` to the segment `a`-`b`.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let v = b - a;
    let w = p - a;
    let vv = v.dot(v);
    let t = if vv > 0.0 {
        (w.dot(v) / vv).clamp(0.0, 1.0)
    } else {
        0.0
    };
    p.distance_to(&(a + v * t))
}

/// Distance from `p` to a polyline.
pub fn polyline_distance(p: Point, polyline: &[Point]) -> f64 {
    match polyline {
        [] => f64::INFINITY,
        [only] => p.distance_to(only),
        _ => polyline
            .windows(2)
            .map(|w| point_segment_distance(p, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Radius of the circle through a chord of length `chord` with sagitta `sagitta`.
pub fn radius_from_sagitta(chord: f64, sagitta: f64) -> f64 {
    chord * chord / (8.0 * sagitta) + sagitta / 2.0
}

fn svg_arc(from: Point, to: Point, params: &ArcParams) -> SvgArc<f64> {
    SvgArc {
        from: from.to_lyon(),
        to: to.to_lyon(),
        radii: lyon::geom::vector(params.radius_x.abs(), params.radius_y.abs()),
        x_rotation: Angle::degrees(params.x_axis_rotation),
        flags: ArcFlags {
            large_arc: params.large_arc,
            sweep: params.sweep,
        },
    }
}

/// Centre-form arc for an SVG endpoint arc. Radii too small to span the
/// chord are scaled up the way SVG renderers do. Returns `None` when the
/// arc degenerates to a straight line.
pub fn arc_segment(from: Point, to: Point, params: &ArcParams) -> Option<Arc<f64>> {
    let arc = svg_arc(from, to, params);
    if arc.is_straight_line() {
        return None;
    }
    Some(Arc::from_svg_arc(&arc))
}

fn sample_count(approx_length: f64, tolerance: f64) -> usize {
    let steps = (approx_length / (tolerance.max(1e-3) * 16.0)).ceil();
    (steps as usize).clamp(8, 256)
}

/// Samples an edge of `shape` into a polyline, endpoints included.
pub fn flatten_edge(shape: &Shape, index: usize, tolerance: f64) -> Vec<Point> {
    let Some(edge) = shape.edge(index) else {
        return Vec::new();
    };
    let Some((from, to)) = shape.edge_endpoints(index) else {
        return Vec::new();
    };
    match &edge.curve {
        CurveKind::Line => vec![from, to],
        CurveKind::Arc(params) => match arc_segment(from, to, params) {
            Some(arc) => {
                let length = arc.sweep_angle.radians.abs() * arc.radii.x.max(arc.radii.y);
                let n = sample_count(length, tolerance);
                (0..=n)
                    .map(|i| Point::from_lyon(arc.sample(i as f64 / n as f64)))
                    .collect()
            }
            None => vec![from, to],
        },
        CurveKind::Bezier => {
            let Some((c1, c2)) = shape.bezier_controls(index) else {
                return vec![from, to];
            };
            let curve = CubicBezierSegment {
                from: from.to_lyon(),
                ctrl1: c1.to_lyon(),
                ctrl2: c2.to_lyon(),
                to: to.to_lyon(),
            };
            let hull = from.distance_to(&c1) + c1.distance_to(&c2) + c2.distance_to(&to);
            let n = sample_count(hull, tolerance);
            (0..=n)
                .map(|i| Point::from_lyon(curve.sample(i as f64 / n as f64)))
                .collect()
        }
    }
}

/// Distance from `p` to the rendered curve of an edge.
pub fn edge_distance(shape: &Shape, index: usize, p: Point, tolerance: f64) -> f64 {
    polyline_distance(p, &flatten_edge(shape, index, tolerance))
}
