use serde::{Deserialize, Serialize};

/// Circular-arc parameters in SVG elliptical-arc form.
///
/// The editor keeps `radius_x == radius_y` for every arc it creates or
/// rescales; only resize with a non-uniform scale separates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcParams {
    pub radius_x: f64,
    pub radius_y: f64,
    /// X-axis rotation in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl ArcParams {
    /// A circular arc with the given radius.
    pub fn circular(radius: f64, large_arc: bool, sweep: bool) -> Self {
        Self {
            radius_x: radius,
            radius_y: radius,
            x_axis_rotation: 0.0,
            large_arc,
            sweep,
        }
    }

    /// Sets both radii to `radius`.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius_x = radius;
        self.radius_y = radius;
    }
}

/// Curve carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveKind {
    Line,
    Arc(ArcParams),
    /// Cubic bezier whose control points are `handles[a].out` and
    /// `handles[b].in` of the owning shape.
    Bezier,
}

/// Discriminant of [`CurveKind`], used when converting edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeCurve {
    Line,
    Arc,
    Bezier,
}

impl CurveKind {
    pub fn curve(&self) -> EdgeCurve {
        match self {
            CurveKind::Line => EdgeCurve::Line,
            CurveKind::Arc(_) => EdgeCurve::Arc,
            CurveKind::Bezier => EdgeCurve::Bezier,
        }
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, CurveKind::Arc(_))
    }

    pub fn arc(&self) -> Option<&ArcParams> {
        match self {
            CurveKind::Arc(params) => Some(params),
            _ => None,
        }
    }

    pub fn arc_mut(&mut self) -> Option<&mut ArcParams> {
        match self {
            CurveKind::Arc(params) => Some(params),
            _ => None,
        }
    }
}

/// An edge between two points of a shape, referenced by index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub curve: CurveKind,
}

impl Edge {
    pub fn line(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            curve: CurveKind::Line,
        }
    }

    pub fn arc(a: usize, b: usize, params: ArcParams) -> Self {
        Self {
            a,
            b,
            curve: CurveKind::Arc(params),
        }
    }

    pub fn bezier(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            curve: CurveKind::Bezier,
        }
    }

    pub fn touches(&self, point: usize) -> bool {
        self.a == point || self.b == point
    }
}
