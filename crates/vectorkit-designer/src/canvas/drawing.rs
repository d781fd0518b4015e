//! In-progress path drawn by the path, arc and bezier tools.

use crate::model::{ArcParams, Edge, EdgeCurve, HandlePair, Point, Shape, ShapeKind, Style};

/// Points and segments placed so far by a multi-click drawing tool.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDraft {
    curve: EdgeCurve,
    points: Vec<Point>,
    edges: Vec<Edge>,
    handles: Vec<Option<HandlePair>>,
}

impl PathDraft {
    pub fn new(curve: EdgeCurve) -> Self {
        Self {
            curve,
            points: Vec::new(),
            edges: Vec::new(),
            handles: Vec::new(),
        }
    }

    pub fn curve(&self) -> EdgeCurve {
        self.curve
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether a click at `p` closes the draft onto its first point.
    pub fn closes_at(&self, p: Point, radius: f64) -> bool {
        self.points.len() >= 2 && self.points[0].distance_to(&p) <= radius
    }

    /// Appends a point, joined to the previous one by a segment of the
    /// draft's curve kind. Returns the new point's index.
    pub fn push_point(&mut self, p: Point) -> usize {
        self.points.push(p);
        self.handles.push(None);
        let index = self.points.len() - 1;
        if index > 0 {
            let edge = self.segment(index - 1, index);
            self.edges.push(edge);
        }
        index
    }

    /// Sets a mirrored handle pair on `index` with its out handle at `pull`.
    /// Pulling back onto the anchor removes the pair.
    pub fn pull_handle(&mut self, index: usize, pull: Point) {
        let Some(&anchor) = self.points.get(index) else {
            return;
        };
        self.handles[index] = if pull == anchor {
            None
        } else {
            Some(HandlePair::new(Some(pull.reflect_through(anchor)), Some(pull)))
        };
    }

    /// Converts the draft into a path shape. `None` with fewer than two points.
    pub fn into_shape(mut self, id: u64, closed: bool, style: Style) -> Option<Shape> {
        if self.points.len() < 2 {
            return None;
        }
        if closed {
            let closing = self.segment(self.points.len() - 1, 0);
            self.edges.push(closing);
        }
        let mut shape = Shape::new(id, ShapeKind::Path, self.points, self.edges, closed, style);
        shape.handles = self.handles;
        Some(shape)
    }

    fn segment(&self, a: usize, b: usize) -> Edge {
        match self.curve {
            EdgeCurve::Line => Edge::line(a, b),
            EdgeCurve::Arc => {
                let chord = self.points[a].distance_to(&self.points[b]);
                Edge::arc(a, b, ArcParams::circular(chord, false, true))
            }
            EdgeCurve::Bezier => Edge::bezier(a, b),
        }
    }
}
