use serde::{Deserialize, Serialize};

use super::{CurveKind, Edge, HandlePair, Point};
use crate::geometry::Bounds;

/// Kind of shape. Only determines the default topology at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
    Path,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Path => "path",
        }
    }
}

/// Paint attributes. A `fill` of `None` renders as "none".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: "#000000".to_string(),
            stroke_width: 2.0,
        }
    }
}

/// An editable shape in the scene.
///
/// Point indices are stable for the shape's lifetime: edges and handles
/// refer to points by index. `handles` always has the same length as
/// `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: u64,
    pub kind: ShapeKind,
    pub points: Vec<Point>,
    pub edges: Vec<Edge>,
    pub handles: Vec<Option<HandlePair>>,
    pub closed: bool,
    pub style: Style,
}

impl Shape {
    pub fn new(
        id: u64,
        kind: ShapeKind,
        points: Vec<Point>,
        edges: Vec<Edge>,
        closed: bool,
        style: Style,
    ) -> Self {
        let handles = vec![None; points.len()];
        Self {
            id,
            kind,
            points,
            edges,
            handles,
            closed,
            style,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn handle(&self, index: usize) -> Option<&HandlePair> {
        self.handles.get(index).and_then(|h| h.as_ref())
    }

    /// Endpoint coordinates of an edge.
    pub fn edge_endpoints(&self, index: usize) -> Option<(Point, Point)> {
        let edge = self.edges.get(index)?;
        Some((self.point(edge.a)?, self.point(edge.b)?))
    }

    /// Indices of every edge referencing `point`.
    pub fn edges_incident_to(&self, point: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(move |(_, edge)| edge.touches(point))
            .map(|(i, _)| i)
    }

    /// Control points of a bezier edge. A missing handle falls back to its
    /// anchor, which degrades that end of the curve to a straight tangent.
    pub fn bezier_controls(&self, index: usize) -> Option<(Point, Point)> {
        let edge = self.edges.get(index)?;
        if edge.curve != CurveKind::Bezier {
            return None;
        }
        let (p1, p2) = self.edge_endpoints(index)?;
        let c1 = self
            .handle(edge.a)
            .and_then(|h| h.out_handle)
            .unwrap_or(p1);
        let c2 = self.handle(edge.b).and_then(|h| h.in_handle).unwrap_or(p2);
        Some((c1, c2))
    }

    /// Axis-aligned bounds of the shape's points.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.points.iter().copied()).unwrap_or_default()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        let offset = Point::new(dx, dy);
        for p in &mut self.points {
            *p = *p + offset;
        }
        for pair in self.handles.iter_mut().flatten() {
            *pair = pair.map(|h| h + offset);
        }
    }

    /// Appends a point and returns its index.
    pub fn push_point(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.handles.push(None);
        self.points.len() - 1
    }

    /// Returns the handle pair at `index`, creating an empty one if absent.
    pub fn handle_mut(&mut self, index: usize) -> Option<&mut HandlePair> {
        if index >= self.points.len() {
            return None;
        }
        if self.handles.len() < self.points.len() {
            self.handles.resize(self.points.len(), None);
        }
        Some(self.handles[index].get_or_insert_with(HandlePair::default))
    }

    pub fn is_valid_point(&self, index: usize) -> bool {
        index < self.points.len()
    }

    pub fn is_valid_edge(&self, index: usize) -> bool {
        index < self.edges.len()
    }
}
