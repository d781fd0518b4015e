//! Primitive shape constructors.

use std::f64::consts::PI;

use super::{ArcParams, Edge, Point, Shape, ShapeKind, Style};
use crate::geometry::Bounds;

/// Edges joining consecutive points, plus the closing edge when `closed`.
fn chain_edges(count: usize, closed: bool) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (1..count).map(|i| Edge::line(i - 1, i)).collect();
    if closed && count > 2 {
        edges.push(Edge::line(count - 1, 0));
    }
    edges
}

impl Shape {
    /// Axis-aligned rectangle. Negative extents are normalized.
    pub fn rectangle(id: u64, x: f64, y: f64, width: f64, height: f64, style: Style) -> Self {
        let b = Bounds::from_corners(Point::new(x, y), Point::new(x + width, y + height));
        let points = vec![
            Point::new(b.min_x, b.min_y),
            Point::new(b.max_x, b.min_y),
            Point::new(b.max_x, b.max_y),
            Point::new(b.min_x, b.max_y),
        ];
        Self::new(
            id,
            ShapeKind::Rectangle,
            points,
            chain_edges(4, true),
            true,
            style,
        )
    }

    /// Circle as four compass points (east, south, west, north) joined by
    /// quarter arcs.
    pub fn circle(id: u64, center: Point, radius: f64, style: Style) -> Self {
        let r = radius.abs();
        let points = vec![
            Point::new(center.x + r, center.y),
            Point::new(center.x, center.y + r),
            Point::new(center.x - r, center.y),
            Point::new(center.x, center.y - r),
        ];
        let edges = (0..4)
            .map(|i| Edge::arc(i, (i + 1) % 4, ArcParams::circular(r, false, true)))
            .collect();
        Self::new(id, ShapeKind::Circle, points, edges, true, style)
    }

    /// Regular polygon with the first vertex straight above the center.
    /// Fewer than three sides are raised to three.
    pub fn polygon(id: u64, center: Point, radius: f64, sides: u32, style: Style) -> Self {
        let n = sides.max(3) as usize;
        let points = (0..n)
            .map(|i| {
                let angle = -PI / 2.0 + 2.0 * PI * i as f64 / n as f64;
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect();
        Self::new(
            id,
            ShapeKind::Polygon,
            points,
            chain_edges(n, true),
            true,
            style,
        )
    }

    /// Free-form path of line edges through `points`.
    pub fn path(id: u64, points: Vec<Point>, closed: bool, style: Style) -> Self {
        let closed = closed && points.len() > 2;
        let edges = chain_edges(points.len(), closed);
        Self::new(id, ShapeKind::Path, points, edges, closed, style)
    }
}
