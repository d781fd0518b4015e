//! Scene data model: points, edges, handles and shapes.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

mod edge;
mod handle;
mod primitives;
mod shape;

pub use edge::{ArcParams, CurveKind, Edge, EdgeCurve};
pub use handle::{HandlePair, HandleSide};
pub use shape::{Shape, ShapeKind, Style};

/// A 2D coordinate in scene space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length of the point interpreted as a vector from the origin.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product).
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle of the vector from `center` to this point, in radians.
    pub fn angle_from(&self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }

    /// Reflection of this point through `anchor`.
    pub fn reflect_through(&self, anchor: Point) -> Point {
        Point::new(2.0 * anchor.x - self.x, 2.0 * anchor.y - self.y)
    }

    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub(crate) fn to_lyon(self) -> lyon::geom::Point<f64> {
        lyon::geom::point(self.x, self.y)
    }

    pub(crate) fn from_lyon(p: lyon::geom::Point<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
