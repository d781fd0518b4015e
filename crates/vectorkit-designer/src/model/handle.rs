use serde::{Deserialize, Serialize};

use super::Point;

/// Which control point of a [`HandlePair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandleSide {
    In,
    Out,
}

impl HandleSide {
    pub fn opposite(self) -> Self {
        match self {
            HandleSide::In => HandleSide::Out,
            HandleSide::Out => HandleSide::In,
        }
    }
}

/// Bezier control points owned by one anchor point, in absolute coordinates.
///
/// Once stored, `in_handle` and `out_handle` are independent; mirroring only
/// happens while a handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandlePair {
    pub in_handle: Option<Point>,
    pub out_handle: Option<Point>,
}

impl HandlePair {
    pub fn new(in_handle: Option<Point>, out_handle: Option<Point>) -> Self {
        Self {
            in_handle,
            out_handle,
        }
    }

    pub fn get(&self, side: HandleSide) -> Option<Point> {
        match side {
            HandleSide::In => self.in_handle,
            HandleSide::Out => self.out_handle,
        }
    }

    pub fn set(&mut self, side: HandleSide, value: Option<Point>) {
        match side {
            HandleSide::In => self.in_handle = value,
            HandleSide::Out => self.out_handle = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.in_handle.is_none() && self.out_handle.is_none()
    }

    /// Applies `f` to every present control point.
    pub fn map(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self {
            in_handle: self.in_handle.map(&mut f),
            out_handle: self.out_handle.map(&mut f),
        }
    }
}
