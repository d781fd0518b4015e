//! Canvas type definitions: Tool, Modifiers.

use serde::{Deserialize, Serialize};

use crate::model::EdgeCurve;

/// Active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Select,
    Rotate,
    Rectangle,
    Circle,
    Polygon,
    Path,
    Arc,
    Bezier,
}

impl Tool {
    /// Curve kind of the segments a multi-click drawing tool produces.
    pub fn draft_curve(self) -> Option<EdgeCurve> {
        match self {
            Tool::Path => Some(EdgeCurve::Line),
            Tool::Arc => Some(EdgeCurve::Arc),
            Tool::Bezier => Some(EdgeCurve::Bezier),
            _ => None,
        }
    }

    /// Tools that create a shape with a single click.
    pub fn is_primitive(self) -> bool {
        matches!(self, Tool::Rectangle | Tool::Circle | Tool::Polygon)
    }
}

/// Keyboard modifiers held during a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };
}
