//! # VectorKit Designer
//!
//! The editing core of VectorKit: a scene of editable shapes, the selection
//! graph that ties points, edges and objects together, pointer hit testing
//! and the gesture-scoped transform engine.
//!
//! ## Core Components
//!
//! - **Model**: points, edges with line, arc or bezier curves, handle pairs
//!   and shapes
//! - **Shape Store**: z-ordered shape collection with id generation
//! - **Selection Manager**: objects, edges and points kept mutually
//!   consistent under click, toggle, range and marquee selection
//! - **Hit Testing**: resolves a pointer to a handle, point, edge or body
//! - **Transform**: move, resize, rotate, point and edge edits, arc bending
//!   and bezier handle drags computed from a per-gesture snapshot
//! - **Canvas**: owns all of the above and dispatches pointer events by tool
//!
//! ## Architecture
//!
//! ```text
//! Canvas (tool dispatch)
//!   ├── ShapeStore (scene)
//!   ├── SelectionManager (selection graph)
//!   ├── hit_test (pointer -> target)
//!   └── InteractionSession (snapshot + pointer -> geometry)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vectorkit_designer::{Canvas, Modifiers, Point};
//!
//! let mut canvas = Canvas::new();
//! let id = canvas.add_rectangle(0.0, 0.0, 100.0, 50.0);
//!
//! // Click the body to select it, then drag it 10 units right.
//! canvas.pointer_down(Point::new(50.0, 25.0), Modifiers::NONE);
//! canvas.pointer_move(Point::new(60.0, 25.0));
//! canvas.pointer_up(Point::new(60.0, 25.0));
//!
//! assert!(canvas.is_object_selected(id));
//! assert_eq!(canvas.get_shape(id).unwrap().points[0], Point::new(10.0, 0.0));
//! ```

pub mod canvas;
pub mod display;
pub mod geometry;
pub mod model;
pub mod selection_manager;
pub mod shape_store;
pub mod transform;

pub use canvas::{Canvas, Modifiers, PathDraft, Tool};
pub use display::apply_display_transform;
pub use geometry::Bounds;
pub use hit_test::{resolve_hit, HitKind, HitTarget, ResizeHandle};
pub use model::{
    ArcParams, CurveKind, Edge, EdgeCurve, HandlePair, HandleSide, Point, Shape, ShapeKind, Style,
};
pub use selection_manager::{InvariantViolation, SelectionManager};
pub use shape_store::ShapeStore;
pub use transform::{
    GeometryUpdate, GestureSnapshot, InteractionKind, InteractionSession, ShapeGeometry,
};
