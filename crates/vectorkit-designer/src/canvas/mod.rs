//! Canvas owning the scene, the selection and the active gesture, and
//! dispatching pointer events to them according to the active tool.

mod drawing;
mod operations;
mod types;

pub use drawing::PathDraft;
pub use types::{Modifiers, Tool};

use tracing::debug;
use vectorkit_core::constants::{DEFAULT_POLYGON_SIDES, DEFAULT_SHAPE_SIZE};
use vectorkit_core::InteractionTolerances;

use crate::display::apply_display_transform;
use crate::geometry::Bounds;
use crate::hit_test::{resolve_hit, HitTarget};
use crate::model::{Point, Shape, Style};
use crate::selection_manager::{InvariantViolation, SelectionManager};
use crate::shape_store::ShapeStore;
use crate::transform::InteractionSession;

/// A plain click on something already selected. Released without moving,
/// the selection narrows to just that target.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Narrow {
    Point(u64, usize),
    Edge(u64, usize),
}

#[derive(Debug, Clone)]
enum Drag {
    Session(InteractionSession),
    Marquee {
        start: Point,
        current: Point,
        additive: bool,
    },
    /// Bezier tool: pulling the handle pair of a freshly placed point.
    DraftHandle { index: usize },
}

/// Canvas state managing shapes, selection and pointer gestures.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub shape_store: ShapeStore,
    pub selection_manager: SelectionManager,
    tool: Tool,
    tolerances: InteractionTolerances,
    style: Style,
    shape_size: f64,
    polygon_sides: u32,
    drag: Option<Drag>,
    drag_origin: Point,
    pending_narrow: Option<Narrow>,
    draft: Option<PathDraft>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates an empty canvas with the select tool and default tolerances.
    pub fn new() -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(),
            tool: Tool::Select,
            tolerances: InteractionTolerances::default(),
            style: Style::default(),
            shape_size: DEFAULT_SHAPE_SIZE,
            polygon_sides: DEFAULT_POLYGON_SIDES,
            drag: None,
            drag_origin: Point::default(),
            pending_narrow: None,
            draft: None,
        }
    }

    pub fn with_tolerances(tolerances: InteractionTolerances) -> Self {
        Self {
            tolerances,
            ..Self::new()
        }
    }

    pub fn set_tolerances(&mut self, tolerances: InteractionTolerances) {
        self.tolerances = tolerances;
    }

    pub fn tolerances(&self) -> &InteractionTolerances {
        &self.tolerances
    }

    /// Style given to newly drawn shapes.
    pub fn set_default_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Size of click-created primitives and side count of polygons.
    pub fn set_shape_defaults(&mut self, size: f64, polygon_sides: u32) {
        self.shape_size = size;
        self.polygon_sides = polygon_sides.max(3);
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tools. Any gesture in progress ends where it is and an
    /// in-progress drawing is finalized.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.drag.take().is_some() {
            debug!("gesture ended by tool switch");
        }
        self.pending_narrow = None;
        self.finish_drawing();
        self.tool = tool;
    }

    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    pub fn get_shape(&self, id: u64) -> Option<&Shape> {
        self.shape_store.get(id)
    }

    pub fn is_object_selected(&self, id: u64) -> bool {
        self.selection_manager.is_object_selected(id)
    }

    pub fn is_point_selected(&self, id: u64, index: usize) -> bool {
        self.selection_manager.is_point_selected(id, index)
    }

    pub fn is_edge_selected(&self, id: u64, index: usize) -> bool {
        self.selection_manager.is_edge_selected(id, index)
    }

    /// Hit test against the current scene, selection and tool.
    pub fn resolve_hit(&self, pointer: Point) -> Option<HitTarget> {
        resolve_hit(
            &self.shape_store,
            &self.selection_manager,
            self.tool,
            pointer,
            &self.tolerances,
        )
    }

    /// Render-ready geometry of one shape.
    pub fn display_shape(&self, id: u64) -> Option<Shape> {
        self.shape_store
            .get(id)
            .map(|shape| apply_display_transform(shape, &self.tolerances))
    }

    /// The active transform gesture, if any.
    pub fn session(&self) -> Option<&InteractionSession> {
        match &self.drag {
            Some(Drag::Session(session)) => Some(session),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current marquee rectangle while box-selecting.
    pub fn marquee(&self) -> Option<Bounds> {
        match self.drag {
            Some(Drag::Marquee { start, current, .. }) => Some(Bounds::from_corners(start, current)),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&PathDraft> {
        self.draft.as_ref()
    }

    /// Adds a rectangle and returns its id.
    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> u64 {
        let id = self.shape_store.generate_id();
        self.insert_shape(Shape::rectangle(id, x, y, width, height, self.style.clone()))
    }

    /// Adds a circle and returns its id.
    pub fn add_circle(&mut self, center: Point, radius: f64) -> u64 {
        let id = self.shape_store.generate_id();
        self.insert_shape(Shape::circle(id, center, radius, self.style.clone()))
    }

    /// Adds a regular polygon and returns its id.
    pub fn add_polygon(&mut self, center: Point, radius: f64, sides: u32) -> u64 {
        let id = self.shape_store.generate_id();
        self.insert_shape(Shape::polygon(id, center, radius, sides, self.style.clone()))
    }

    /// Adds a path of line segments and returns its id.
    pub fn add_path(&mut self, points: Vec<Point>, closed: bool) -> u64 {
        let id = self.shape_store.generate_id();
        self.insert_shape(Shape::path(id, points, closed, self.style.clone()))
    }

    fn insert_shape(&mut self, shape: Shape) -> u64 {
        let id = shape.id;
        debug!(id, kind = shape.kind.name(), "shape created");
        self.shape_store.insert(shape);
        id
    }

    pub fn pointer_down(&mut self, pos: Point, modifiers: Modifiers) {
        // A missed pointer-up leaves the previous gesture where it was.
        self.drag = None;
        self.pending_narrow = None;
        self.drag_origin = pos;

        match self.tool {
            Tool::Select | Tool::Rotate => self.pointer_down_select(pos, modifiers),
            tool if tool.is_primitive() => self.place_primitive(pos),
            _ => self.place_draft_point(pos),
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        match &mut self.drag {
            Some(Drag::Session(session)) => session.apply(pos, &mut self.shape_store),
            Some(Drag::Marquee { current, .. }) => *current = pos,
            Some(Drag::DraftHandle { index }) => {
                let index = *index;
                if let Some(draft) = self.draft.as_mut() {
                    draft.pull_handle(index, pos);
                }
            }
            None => {}
        }
    }

    pub fn pointer_up(&mut self, pos: Point) {
        let narrow = self.pending_narrow.take().filter(|_| pos == self.drag_origin);
        match self.drag.take() {
            Some(Drag::Session(session)) => {
                session.apply(pos, &mut self.shape_store);
                debug!(kind = ?session.kind(), "interaction session ended");
            }
            Some(Drag::Marquee {
                start, additive, ..
            }) => {
                let rect = Bounds::from_corners(start, pos);
                self.selection_manager
                    .select_in_box(&self.shape_store, rect, additive);
            }
            Some(Drag::DraftHandle { index }) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.pull_handle(index, pos);
                }
            }
            None => {}
        }
        match narrow {
            Some(Narrow::Point(id, index)) => {
                self.selection_manager
                    .select_point(&self.shape_store, id, index, false)
            }
            Some(Narrow::Edge(id, index)) => {
                self.selection_manager
                    .select_edge(&self.shape_store, id, index, false)
            }
            None => {}
        }
        debug_assert!(
            self.selection_manager
                .check_invariants(&self.shape_store)
                .iter()
                .all(|v| matches!(v, InvariantViolation::EndpointsWithoutEdge(..))),
            "selection graph out of sync"
        );
    }

    /// Clears the selection and finalizes any drawing. A drag in progress
    /// keeps going.
    pub fn escape(&mut self) {
        self.finish_drawing();
        self.selection_manager.clear_selection();
    }

    /// Finalizes an open drawing: kept with two or more points, discarded
    /// otherwise.
    pub fn finish_drawing(&mut self) {
        self.finalize_draft(false);
    }

    fn pointer_down_select(&mut self, pos: Point, modifiers: Modifiers) {
        let hit = self.resolve_hit(pos);
        let tol = self.tolerances;
        let store = &self.shape_store;
        let selection = &mut self.selection_manager;

        let session = match hit {
            Some(HitTarget::ResizeHandle { handle, .. }) => {
                InteractionSession::begin_resize(store, selection, handle, pos, tol)
            }
            Some(HitTarget::RotateHandle { .. }) => {
                InteractionSession::begin_rotate(store, selection, pos, tol)
            }
            Some(HitTarget::BezierHandle {
                object_id,
                point_index,
                side,
            }) => InteractionSession::begin_bezier_handle(
                store,
                object_id,
                point_index,
                side,
                pos,
                tol,
            ),
            Some(HitTarget::Point {
                object_id,
                point_index,
            }) => {
                if modifiers.shift {
                    match selection.point_anchor() {
                        Some((anchor_id, anchor)) if anchor_id == object_id => {
                            selection.select_point_range(store, object_id, anchor, point_index)
                        }
                        _ => selection.toggle_point_selection(store, object_id, point_index),
                    }
                } else if modifiers.ctrl {
                    selection.toggle_point_selection(store, object_id, point_index);
                } else if selection.is_point_selected(object_id, point_index) {
                    self.pending_narrow = Some(Narrow::Point(object_id, point_index));
                } else {
                    selection.select_point(store, object_id, point_index, false);
                }
                if selection.is_point_selected(object_id, point_index) {
                    InteractionSession::begin_point_edit(store, selection, pos, tol)
                } else {
                    None
                }
            }
            Some(HitTarget::Edge {
                object_id,
                edge_index,
            }) => {
                if modifiers.shift {
                    match selection.edge_anchor() {
                        Some((anchor_id, anchor)) if anchor_id == object_id => {
                            selection.select_edge_range(store, object_id, anchor, edge_index)
                        }
                        _ => selection.toggle_edge_selection(store, object_id, edge_index),
                    }
                } else if modifiers.ctrl {
                    selection.toggle_edge_selection(store, object_id, edge_index);
                } else if selection.is_edge_selected(object_id, edge_index) {
                    self.pending_narrow = Some(Narrow::Edge(object_id, edge_index));
                } else {
                    selection.select_edge(store, object_id, edge_index, false);
                }
                let is_arc = store
                    .get(object_id)
                    .and_then(|s| s.edge(edge_index))
                    .is_some_and(|e| e.curve.is_arc());
                if !selection.is_edge_selected(object_id, edge_index) {
                    None
                } else if is_arc {
                    InteractionSession::begin_arc_curvature(store, object_id, edge_index, pos, tol)
                } else {
                    InteractionSession::begin_edge_edit(store, selection, pos, tol)
                }
            }
            Some(HitTarget::Body { object_id }) => {
                if modifiers.shift || modifiers.ctrl {
                    selection.toggle_object_selection(store, object_id);
                } else if !selection.is_object_selected(object_id) {
                    selection.select_object(store, object_id, false);
                }
                if selection.is_object_selected(object_id) {
                    InteractionSession::begin_move(store, selection, pos, tol)
                } else {
                    None
                }
            }
            None => {
                self.drag = Some(Drag::Marquee {
                    start: pos,
                    current: pos,
                    additive: modifiers.shift,
                });
                return;
            }
        };
        self.drag = session.map(Drag::Session);
    }

    fn place_primitive(&mut self, pos: Point) {
        let size = self.shape_size;
        let id = match self.tool {
            Tool::Rectangle => self.add_rectangle(pos.x, pos.y, size, size),
            Tool::Circle => self.add_circle(pos, size / 2.0),
            _ => self.add_polygon(pos, size / 2.0, self.polygon_sides),
        };
        self.selection_manager
            .select_object(&self.shape_store, id, false);
    }

    fn place_draft_point(&mut self, pos: Point) {
        let Some(curve) = self.tool.draft_curve() else {
            return;
        };
        if self
            .draft
            .as_ref()
            .is_some_and(|d| d.closes_at(pos, self.tolerances.point_radius))
        {
            self.finalize_draft(true);
            return;
        }
        let draft = self.draft.get_or_insert_with(|| PathDraft::new(curve));
        let index = draft.push_point(pos);
        if self.tool == Tool::Bezier {
            self.drag = Some(Drag::DraftHandle { index });
        }
    }

    fn finalize_draft(&mut self, closed: bool) {
        let Some(draft) = self.draft.take() else {
            return;
        };
        if matches!(self.drag, Some(Drag::DraftHandle { .. })) {
            self.drag = None;
        }
        let id = self.shape_store.generate_id();
        match draft.into_shape(id, closed, self.style.clone()) {
            Some(shape) => {
                self.insert_shape(shape);
                self.selection_manager
                    .select_object(&self.shape_store, id, false);
            }
            None => debug!("discarded drawing with fewer than two points"),
        }
    }
}
