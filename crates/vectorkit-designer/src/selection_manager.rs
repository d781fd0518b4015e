use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexSet;
use tracing::trace;

use crate::geometry::Bounds;
use crate::model::{Point, Shape};
use crate::shape_store::ShapeStore;

/// A broken selection consistency rule, as reported by
/// [`SelectionManager::check_invariants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The primary id is not among the selected objects.
    PrimaryNotSelected(u64),
    /// A selected edge is missing one of its endpoints.
    EdgeWithoutEndpoints(u64, usize),
    /// Both endpoints are selected but the edge is not.
    EndpointsWithoutEdge(u64, usize),
    /// Every edge of the object is selected but the object is not.
    CoveredObjectNotSelected(u64),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimaryNotSelected(id) => write!(f, "primary {id} is not selected"),
            Self::EdgeWithoutEndpoints(id, e) => {
                write!(f, "edge ({id}, {e}) selected without both endpoints")
            }
            Self::EndpointsWithoutEdge(id, e) => {
                write!(f, "edge ({id}, {e}) has both endpoints selected but is not selected")
            }
            Self::CoveredObjectNotSelected(id) => {
                write!(f, "object {id} has every edge selected but is not selected")
            }
        }
    }
}

/// Owns the three-level selection graph (objects, edges, points) and keeps
/// it consistent.
///
/// `SelectionManager` is responsible for:
/// - Tracking the selected objects and which of them is the "primary"
/// - Tracking selected points and edges as flat `(object_id, index)` sets
/// - Re-deriving edge and object membership after every point or edge change
/// - Remembering the last clicked point and edge for shift-click ranges
///
/// # Selection Model
///
/// After every public mutation the following hold:
///
/// - A selected edge has both of its endpoints selected.
/// - An edge whose endpoints are both selected is itself selected.
/// - An object whose edges are all selected (and which has at least one
///   edge) is a selected object.
/// - Selecting an object selects all of its points and edges.
///
/// Two deliberate asymmetries:
///
/// - Deselecting a point removes the edges that reference it, but never
///   removes the object from the selected set. Only
///   [`toggle_object_selection`](Self::toggle_object_selection) demotes an
///   object.
/// - Toggling an edge off keeps its endpoints selected, so that edge stays
///   out of the set until the next sync pass over its object.
///
/// # Stale references
///
/// Every operation that names an object id or index which no longer
/// resolves in the [`ShapeStore`] is a silent no-op. The selection is not
/// cleared in that case, even for replacing operations.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    objects: IndexSet<u64>,
    primary: Option<u64>,
    points: BTreeSet<(u64, usize)>,
    edges: BTreeSet<(u64, usize)>,
    point_anchor: Option<(u64, usize)>,
    edge_anchor: Option<(u64, usize)>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.primary(), None);
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID of the primary selected object.
    pub fn primary(&self) -> Option<u64> {
        self.primary
    }

    /// Makes `id` the primary object. Ignored unless `id` is selected.
    pub fn set_primary(&mut self, id: u64) {
        if self.objects.contains(&id) {
            self.primary = Some(id);
        }
    }

    pub fn is_object_selected(&self, id: u64) -> bool {
        self.objects.contains(&id)
    }

    pub fn is_point_selected(&self, id: u64, index: usize) -> bool {
        self.points.contains(&(id, index))
    }

    pub fn is_edge_selected(&self, id: u64, index: usize) -> bool {
        self.edges.contains(&(id, index))
    }

    /// Returns `true` if nothing at all is selected.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.points.is_empty() && self.edges.is_empty()
    }

    /// Selected object ids in the order they were selected.
    pub fn selected_objects(&self) -> impl Iterator<Item = u64> + '_ {
        self.objects.iter().copied()
    }

    pub fn selected_object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn selected_points(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.points.iter().copied()
    }

    pub fn selected_edges(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Selected point indices of one object, ascending.
    pub fn points_of(&self, id: u64) -> impl Iterator<Item = usize> + '_ {
        self.points
            .range((id, 0)..=(id, usize::MAX))
            .map(|&(_, index)| index)
    }

    /// Selected edge indices of one object, ascending.
    pub fn edges_of(&self, id: u64) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .range((id, 0)..=(id, usize::MAX))
            .map(|&(_, index)| index)
    }

    /// The last point clicked, used to continue a shift-click range.
    pub fn point_anchor(&self) -> Option<(u64, usize)> {
        self.point_anchor
    }

    /// The last edge clicked, used to continue a shift-click range.
    pub fn edge_anchor(&self) -> Option<(u64, usize)> {
        self.edge_anchor
    }

    /// Objects that take part in editing: selected objects in selection
    /// order, followed by objects that only have selected points or edges,
    /// by ascending id.
    pub fn active_objects(&self) -> Vec<u64> {
        let mut active: Vec<u64> = self.objects.iter().copied().collect();
        let partial: BTreeSet<u64> = self
            .points
            .iter()
            .chain(self.edges.iter())
            .map(|&(id, _)| id)
            .filter(|id| !self.objects.contains(id))
            .collect();
        active.extend(partial);
        active
    }

    /// Empties all three sets and forgets the primary and range anchors.
    pub fn clear_selection(&mut self) {
        self.objects.clear();
        self.points.clear();
        self.edges.clear();
        self.primary = None;
        self.point_anchor = None;
        self.edge_anchor = None;
    }

    /// Selects an object together with all of its points and edges, and
    /// makes it the primary.
    ///
    /// # Arguments
    ///
    /// * `store` - The scene the id is resolved against
    /// * `id` - The object to select
    /// * `additive` - When `false` the previous selection is cleared first
    pub fn select_object(&mut self, store: &ShapeStore, id: u64, additive: bool) {
        let Some(shape) = store.get(id) else {
            trace!(id, "select_object: unknown object");
            return;
        };
        if !additive {
            self.clear_selection();
        }
        self.objects.insert(id);
        self.primary = Some(id);
        self.points.extend((0..shape.point_count()).map(|i| (id, i)));
        self.edges.extend((0..shape.edge_count()).map(|i| (id, i)));
    }

    /// Selects one point and re-derives edge and object membership.
    pub fn select_point(&mut self, store: &ShapeStore, id: u64, index: usize, additive: bool) {
        let Some(shape) = store.get(id).filter(|s| s.is_valid_point(index)) else {
            trace!(id, index, "select_point: stale reference");
            return;
        };
        if !additive {
            self.clear_selection();
        }
        self.points.insert((id, index));
        self.point_anchor = Some((id, index));
        self.sync_object(shape);
    }

    /// Adds every point with an index in the inclusive range between `from`
    /// and `to`, in either order.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorkit_designer::model::{Shape, Style};
    /// use vectorkit_designer::selection_manager::SelectionManager;
    /// use vectorkit_designer::shape_store::ShapeStore;
    ///
    /// let mut store = ShapeStore::new();
    /// store.insert(Shape::rectangle(1, 0.0, 0.0, 10.0, 10.0, Style::default()));
    ///
    /// let mut selection = SelectionManager::new();
    /// selection.select_point_range(&store, 1, 3, 1);
    /// assert_eq!(selection.points_of(1).collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn select_point_range(&mut self, store: &ShapeStore, id: u64, from: usize, to: usize) {
        let Some(shape) = store
            .get(id)
            .filter(|s| s.is_valid_point(from) && s.is_valid_point(to))
        else {
            trace!(id, from, to, "select_point_range: stale reference");
            return;
        };
        let (lo, hi) = (from.min(to), from.max(to));
        self.points.extend((lo..=hi).map(|i| (id, i)));
        self.point_anchor = Some((id, to));
        self.sync_object(shape);
    }

    /// Selects one edge and its endpoints, then re-derives membership.
    pub fn select_edge(&mut self, store: &ShapeStore, id: u64, index: usize, additive: bool) {
        let Some(shape) = store.get(id).filter(|s| s.is_valid_edge(index)) else {
            trace!(id, index, "select_edge: stale reference");
            return;
        };
        if !additive {
            self.clear_selection();
        }
        self.insert_edge_with_endpoints(shape, index);
        self.edge_anchor = Some((id, index));
        self.sync_object(shape);
    }

    /// Adds every edge with an index in the inclusive range between `from`
    /// and `to`, together with their endpoints.
    pub fn select_edge_range(&mut self, store: &ShapeStore, id: u64, from: usize, to: usize) {
        let Some(shape) = store
            .get(id)
            .filter(|s| s.is_valid_edge(from) && s.is_valid_edge(to))
        else {
            trace!(id, from, to, "select_edge_range: stale reference");
            return;
        };
        for index in from.min(to)..=from.max(to) {
            self.insert_edge_with_endpoints(shape, index);
        }
        self.edge_anchor = Some((id, to));
        self.sync_object(shape);
    }

    /// Deselects an object (and everything it owns) if selected, otherwise
    /// selects it additively.
    ///
    /// When the primary is deselected, the most recently selected remaining
    /// object becomes primary.
    pub fn toggle_object_selection(&mut self, store: &ShapeStore, id: u64) {
        if !store.contains(id) {
            trace!(id, "toggle_object_selection: unknown object");
            return;
        }
        if self.objects.contains(&id) {
            self.drop_object(id);
        } else {
            self.select_object(store, id, true);
        }
    }

    /// Deselects a point if selected, otherwise selects it additively.
    ///
    /// Deselection also removes every edge referencing the point. The
    /// object itself stays selected.
    pub fn toggle_point_selection(&mut self, store: &ShapeStore, id: u64, index: usize) {
        let Some(shape) = store.get(id).filter(|s| s.is_valid_point(index)) else {
            trace!(id, index, "toggle_point_selection: stale reference");
            return;
        };
        if self.points.remove(&(id, index)) {
            for edge in shape.edges_incident_to(index) {
                self.edges.remove(&(id, edge));
            }
            self.promote_if_covered(shape);
        } else {
            self.select_point(store, id, index, true);
        }
    }

    /// Deselects an edge if selected, otherwise selects it additively.
    ///
    /// Deselection keeps the edge's endpoints selected.
    pub fn toggle_edge_selection(&mut self, store: &ShapeStore, id: u64, index: usize) {
        if !store.get(id).is_some_and(|s| s.is_valid_edge(index)) {
            trace!(id, index, "toggle_edge_selection: stale reference");
            return;
        }
        if !self.edges.remove(&(id, index)) {
            self.select_edge(store, id, index, true);
        }
    }

    /// Marquee selection.
    ///
    /// A point qualifies when it lies inside `rect` (closed interval on both
    /// axes). An edge qualifies only if both endpoints qualify. Any object
    /// with at least one qualifying point is added to the selected objects,
    /// then the sync pass runs over it.
    pub fn select_in_box(&mut self, store: &ShapeStore, rect: Bounds, additive: bool) {
        let rect = Bounds::from_corners(
            Point::new(rect.min_x, rect.min_y),
            Point::new(rect.max_x, rect.max_y),
        );
        if !additive {
            self.clear_selection();
        }
        for shape in store.draw_order_iter() {
            let inside: Vec<bool> = shape.points.iter().map(|p| rect.contains(*p)).collect();
            if !inside.contains(&true) {
                continue;
            }
            let id = shape.id;
            for (index, hit) in inside.iter().enumerate() {
                if *hit {
                    self.points.insert((id, index));
                }
            }
            for (index, edge) in shape.edges.iter().enumerate() {
                if inside.get(edge.a) == Some(&true) && inside.get(edge.b) == Some(&true) {
                    self.edges.insert((id, index));
                }
            }
            self.objects.insert(id);
            if self.primary.is_none() {
                self.primary = Some(id);
            }
            self.sync_object(shape);
        }
    }

    /// Selects every object in the scene. Does nothing on an empty scene.
    pub fn select_all_objects(&mut self, store: &ShapeStore) {
        let ids: Vec<u64> = store.ids().collect();
        for (i, id) in ids.into_iter().enumerate() {
            self.select_object(store, id, i > 0);
        }
    }

    /// Selects all points and edges of the primary object.
    pub fn select_all_points_and_edges(&mut self, store: &ShapeStore) {
        let Some(shape) = self.primary.and_then(|id| store.get(id)) else {
            return;
        };
        let id = shape.id;
        self.points.extend((0..shape.point_count()).map(|i| (id, i)));
        self.edges.extend((0..shape.edge_count()).map(|i| (id, i)));
        self.sync_object(shape);
    }

    /// Removes every reference to a deleted object.
    pub fn forget_object(&mut self, id: u64) {
        self.drop_object(id);
    }

    /// Drops references to objects, points and edges that no longer exist.
    pub fn retain_existing(&mut self, store: &ShapeStore) {
        let gone: Vec<u64> = self
            .active_objects()
            .into_iter()
            .filter(|id| !store.contains(*id))
            .collect();
        for id in gone {
            self.drop_object(id);
        }
        self.points.retain(|&(id, index)| {
            store.get(id).is_some_and(|s| s.is_valid_point(index))
        });
        self.edges.retain(|&(id, index)| {
            store.get(id).is_some_and(|s| s.is_valid_edge(index))
        });
    }

    /// Lists every violated consistency rule, empty when the selection is
    /// consistent.
    pub fn check_invariants(&self, store: &ShapeStore) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();
        if let Some(primary) = self.primary {
            if !self.objects.contains(&primary) {
                violations.push(InvariantViolation::PrimaryNotSelected(primary));
            }
        }
        for shape in store.draw_order_iter() {
            let id = shape.id;
            let mut all_edges = !shape.edges.is_empty();
            for (index, edge) in shape.edges.iter().enumerate() {
                let ends = self.is_point_selected(id, edge.a) && self.is_point_selected(id, edge.b);
                let selected = self.is_edge_selected(id, index);
                if selected && !ends {
                    violations.push(InvariantViolation::EdgeWithoutEndpoints(id, index));
                }
                if ends && !selected {
                    violations.push(InvariantViolation::EndpointsWithoutEdge(id, index));
                }
                all_edges &= selected;
            }
            if all_edges && !self.objects.contains(&id) {
                violations.push(InvariantViolation::CoveredObjectNotSelected(id));
            }
        }
        violations
    }

    fn insert_edge_with_endpoints(&mut self, shape: &Shape, index: usize) {
        if let Some(edge) = shape.edge(index) {
            self.edges.insert((shape.id, index));
            self.points.insert((shape.id, edge.a));
            self.points.insert((shape.id, edge.b));
        }
    }

    /// Sync pass over one object: adds edges whose endpoints are both
    /// selected, then promotes the object if every edge is selected.
    fn sync_object(&mut self, shape: &Shape) {
        let id = shape.id;
        for (index, edge) in shape.edges.iter().enumerate() {
            if self.points.contains(&(id, edge.a)) && self.points.contains(&(id, edge.b)) {
                self.edges.insert((id, index));
            }
        }
        self.promote_if_covered(shape);
    }

    fn promote_if_covered(&mut self, shape: &Shape) {
        let id = shape.id;
        if shape.edges.is_empty() || self.objects.contains(&id) {
            return;
        }
        if (0..shape.edge_count()).all(|i| self.edges.contains(&(id, i))) {
            trace!(id, "every edge selected, promoting object");
            self.objects.insert(id);
            self.primary = Some(id);
        }
    }

    fn drop_object(&mut self, id: u64) {
        self.objects.shift_remove(&id);
        self.points.retain(|&(owner, _)| owner != id);
        self.edges.retain(|&(owner, _)| owner != id);
        if self.primary == Some(id) {
            self.primary = self.objects.last().copied();
        }
        if self.point_anchor.is_some_and(|(owner, _)| owner == id) {
            self.point_anchor = None;
        }
        if self.edge_anchor.is_some_and(|(owner, _)| owner == id) {
            self.edge_anchor = None;
        }
    }
}
