//! Gesture-scoped geometric transforms.
//!
//! An [`InteractionSession`] captures an immutable snapshot of every shape a
//! gesture touches when the pointer goes down. Every pointer move recomputes
//! the geometry from that snapshot and the total pointer delta, so dropped,
//! coalesced or repeated move events all converge on the same result for the
//! same pointer position.

pub mod rules;

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use vectorkit_core::InteractionTolerances;

use crate::geometry::Bounds;
use crate::hit_test::ResizeHandle;
use crate::model::{CurveKind, Edge, HandlePair, HandleSide, Point, Shape};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;

use rules::{apply_transform, arc_from_bulge, bend_arc, rescale_arc_radius, rotation_about, ResizeMapping};

/// Kind of gesture being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Move,
    Resize,
    Rotate,
    PointEdit,
    EdgeEdit,
    ArcCurvature,
    BezierHandle,
}

/// Deep copy of the editable geometry of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    pub points: Vec<Point>,
    pub edges: Vec<Edge>,
    pub handles: Vec<Option<HandlePair>>,
}

impl ShapeGeometry {
    pub fn of(shape: &Shape) -> Self {
        Self {
            points: shape.points.clone(),
            edges: shape.edges.clone(),
            handles: shape.handles.clone(),
        }
    }

    pub fn write_to(&self, shape: &mut Shape) {
        shape.points.clone_from(&self.points);
        shape.edges.clone_from(&self.edges);
        shape.handles.clone_from(&self.handles);
    }

    fn translate_point(&mut self, index: usize, delta: Point) {
        if let Some(p) = self.points.get_mut(index) {
            *p = *p + delta;
        }
        if let Some(Some(pair)) = self.handles.get_mut(index) {
            *pair = pair.map(|h| h + delta);
        }
    }

    fn map_all(&mut self, f: impl Fn(Point) -> Point) {
        for p in &mut self.points {
            *p = f(*p);
        }
        for pair in self.handles.iter_mut().flatten() {
            *pair = pair.map(&f);
        }
    }
}

/// Geometry of every shape a gesture touches, keyed by object id.
pub type GestureSnapshot = BTreeMap<u64, ShapeGeometry>;

/// New geometry for the shapes a gesture touches, keyed by object id.
pub type GeometryUpdate = BTreeMap<u64, ShapeGeometry>;

#[derive(Debug, Clone, PartialEq)]
enum Pivot {
    None,
    Resize {
        bounds: Bounds,
        handle: ResizeHandle,
    },
    Rotate {
        center: Point,
        start_angle: f64,
    },
    Arc {
        object_id: u64,
        edge_index: usize,
    },
    Handle {
        object_id: u64,
        point_index: usize,
        side: HandleSide,
        mirror: bool,
    },
}

/// One active pointer-drag gesture.
///
/// The moved points (or objects) are fixed when the session begins; later
/// selection changes do not alter what the gesture moves.
#[derive(Debug, Clone)]
pub struct InteractionSession {
    kind: InteractionKind,
    origin: Point,
    snapshot: GestureSnapshot,
    pivot: Pivot,
    targets: BTreeMap<u64, BTreeSet<usize>>,
    tolerances: InteractionTolerances,
}

fn snapshot_of(store: &ShapeStore, ids: impl IntoIterator<Item = u64>) -> GestureSnapshot {
    ids.into_iter()
        .filter_map(|id| store.get(id).map(|shape| (id, ShapeGeometry::of(shape))))
        .collect()
}

impl InteractionSession {
    fn new(
        kind: InteractionKind,
        origin: Point,
        snapshot: GestureSnapshot,
        pivot: Pivot,
        targets: BTreeMap<u64, BTreeSet<usize>>,
        tolerances: InteractionTolerances,
    ) -> Option<Self> {
        if snapshot.is_empty() {
            return None;
        }
        debug!(?kind, objects = snapshot.len(), "interaction session started");
        Some(Self {
            kind,
            origin,
            snapshot,
            pivot,
            targets,
            tolerances,
        })
    }

    /// Starts moving every selected object. `None` if nothing is selected.
    pub fn begin_move(
        store: &ShapeStore,
        selection: &SelectionManager,
        origin: Point,
        tolerances: InteractionTolerances,
    ) -> Option<Self> {
        let snapshot = snapshot_of(store, selection.selected_objects());
        Self::new(
            InteractionKind::Move,
            origin,
            snapshot,
            Pivot::None,
            BTreeMap::new(),
            tolerances,
        )
    }

    /// Starts dragging every selected point.
    pub fn begin_point_edit(
        store: &ShapeStore,
        selection: &SelectionManager,
        origin: Point,
        tolerances: InteractionTolerances,
    ) -> Option<Self> {
        let mut targets: BTreeMap<u64, BTreeSet<usize>> = BTreeMap::new();
        for (id, index) in selection.selected_points() {
            targets.entry(id).or_default().insert(index);
        }
        let snapshot = snapshot_of(store, targets.keys().copied());
        Self::new(
            InteractionKind::PointEdit,
            origin,
            snapshot,
            Pivot::None,
            targets,
            tolerances,
        )
    }

    /// Starts dragging the endpoints of every selected edge.
    pub fn begin_edge_edit(
        store: &ShapeStore,
        selection: &SelectionManager,
        origin: Point,
        tolerances: InteractionTolerances,
    ) -> Option<Self> {
        let mut targets: BTreeMap<u64, BTreeSet<usize>> = BTreeMap::new();
        for (id, index) in selection.selected_edges() {
            if let Some(edge) = store.get(id).and_then(|s| s.edge(index)) {
                let moved = targets.entry(id).or_default();
                moved.insert(edge.a);
                moved.insert(edge.b);
            }
        }
        let snapshot = snapshot_of(store, targets.keys().copied());
        Self::new(
            InteractionKind::EdgeEdit,
            origin,
            snapshot,
            Pivot::None,
            targets,
            tolerances,
        )
    }

    /// Starts bending one arc edge. `None` unless the edge is an arc.
    pub fn begin_arc_curvature(
        store: &ShapeStore,
        object_id: u64,
        edge_index: usize,
        origin: Point,
        tolerances: InteractionTolerances,
    ) -> Option<Self> {
        let shape = store.get(object_id)?;
        if !shape.edge(edge_index)?.curve.is_arc() {
            return None;
        }
        Self::new(
            InteractionKind::ArcCurvature,
            origin,
            snapshot_of(store, [object_id]),
            Pivot::Arc {
                object_id,
                edge_index,
            },
            BTreeMap::new(),
            tolerances,
        )
    }

    /// Starts resizing every selected object against the primary object's
    /// bounding box.
    pub fn begin_resize(
        store: &ShapeStore,
        selection: &SelectionManager,
        handle: ResizeHandle,
        origin: Point,
        tolerances: InteractionTolerances,
    ) -> Option<Self> {
        let bounds = store.get(selection.primary()?)?.bounds();
        Self::new(
            InteractionKind::Resize,
            origin,
            snapshot_of(store, selection.selected_objects()),
            Pivot::Resize { bounds, handle },
            BTreeMap::new(),
            tolerances,
        )
    }

    /// Starts rotating every selected object about the centre of the
    /// primary object's bounding box.
    pub fn begin_rotate(
        store: &ShapeStore,
        selection: &SelectionManager,
        origin: Point,
        tolerances: InteractionTolerances,
    ) -> Option<Self> {
        let center = store.get(selection.primary()?)?.bounds().center();
        Self::new(
            InteractionKind::Rotate,
            origin,
            snapshot_of(store, selection.selected_objects()),
            Pivot::Rotate {
                center,
                start_angle: origin.angle_from(center),
            },
            BTreeMap::new(),
            tolerances,
        )
    }

    /// Starts dragging one bezier control handle. The opposite handle is
    /// mirrored only if it existed when the drag began.
    pub fn begin_bezier_handle(
        store: &ShapeStore,
        object_id: u64,
        point_index: usize,
        side: HandleSide,
        origin: Point,
        tolerances: InteractionTolerances,
    ) -> Option<Self> {
        let pair = store.get(object_id)?.handle(point_index)?;
        pair.get(side)?;
        let mirror = pair.get(side.opposite()).is_some();
        Self::new(
            InteractionKind::BezierHandle,
            origin,
            snapshot_of(store, [object_id]),
            Pivot::Handle {
                object_id,
                point_index,
                side,
                mirror,
            },
            BTreeMap::new(),
            tolerances,
        )
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn snapshot(&self) -> &GestureSnapshot {
        &self.snapshot
    }

    /// Ids of the objects this gesture rewrites.
    pub fn affected_objects(&self) -> impl Iterator<Item = u64> + '_ {
        self.snapshot.keys().copied()
    }

    /// Computes the geometry for `pointer` from the snapshot alone.
    ///
    /// A pointer back at the origin reproduces the snapshot for every kind,
    /// including the ones that follow the absolute pointer position.
    pub fn evaluate(&self, pointer: Point) -> GeometryUpdate {
        if pointer == self.origin {
            return self.snapshot.clone();
        }
        let delta = pointer - self.origin;
        match (&self.kind, &self.pivot) {
            (InteractionKind::Move, _) => self.map_snapshot(|_, geometry| {
                geometry.map_all(|p| p + delta);
            }),
            (InteractionKind::PointEdit | InteractionKind::EdgeEdit, _) => {
                self.move_targets(delta)
            }
            (InteractionKind::Resize, Pivot::Resize { bounds, handle }) => {
                let mapping =
                    ResizeMapping::new(bounds, *handle, delta, self.tolerances.min_box_dimension);
                let transform = mapping.to_transform();
                self.map_snapshot(|_, geometry| {
                    geometry.map_all(|p| apply_transform(&transform, p));
                    for edge in &mut geometry.edges {
                        if let Some(params) = edge.curve.arc_mut() {
                            mapping.apply_to_arc(params);
                        }
                    }
                })
            }
            (
                InteractionKind::Rotate,
                Pivot::Rotate {
                    center,
                    start_angle,
                },
            ) => {
                let angle = pointer.angle_from(*center) - start_angle;
                let transform = rotation_about(*center, angle);
                self.map_snapshot(|_, geometry| {
                    geometry.map_all(|p| apply_transform(&transform, p));
                    for edge in &mut geometry.edges {
                        if let Some(params) = edge.curve.arc_mut() {
                            params.x_axis_rotation += angle.to_degrees();
                        }
                    }
                })
            }
            (
                InteractionKind::ArcCurvature,
                Pivot::Arc {
                    object_id,
                    edge_index,
                },
            ) => self.map_snapshot(|id, geometry| {
                if id != *object_id {
                    return;
                }
                let Some(edge) = geometry.edges.get(*edge_index).copied() else {
                    return;
                };
                let (Some(&p1), Some(&p2)) =
                    (geometry.points.get(edge.a), geometry.points.get(edge.b))
                else {
                    return;
                };
                let Some((radius, sweep)) = arc_from_bulge(
                    p1,
                    p2,
                    pointer,
                    self.tolerances.min_arc_sagitta,
                    self.tolerances.min_arc_chord,
                ) else {
                    return;
                };
                if let Some(params) = geometry.edges[*edge_index].curve.arc_mut() {
                    bend_arc(params, radius, sweep);
                }
            }),
            (
                InteractionKind::BezierHandle,
                Pivot::Handle {
                    object_id,
                    point_index,
                    side,
                    mirror,
                },
            ) => self.map_snapshot(|id, geometry| {
                if id != *object_id {
                    return;
                }
                let Some(&anchor) = geometry.points.get(*point_index) else {
                    return;
                };
                if let Some(Some(pair)) = geometry.handles.get_mut(*point_index) {
                    pair.set(*side, Some(pointer));
                    if *mirror {
                        pair.set(side.opposite(), Some(pointer.reflect_through(anchor)));
                    }
                }
            }),
            // Constructors always pair a kind with its pivot.
            _ => GeometryUpdate::new(),
        }
    }

    /// Evaluates `pointer` and writes the result into `store`. Shapes that
    /// were deleted during the gesture are skipped.
    pub fn apply(&self, pointer: Point, store: &mut ShapeStore) {
        for (id, geometry) in self.evaluate(pointer) {
            if let Some(shape) = store.get_mut(id) {
                geometry.write_to(shape);
            }
        }
    }

    fn map_snapshot(&self, mut f: impl FnMut(u64, &mut ShapeGeometry)) -> GeometryUpdate {
        self.snapshot
            .iter()
            .map(|(&id, geometry)| {
                let mut next = geometry.clone();
                f(id, &mut next);
                (id, next)
            })
            .collect()
    }

    /// Point and edge edits: moves the target points with their handles and
    /// rescales every arc touching a moved point.
    fn move_targets(&self, delta: Point) -> GeometryUpdate {
        let epsilon = self.tolerances.arc_radius_epsilon;
        self.map_snapshot(|id, geometry| {
            let Some(moved) = self.targets.get(&id) else {
                return;
            };
            for &index in moved {
                geometry.translate_point(index, delta);
            }
            let original = &self.snapshot[&id];
            for (index, edge) in geometry.edges.iter_mut().enumerate() {
                if !(moved.contains(&edge.a) || moved.contains(&edge.b)) {
                    continue;
                }
                let before = &original.edges[index];
                let (Some(d0), Some(d1)) = (
                    chord(&original.points, before.a, before.b),
                    chord(&geometry.points, edge.a, edge.b),
                ) else {
                    continue;
                };
                let CurveKind::Arc(params) = &mut edge.curve else {
                    continue;
                };
                let r0 = before.curve.arc().map_or(params.radius_x, |p| p.radius_x);
                params.set_radius(rescale_arc_radius(r0, d0, d1, epsilon));
            }
        })
    }
}

fn chord(points: &[Point], a: usize, b: usize) -> Option<f64> {
    Some(points.get(a)?.distance_to(points.get(b)?))
}
