//! Scene edits on the current selection.

use tracing::debug;

use super::Canvas;
use crate::geometry::Bounds;
use crate::model::{ArcParams, CurveKind, EdgeCurve, HandlePair, Point};

impl Canvas {
    /// Deletes every selected object. Returns the removed ids.
    pub fn delete_selected(&mut self) -> Vec<u64> {
        let ids: Vec<u64> = self.selection_manager.selected_objects().collect();
        for &id in &ids {
            self.shape_store.remove(id);
            self.selection_manager.forget_object(id);
        }
        if !ids.is_empty() {
            debug!(count = ids.len(), "deleted selected shapes");
        }
        ids
    }

    /// Copies every selected object, offset by `offset` on both axes, and
    /// selects the copies. Returns the new ids.
    pub fn duplicate_selected(&mut self, offset: f64) -> Vec<u64> {
        let originals: Vec<_> = self
            .selection_manager
            .selected_objects()
            .filter_map(|id| self.shape_store.get(id).cloned())
            .collect();
        let mut copies = Vec::with_capacity(originals.len());
        for mut shape in originals {
            shape.id = self.shape_store.generate_id();
            shape.translate(offset, offset);
            copies.push(self.insert_shape(shape));
        }
        for (i, &id) in copies.iter().enumerate() {
            self.selection_manager
                .select_object(&self.shape_store, id, i > 0);
        }
        copies
    }

    /// Converts every selected edge to `curve`. Returns the number of edges
    /// changed.
    ///
    /// New arcs get a radius equal to their chord. New bezier edges get
    /// control handles at the thirds of the chord where none exist, so they
    /// start out straight.
    pub fn set_selected_edges_curve(&mut self, curve: EdgeCurve) -> usize {
        let targets: Vec<(u64, usize)> = self.selection_manager.selected_edges().collect();
        let mut changed = 0;
        for (id, index) in targets {
            let Some(shape) = self.shape_store.get_mut(id) else {
                continue;
            };
            let Some((a, b)) = shape.edge_endpoints(index) else {
                continue;
            };
            let edge = shape.edges[index];
            if edge.curve.curve() == curve {
                continue;
            }
            shape.edges[index].curve = match curve {
                EdgeCurve::Line => CurveKind::Line,
                EdgeCurve::Arc => CurveKind::Arc(ArcParams::circular(a.distance_to(&b), false, true)),
                EdgeCurve::Bezier => {
                    seed_handle(shape.handle_mut(edge.a), a.lerp(b, 1.0 / 3.0), true);
                    seed_handle(shape.handle_mut(edge.b), a.lerp(b, 2.0 / 3.0), false);
                    CurveKind::Bezier
                }
            };
            changed += 1;
        }
        changed
    }

    /// Bounding box of all selected objects, `None` when none are selected.
    pub fn selection_bounds(&self) -> Option<Bounds> {
        self.selection_manager
            .selected_objects()
            .filter_map(|id| self.shape_store.get(id))
            .map(|shape| shape.bounds())
            .reduce(|acc, b| acc.union(&b))
    }
}

fn seed_handle(pair: Option<&mut HandlePair>, at: Point, outgoing: bool) {
    let Some(pair) = pair else { return };
    let slot = if outgoing {
        &mut pair.out_handle
    } else {
        &mut pair.in_handle
    };
    slot.get_or_insert(at);
}
