//! Hook between the scene and renderers.

use vectorkit_core::InteractionTolerances;

use crate::model::{CurveKind, Shape};

/// Returns the render-ready geometry of `shape`.
///
/// The result always reflects the latest geometry written by an interaction
/// session, including one still in progress. Arcs whose chord is too short
/// to show a visible bulge come back as lines, and arc radii too small to
/// span their chord are lifted to half the chord.
pub fn apply_display_transform(shape: &Shape, tolerances: &InteractionTolerances) -> Shape {
    let mut out = shape.clone();
    for index in 0..out.edges.len() {
        let Some((a, b)) = shape.edge_endpoints(index) else {
            continue;
        };
        let chord = a.distance_to(&b);
        let edge = &mut out.edges[index];
        if let CurveKind::Arc(params) = &mut edge.curve {
            if chord < tolerances.min_arc_chord {
                edge.curve = CurveKind::Line;
            } else {
                let floor = chord / 2.0;
                params.radius_x = params.radius_x.abs().max(floor);
                params.radius_y = params.radius_y.abs().max(floor);
            }
        }
    }
    out
}
