use vectorkit_core::InteractionTolerances;
use vectorkit_designer::{
    resolve_hit, HandlePair, HandleSide, HitKind, HitTarget, Point, ResizeHandle,
    SelectionManager, Shape, ShapeStore, Style, Tool,
};

fn hit(
    store: &ShapeStore,
    selection: &SelectionManager,
    tool: Tool,
    x: f64,
    y: f64,
) -> Option<HitTarget> {
    resolve_hit(
        store,
        selection,
        tool,
        Point::new(x, y),
        &InteractionTolerances::default(),
    )
}

fn selected_rect() -> (ShapeStore, SelectionManager) {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 50.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);
    (store, selection)
}

#[test]
fn test_resize_handle_wins_with_select_tool() {
    let (store, selection) = selected_rect();
    assert_eq!(
        hit(&store, &selection, Tool::Select, 100.0, 25.0),
        Some(HitTarget::ResizeHandle {
            object_id: 1,
            handle: ResizeHandle::E,
        })
    );
    assert_eq!(
        hit(&store, &selection, Tool::Select, 2.0, 1.0),
        Some(HitTarget::ResizeHandle {
            object_id: 1,
            handle: ResizeHandle::Nw,
        })
    );
}

#[test]
fn test_rotate_tool_hides_resize_handles() {
    let (store, selection) = selected_rect();
    assert_eq!(
        hit(&store, &selection, Tool::Rotate, 100.0, 25.0),
        Some(HitTarget::Edge {
            object_id: 1,
            edge_index: 1,
        })
    );
    assert_eq!(
        hit(&store, &selection, Tool::Rotate, 2.0, 1.0),
        Some(HitTarget::Point {
            object_id: 1,
            point_index: 0,
        })
    );
}

#[test]
fn test_rotation_handle_above_box() {
    let (store, selection) = selected_rect();
    for tool in [Tool::Select, Tool::Rotate] {
        assert_eq!(
            hit(&store, &selection, tool, 50.0, -30.0),
            Some(HitTarget::RotateHandle { object_id: 1 })
        );
    }
    // Outside the rotation handle radius and the body margin.
    assert_eq!(hit(&store, &selection, Tool::Select, 50.0, -45.0), None);
}

#[test]
fn test_point_beats_edge() {
    let (store, selection) = selected_rect();
    let target = hit(&store, &selection, Tool::Rotate, 6.0, 0.0).unwrap();
    assert_eq!(target.kind(), HitKind::Point);
    assert_eq!(target.index(), Some(0));
}

#[test]
fn test_edge_threshold_is_exclusive() {
    let (store, selection) = selected_rect();
    let target = hit(&store, &selection, Tool::Rotate, 50.0, 9.9).unwrap();
    assert_eq!(
        target,
        HitTarget::Edge {
            object_id: 1,
            edge_index: 0,
        }
    );
    // Ten units below the top edge is no longer an edge hit, only the body.
    let target = hit(&store, &selection, Tool::Rotate, 50.0, 10.0).unwrap();
    assert_eq!(target.kind(), HitKind::Body);
}

#[test]
fn test_arc_edge_hit_follows_curve() {
    let mut store = ShapeStore::new();
    store.insert(Shape::circle(1, Point::new(100.0, 100.0), 50.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    // Midpoint of the east-to-south quarter, far from its straight chord.
    let on_curve = 100.0 + 50.0 * std::f64::consts::FRAC_1_SQRT_2;
    assert_eq!(
        hit(&store, &selection, Tool::Rotate, on_curve, on_curve),
        Some(HitTarget::Edge {
            object_id: 1,
            edge_index: 0,
        })
    );
    // The chord midpoint lies well inside the circle.
    let target = hit(&store, &selection, Tool::Rotate, 125.0, 125.0).unwrap();
    assert_eq!(target.kind(), HitKind::Body);
}

#[test]
fn test_unselected_objects_only_hit_by_body() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 100.0, Style::default()));
    let selection = SelectionManager::new();
    assert_eq!(
        hit(&store, &selection, Tool::Select, 0.0, 0.0),
        Some(HitTarget::Body { object_id: 1 })
    );
}

#[test]
fn test_partially_selected_object_is_active() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 100.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_point(&store, 1, 2, false);
    assert_eq!(
        hit(&store, &selection, Tool::Select, 0.0, 100.0),
        Some(HitTarget::Point {
            object_id: 1,
            point_index: 3,
        })
    );
}

#[test]
fn test_topmost_body_wins() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 100.0, Style::default()));
    store.insert(Shape::rectangle(2, 50.0, 50.0, 100.0, 100.0, Style::default()));
    let selection = SelectionManager::new();
    assert_eq!(
        hit(&store, &selection, Tool::Select, 75.0, 75.0),
        Some(HitTarget::Body { object_id: 2 })
    );
    assert_eq!(
        hit(&store, &selection, Tool::Select, 25.0, 25.0),
        Some(HitTarget::Body { object_id: 1 })
    );
}

#[test]
fn test_body_margin() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 100.0, Style::default()));
    let selection = SelectionManager::new();
    assert_eq!(
        hit(&store, &selection, Tool::Select, 104.0, 50.0),
        Some(HitTarget::Body { object_id: 1 })
    );
    assert_eq!(hit(&store, &selection, Tool::Select, 106.0, 50.0), None);
}

#[test]
fn test_bezier_handle_of_active_object() {
    let mut store = ShapeStore::new();
    let mut shape = Shape::path(
        1,
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        false,
        Style::default(),
    );
    shape.handles[1] = Some(HandlePair::new(Some(Point::new(80.0, 40.0)), None));
    store.insert(shape);
    let mut selection = SelectionManager::new();

    // Not active yet: the handle is outside the body margin too.
    assert_eq!(hit(&store, &selection, Tool::Select, 80.0, 40.0), None);

    selection.select_point(&store, 1, 0, false);
    assert_eq!(
        hit(&store, &selection, Tool::Select, 82.0, 42.0),
        Some(HitTarget::BezierHandle {
            object_id: 1,
            point_index: 1,
            side: HandleSide::In,
        })
    );
}

#[test]
fn test_empty_scene() {
    let store = ShapeStore::new();
    let selection = SelectionManager::new();
    assert_eq!(hit(&store, &selection, Tool::Select, 0.0, 0.0), None);
}
