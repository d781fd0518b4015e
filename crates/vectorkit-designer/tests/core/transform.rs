use vectorkit_core::InteractionTolerances;
use vectorkit_designer::{
    ArcParams, CurveKind, Edge, HandlePair, HandleSide, InteractionKind, InteractionSession, Point,
    ResizeHandle, SelectionManager, Shape, ShapeKind, ShapeStore, Style,
};

fn tol() -> InteractionTolerances {
    InteractionTolerances::default()
}

fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-6 && (actual.y - expected.y).abs() < 1e-6,
        "expected {expected:?}, got {actual:?}"
    );
}

fn arc_path(id: u64, to: Point, radius: f64) -> Shape {
    Shape::new(
        id,
        ShapeKind::Path,
        vec![Point::new(0.0, 0.0), to],
        vec![Edge::arc(0, 1, ArcParams::circular(radius, false, true))],
        false,
        Style::default(),
    )
}

fn arc_of(store: &ShapeStore, id: u64, edge: usize) -> ArcParams {
    match store.get(id).unwrap().edges[edge].curve {
        CurveKind::Arc(params) => params,
        other => panic!("expected an arc, got {other:?}"),
    }
}

#[test]
fn test_move_idempotent_under_resampling() {
    let mut stepped = ShapeStore::new();
    stepped.insert(Shape::rectangle(1, 0.0, 0.0, 40.0, 20.0, Style::default()));
    let mut jumped = stepped.clone();

    let mut selection = SelectionManager::new();
    selection.select_object(&stepped, 1, false);

    let session =
        InteractionSession::begin_move(&stepped, &selection, Point::new(0.0, 0.0), tol()).unwrap();
    session.apply(Point::new(0.0, 0.0), &mut stepped);
    session.apply(Point::new(4.0, 4.0), &mut stepped);
    session.apply(Point::new(10.0, 10.0), &mut stepped);

    session.apply(Point::new(10.0, 10.0), &mut jumped);

    assert_eq!(stepped.get(1).unwrap().points, jumped.get(1).unwrap().points);
    assert_eq!(stepped.get(1).unwrap().points[0], Point::new(10.0, 10.0));
}

#[test]
fn test_move_out_of_order_events() {
    let mut store = ShapeStore::new();
    store.insert(Shape::circle(1, Point::new(0.0, 0.0), 10.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    let session =
        InteractionSession::begin_move(&store, &selection, Point::new(5.0, 5.0), tol()).unwrap();
    session.apply(Point::new(50.0, 50.0), &mut store);
    session.apply(Point::new(8.0, 5.0), &mut store);

    assert_eq!(store.get(1).unwrap().points[0], Point::new(13.0, 0.0));
    assert_eq!(arc_of(&store, 1, 0).radius_x, 10.0);
}

#[test]
fn test_move_carries_bezier_handles() {
    let mut store = ShapeStore::new();
    let mut shape = Shape::path(
        1,
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        false,
        Style::default(),
    );
    shape.handles[0] = Some(HandlePair::new(None, Some(Point::new(3.0, -4.0))));
    store.insert(shape);
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    let session =
        InteractionSession::begin_move(&store, &selection, Point::new(0.0, 0.0), tol()).unwrap();
    session.apply(Point::new(1.0, 2.0), &mut store);

    let pair = store.get(1).unwrap().handle(0).copied().unwrap();
    assert_eq!(pair.out_handle, Some(Point::new(4.0, -2.0)));
    assert_eq!(pair.in_handle, None);
}

#[test]
fn test_arc_radius_floor_when_chord_shrinks() {
    let mut store = ShapeStore::new();
    store.insert(arc_path(1, Point::new(60.0, 0.0), 50.0));
    let mut selection = SelectionManager::new();
    selection.select_point(&store, 1, 1, false);

    let session =
        InteractionSession::begin_point_edit(&store, &selection, Point::new(60.0, 0.0), tol())
            .unwrap();
    assert_eq!(session.kind(), InteractionKind::PointEdit);
    session.apply(Point::new(10.0, 0.0), &mut store);

    let params = arc_of(&store, 1, 0);
    assert!((params.radius_x - 50.0 * 10.0 / 60.0).abs() < 1e-9);
    assert_eq!(params.radius_x, params.radius_y);
    assert_eq!(store.get(1).unwrap().points[0], Point::new(0.0, 0.0));
}

#[test]
fn test_flat_arc_radius_grows_to_span_chord() {
    let mut store = ShapeStore::new();
    store.insert(arc_path(1, Point::new(60.0, 0.0), 30.0));
    let mut selection = SelectionManager::new();
    selection.select_point(&store, 1, 1, false);

    let session =
        InteractionSession::begin_point_edit(&store, &selection, Point::new(60.0, 0.0), tol())
            .unwrap();
    session.apply(Point::new(100.0, 0.0), &mut store);
    assert_eq!(arc_of(&store, 1, 0).radius_x, 50.0);

    session.apply(Point::new(20.0, 0.0), &mut store);
    assert_eq!(arc_of(&store, 1, 0).radius_x, 30.0);
}

#[test]
fn test_edge_edit_moves_union_of_endpoints() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 100.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_edge(&store, 1, 0, false);
    selection.select_edge(&store, 1, 1, true);

    let session =
        InteractionSession::begin_edge_edit(&store, &selection, Point::new(50.0, 0.0), tol())
            .unwrap();
    session.apply(Point::new(50.0, -10.0), &mut store);

    let points = &store.get(1).unwrap().points;
    assert_eq!(points[0], Point::new(0.0, -10.0));
    assert_eq!(points[1], Point::new(100.0, -10.0));
    assert_eq!(points[2], Point::new(100.0, 90.0));
    assert_eq!(points[3], Point::new(0.0, 100.0));
}

#[test]
fn test_arc_curvature_follows_pointer_side() {
    let mut store = ShapeStore::new();
    store.insert(arc_path(1, Point::new(20.0, 0.0), 10.0));

    let session =
        InteractionSession::begin_arc_curvature(&store, 1, 0, Point::new(10.0, -10.0), tol())
            .unwrap();
    session.apply(Point::new(10.0, 10.0), &mut store);

    let params = arc_of(&store, 1, 0);
    assert!((params.radius_x - 10.0).abs() < 1e-9);
    assert!(!params.sweep);
    assert!(!params.large_arc);
    assert_eq!(store.get(1).unwrap().points[1], Point::new(20.0, 0.0));

    // Flat drag floors the sagitta at one unit.
    session.apply(Point::new(10.0, 0.0), &mut store);
    let params = arc_of(&store, 1, 0);
    assert!(params.sweep);
    assert!((params.radius_x - (400.0 / 8.0 + 0.5)).abs() < 1e-9);
}

#[test]
fn test_arc_curvature_ignores_collapsed_chord() {
    let mut store = ShapeStore::new();
    store.insert(arc_path(1, Point::new(0.1, 0.0), 3.0));
    let session =
        InteractionSession::begin_arc_curvature(&store, 1, 0, Point::new(0.0, 0.0), tol()).unwrap();
    session.apply(Point::new(30.0, 30.0), &mut store);
    assert_eq!(arc_of(&store, 1, 0).radius_x, 3.0);
}

#[test]
fn test_resize_east_handle_freezes_y() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 10.0, 20.0, 100.0, 50.0, Style::default()));
    let before = store.get(1).unwrap().points.clone();
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    let session = InteractionSession::begin_resize(
        &store,
        &selection,
        ResizeHandle::E,
        Point::new(110.0, 45.0),
        tol(),
    )
    .unwrap();
    session.apply(Point::new(160.0, 80.0), &mut store);

    let shape = store.get(1).unwrap();
    for (after, before) in shape.points.iter().zip(&before) {
        assert_eq!(after.y, before.y);
    }
    let b = shape.bounds();
    assert!((b.min_x - 10.0).abs() < 1e-9);
    assert!((b.max_x - 160.0).abs() < 1e-9);
    assert!((b.height() - 50.0).abs() < 1e-9);
}

#[test]
fn test_resize_corner_pins_opposite_corner() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 100.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    let session = InteractionSession::begin_resize(
        &store,
        &selection,
        ResizeHandle::Nw,
        Point::new(0.0, 0.0),
        tol(),
    )
    .unwrap();
    session.apply(Point::new(50.0, 25.0), &mut store);

    let b = store.get(1).unwrap().bounds();
    assert_point_eq(Point::new(b.min_x, b.min_y), Point::new(50.0, 25.0));
    assert_point_eq(Point::new(b.max_x, b.max_y), Point::new(100.0, 100.0));
}

#[test]
fn test_resize_collapse_is_floored() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 100.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    let session = InteractionSession::begin_resize(
        &store,
        &selection,
        ResizeHandle::S,
        Point::new(50.0, 100.0),
        tol(),
    )
    .unwrap();
    session.apply(Point::new(50.0, 0.0), &mut store);

    let b = store.get(1).unwrap().bounds();
    assert!((b.height() - 1.0).abs() < 1e-9);
    assert!((b.width() - 100.0).abs() < 1e-9);
}

#[test]
fn test_resize_single_flip_inverts_sweep() {
    let mut store = ShapeStore::new();
    store.insert(Shape::circle(1, Point::new(50.0, 50.0), 50.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    // Drag the east handle past the west edge: width 100 becomes -100.
    let session = InteractionSession::begin_resize(
        &store,
        &selection,
        ResizeHandle::E,
        Point::new(100.0, 50.0),
        tol(),
    )
    .unwrap();
    session.apply(Point::new(-100.0, 50.0), &mut store);

    let params = arc_of(&store, 1, 0);
    assert!(!params.sweep);
    assert!((params.radius_x - 50.0).abs() < 1e-9);
    assert_point_eq(store.get(1).unwrap().points[0], Point::new(-100.0, 50.0));
}

#[test]
fn test_resize_double_flip_keeps_sweep() {
    let mut store = ShapeStore::new();
    store.insert(Shape::circle(1, Point::new(50.0, 50.0), 50.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    let session = InteractionSession::begin_resize(
        &store,
        &selection,
        ResizeHandle::Se,
        Point::new(100.0, 100.0),
        tol(),
    )
    .unwrap();
    session.apply(Point::new(-100.0, -100.0), &mut store);

    assert!(arc_of(&store, 1, 0).sweep);
}

#[test]
fn test_resize_scales_all_selected_from_primary_box() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 100.0, 100.0, Style::default()));
    store.insert(Shape::rectangle(2, 200.0, 0.0, 10.0, 10.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 2, false);
    selection.select_object(&store, 1, true);

    let session = InteractionSession::begin_resize(
        &store,
        &selection,
        ResizeHandle::E,
        Point::new(100.0, 50.0),
        tol(),
    )
    .unwrap();
    session.apply(Point::new(200.0, 50.0), &mut store);

    let other = store.get(2).unwrap().bounds();
    assert!((other.min_x - 400.0).abs() < 1e-9);
    assert!((other.width() - 20.0).abs() < 1e-9);
}

fn rotate_by(store: &mut ShapeStore, selection: &SelectionManager, angle: f64) {
    let center = store.get(selection.primary().unwrap()).unwrap().bounds().center();
    let start = Point::new(center.x, center.y - 80.0);
    let offset = start - center;
    let (sin, cos) = angle.sin_cos();
    let pointer = center + Point::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos);
    let session = InteractionSession::begin_rotate(store, selection, start, tol()).unwrap();
    session.apply(pointer, store);
}

#[test]
fn test_rotation_round_trip() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 10.0, 20.0, 100.0, 40.0, Style::default()));
    let original = store.get(1).unwrap().points.clone();
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    let theta = 0.7;
    rotate_by(&mut store, &selection, theta);
    assert!((store.get(1).unwrap().points[0].x - original[0].x).abs() > 1.0);
    rotate_by(&mut store, &selection, -theta);

    for (after, before) in store.get(1).unwrap().points.iter().zip(&original) {
        assert_point_eq(*after, *before);
    }
}

#[test]
fn test_rotation_quarter_turn_and_arc_axis() {
    let mut store = ShapeStore::new();
    store.insert(Shape::circle(1, Point::new(0.0, 0.0), 10.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);

    rotate_by(&mut store, &selection, std::f64::consts::FRAC_PI_2);

    // East moves to south in screen coordinates.
    assert_point_eq(store.get(1).unwrap().points[0], Point::new(0.0, 10.0));
    assert!((arc_of(&store, 1, 0).x_axis_rotation - 90.0).abs() < 1e-9);
}

#[test]
fn test_bezier_handle_mirrors_existing_opposite() {
    let mut store = ShapeStore::new();
    let mut shape = Shape::path(
        1,
        vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0), Point::new(100.0, 0.0)],
        false,
        Style::default(),
    );
    shape.edges[0].curve = CurveKind::Bezier;
    shape.edges[1].curve = CurveKind::Bezier;
    shape.handles[1] = Some(HandlePair::new(
        Some(Point::new(40.0, 0.0)),
        Some(Point::new(60.0, 0.0)),
    ));
    shape.handles[2] = Some(HandlePair::new(Some(Point::new(90.0, 5.0)), None));
    store.insert(shape);

    let session = InteractionSession::begin_bezier_handle(
        &store,
        1,
        1,
        HandleSide::Out,
        Point::new(60.0, 0.0),
        tol(),
    )
    .unwrap();
    session.apply(Point::new(60.0, 20.0), &mut store);
    let pair = store.get(1).unwrap().handle(1).copied().unwrap();
    assert_eq!(pair.out_handle, Some(Point::new(60.0, 20.0)));
    assert_eq!(pair.in_handle, Some(Point::new(40.0, -20.0)));

    let session = InteractionSession::begin_bezier_handle(
        &store,
        1,
        2,
        HandleSide::In,
        Point::new(90.0, 5.0),
        tol(),
    )
    .unwrap();
    session.apply(Point::new(80.0, 10.0), &mut store);
    let pair = store.get(1).unwrap().handle(2).copied().unwrap();
    assert_eq!(pair.in_handle, Some(Point::new(80.0, 10.0)));
    assert_eq!(pair.out_handle, None);
}

#[test]
fn test_deleted_shape_is_skipped() {
    let mut store = ShapeStore::new();
    store.insert(Shape::rectangle(1, 0.0, 0.0, 10.0, 10.0, Style::default()));
    let mut selection = SelectionManager::new();
    selection.select_object(&store, 1, false);
    let session =
        InteractionSession::begin_move(&store, &selection, Point::new(0.0, 0.0), tol()).unwrap();
    store.remove(1);
    session.apply(Point::new(5.0, 5.0), &mut store);
    assert!(store.is_empty());
    assert_eq!(session.evaluate(Point::new(5.0, 5.0)).len(), 1);
}
