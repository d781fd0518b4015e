use vectorkit_designer::geometry::{edge_distance, flatten_edge, polyline_distance};
use vectorkit_designer::{Bounds, CurveKind, HandlePair, Point, Shape, Style};

#[test]
fn test_bounds_from_points_and_union() {
    assert!(Bounds::from_points(Vec::new()).is_none());
    let a = Bounds::from_points([Point::new(3.0, -1.0), Point::new(-2.0, 4.0)]).unwrap();
    assert_eq!(a, Bounds::new(-2.0, -1.0, 3.0, 4.0));
    let b = Bounds::new(10.0, 10.0, 12.0, 12.0);
    assert_eq!(a.union(&b), Bounds::new(-2.0, -1.0, 12.0, 12.0));
    assert_eq!(a.expanded(1.0), Bounds::new(-3.0, -2.0, 4.0, 5.0));
}

#[test]
fn test_shape_bounds_ignore_arc_bulge() {
    let circle = Shape::circle(1, Point::new(0.0, 0.0), 10.0, Style::default());
    assert_eq!(circle.bounds(), Bounds::new(-10.0, -10.0, 10.0, 10.0));
}

#[test]
fn test_polyline_distance_degenerate_inputs() {
    assert_eq!(polyline_distance(Point::new(1.0, 1.0), &[]), f64::INFINITY);
    assert_eq!(
        polyline_distance(Point::new(3.0, 4.0), &[Point::new(0.0, 0.0)]),
        5.0
    );
}

#[test]
fn test_bezier_edge_flattening() {
    let mut shape = Shape::path(
        1,
        vec![Point::new(0.0, 0.0), Point::new(90.0, 0.0)],
        false,
        Style::default(),
    );
    shape.edges[0].curve = CurveKind::Bezier;
    shape.handles[0] = Some(HandlePair::new(None, Some(Point::new(0.0, 60.0))));
    shape.handles[1] = Some(HandlePair::new(Some(Point::new(90.0, 60.0)), None));

    let samples = flatten_edge(&shape, 0, 0.25);
    assert_eq!(samples.first(), Some(&Point::new(0.0, 0.0)));
    assert_eq!(samples.last(), Some(&Point::new(90.0, 0.0)));

    // The curve peaks at three quarters of the handle height.
    assert!(edge_distance(&shape, 0, Point::new(45.0, 45.0), 0.25) < 0.5);
    assert!(edge_distance(&shape, 0, Point::new(45.0, 0.0), 0.25) > 40.0);
}

#[test]
fn test_bezier_without_handles_is_straight() {
    let mut shape = Shape::path(
        1,
        vec![Point::new(0.0, 0.0), Point::new(90.0, 0.0)],
        false,
        Style::default(),
    );
    shape.edges[0].curve = CurveKind::Bezier;
    assert!(edge_distance(&shape, 0, Point::new(45.0, 0.0), 0.25) < 1e-9);
}

#[test]
fn test_flatten_out_of_range_edge() {
    let shape = Shape::rectangle(1, 0.0, 0.0, 10.0, 10.0, Style::default());
    assert!(flatten_edge(&shape, 4, 0.25).is_empty());
    assert_eq!(edge_distance(&shape, 4, Point::new(0.0, 0.0), 0.25), f64::INFINITY);
}
