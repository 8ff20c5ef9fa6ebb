//! Geometry and clipping properties across shapes, orientations and anchors.

use rstest::rstest;

use kumiko::geometry::{
    clip_segment_to_halfplane, line_segment_intersection, KeepSide, Orientation, Point,
    ShapeKind, TriangleGeometry,
};

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

// ==================== Vertex Geometry Tests ====================

#[rstest]
fn test_full_cell_sides(
    #[values(Orientation::Up, Orientation::Down)] orientation: Orientation,
    #[values(0.0, 37.5, -120.0)] x: f64,
    #[values(0.0, 86.6)] y: f64,
    #[values(1.0, 100.0, 333.3)] side: f64,
) {
    let geom = TriangleGeometry::calculate(ShapeKind::Full, orientation, x, y, side).unwrap();
    let t = geom.visible;
    for (a, b) in [(t.p1, t.p2), (t.p2, t.p3), (t.p3, t.p1)] {
        assert!((a.distance(&b) - side).abs() < 1e-6 * side);
    }
}

#[rstest]
fn test_centroid_is_mean(
    #[values(ShapeKind::Full, ShapeKind::HalfLeft, ShapeKind::HalfRight)] shape: ShapeKind,
    #[values(Orientation::Up, Orientation::Down)] orientation: Orientation,
    #[values(0.0, 250.0)] x: f64,
) {
    let geom = TriangleGeometry::calculate(shape, orientation, x, 40.0, 80.0).unwrap();
    let [a, b, c] = geom.visible.vertices();
    assert!(close(geom.centroid.x, (a.x + b.x + c.x) / 3.0));
    assert!(close(geom.centroid.y, (a.y + b.y + c.y) / 3.0));

    let [a, b, c] = geom.full.vertices();
    assert!(close(geom.full_centroid.x, (a.x + b.x + c.x) / 3.0));
    assert!(close(geom.full_centroid.y, (a.y + b.y + c.y) / 3.0));
}

#[rstest]
fn test_half_cells_sit_on_their_seam(
    #[values(ShapeKind::HalfLeft, ShapeKind::HalfRight)] shape: ShapeKind,
    #[values(Orientation::Up, Orientation::Down)] orientation: Orientation,
) {
    let geom = TriangleGeometry::calculate(shape, orientation, 150.0, 0.0, 100.0).unwrap();
    let boundary = geom.clip_boundary.expect("half cells carry a clip boundary");

    let on_seam: Vec<Point> = geom
        .visible
        .vertices()
        .into_iter()
        .filter(|p| close(p.x, boundary.x))
        .collect();
    assert_eq!(on_seam.len(), 2);

    // The full triangle is split symmetrically by the seam
    assert!(close(geom.full_centroid.x, boundary.x));

    // Every visible vertex lies on the kept side
    for p in geom.visible.vertices() {
        match boundary.keep {
            KeepSide::Left => assert!(p.x <= boundary.x + EPS),
            KeepSide::Right => assert!(p.x >= boundary.x - EPS),
        }
    }
}

#[rstest]
#[case(ShapeKind::HalfLeft, KeepSide::Right, 150.0)]
#[case(ShapeKind::HalfRight, KeepSide::Left, 200.0)]
fn test_half_cell_cut_position(
    #[case] shape: ShapeKind,
    #[case] keep: KeepSide,
    #[case] cut: f64,
) {
    let geom = TriangleGeometry::calculate(shape, Orientation::Up, 150.0, 0.0, 100.0).unwrap();
    let boundary = geom.clip_boundary.unwrap();
    assert_eq!(boundary.keep, keep);
    assert!(close(boundary.x, cut));
    assert_eq!(geom.part_shape, shape);
}

// ==================== Intersection Tests ====================

#[rstest]
#[case(Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0), Point::new(10.0, 0.0))]
#[case(Point::new(-5.0, 2.0), Point::new(5.0, 3.0), Point::new(1.0, -10.0), Point::new(2.0, 10.0))]
fn test_intersection_symmetric(
    #[case] l1: Point,
    #[case] l2: Point,
    #[case] s1: Point,
    #[case] s2: Point,
) {
    let forward = line_segment_intersection(l1, l2, s1, s2).unwrap();
    let backward = line_segment_intersection(l1, l2, s2, s1).unwrap();
    assert!(close(forward.x, backward.x));
    assert!(close(forward.y, backward.y));
}

#[test]
fn test_parallel_horizontal_segments() {
    let hit = line_segment_intersection(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(-3.0, 7.0),
        Point::new(40.0, 7.0),
    );
    assert!(hit.is_none());
}

// ==================== Clipping Tests ====================

#[rstest]
#[case(Point::new(0.0, 0.0), Point::new(10.0, 4.0))]
#[case(Point::new(10.0, 4.0), Point::new(0.0, 0.0))]
#[case(Point::new(3.0, -8.0), Point::new(17.0, 2.0))]
fn test_clip_straddling_lands_on_cut(#[case] p1: Point, #[case] p2: Point) {
    let (a, b) = clip_segment_to_halfplane(p1, p2, 5.0, KeepSide::Left).unwrap();
    let cut_points = [a, b].iter().filter(|p| p.x == 5.0).count();
    assert_eq!(cut_points, 1);
    assert!(a.x <= 5.0 && b.x <= 5.0);
}

#[test]
fn test_clip_left_cases() {
    let inside = (Point::new(0.0, 0.0), Point::new(4.0, 1.0));
    assert_eq!(
        clip_segment_to_halfplane(inside.0, inside.1, 5.0, KeepSide::Left),
        Some(inside)
    );

    let outside = (Point::new(6.0, 0.0), Point::new(9.0, 1.0));
    assert_eq!(
        clip_segment_to_halfplane(outside.0, outside.1, 5.0, KeepSide::Left),
        None
    );
}

#[test]
fn test_clip_vertical_segment_decided_by_endpoints() {
    let left = (Point::new(2.0, 0.0), Point::new(2.0, 9.0));
    assert_eq!(
        clip_segment_to_halfplane(left.0, left.1, 5.0, KeepSide::Left),
        Some(left)
    );
    assert_eq!(
        clip_segment_to_halfplane(left.0, left.1, 5.0, KeepSide::Right),
        None
    );
}
