use approx::assert_relative_eq;
use na::{Point2, Vector2};
use spacefold2d::geometry::{
    point_side_of_line, polygon_area, polygon_centroid, segment_line_intersection,
    split_polygon_by_line,
};

fn square() -> Vec<Point2<f32>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(100.0, 0.0),
        Point2::new(100.0, 100.0),
        Point2::new(0.0, 100.0),
    ]
}

fn triangle() -> Vec<Point2<f32>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(100.0, 0.0),
        Point2::new(0.0, 100.0),
    ]
}

#[test]
fn areas_and_centroids() {
    assert_relative_eq!(polygon_area(&square()), 10_000.0);
    assert_relative_eq!(polygon_area(&triangle()), 5_000.0);
    assert_relative_eq!(polygon_centroid(&square()), Point2::new(50.0, 50.0), epsilon = 1.0e-3);
    assert_relative_eq!(
        polygon_centroid(&triangle()),
        Point2::new(100.0 / 3.0, 100.0 / 3.0),
        epsilon = 1.0e-3
    );

    // Clockwise input has the same area.
    let mut clockwise = square();
    clockwise.reverse();
    assert_relative_eq!(polygon_area(&clockwise), 10_000.0);
}

#[test]
fn point_sides() {
    let origin = Point2::origin();
    let normal = Vector2::x();
    assert!(point_side_of_line(&Point2::new(5.0, 3.0), &origin, &normal) > 0.0);
    assert!(point_side_of_line(&Point2::new(-5.0, 3.0), &origin, &normal) < 0.0);
    assert_eq!(point_side_of_line(&Point2::new(0.0, 42.0), &origin, &normal), 0.0);
    assert_eq!(point_side_of_line(&Point2::new(1.0e-5, 0.0), &origin, &normal), 0.0);
}

#[test]
fn segment_intersections() {
    let inter = segment_line_intersection(
        &Point2::new(0.0, 0.0),
        &Point2::new(100.0, 100.0),
        &Point2::new(50.0, 0.0),
        &Vector2::x(),
    )
    .unwrap();
    assert_relative_eq!(inter, Point2::new(50.0, 50.0), epsilon = 1.0e-3);

    // Parallel to the line.
    assert!(segment_line_intersection(
        &Point2::new(0.0, 0.0),
        &Point2::new(0.0, 100.0),
        &Point2::new(50.0, 0.0),
        &Vector2::x(),
    )
    .is_none());

    // Not reaching the line.
    assert!(segment_line_intersection(
        &Point2::new(0.0, 0.0),
        &Point2::new(10.0, 0.0),
        &Point2::new(50.0, 0.0),
        &Vector2::x(),
    )
    .is_none());
}

#[test]
fn splits_conserve_area() {
    let lines = [
        (Point2::new(50.0, 0.0), Vector2::x()),
        (Point2::new(0.0, 30.0), Vector2::y()),
        (Point2::new(50.0, 50.0), Vector2::new(1.0, 1.0).normalize()),
        (Point2::new(20.0, 0.0), Vector2::new(2.0, -1.0).normalize()),
    ];

    for polygon in [square(), triangle()] {
        let total = polygon_area(&polygon);

        for (point, normal) in &lines {
            let split = split_polygon_by_line(&polygon, point, normal);
            let left = polygon_area(&split.left);
            let right = polygon_area(&split.right);
            assert_relative_eq!(left + right, total, max_relative = 1.0e-4);
        }
    }
}

#[test]
fn diagonal_split_of_a_square() {
    // The diagonal going through (0, 100) and (100, 0).
    let split = split_polygon_by_line(
        &square(),
        &Point2::new(50.0, 50.0),
        &Vector2::new(1.0, 1.0).normalize(),
    );
    assert_eq!(split.left.len(), 3);
    assert_eq!(split.right.len(), 3);
    assert!(split.intersections.is_empty());
    assert_relative_eq!(polygon_area(&split.left), 5_000.0, max_relative = 1.0e-4);
    assert_relative_eq!(polygon_area(&split.right), 5_000.0, max_relative = 1.0e-4);
}

#[test]
fn line_missing_the_polygon() {
    let split = split_polygon_by_line(&square(), &Point2::new(200.0, 0.0), &Vector2::x());
    assert!(!split.has_left());
    assert!(split.has_right());
    assert_relative_eq!(polygon_area(&split.right), 10_000.0);
}
