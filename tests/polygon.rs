use regionmap::geometry::build::build;
use regionmap::geometry::path::parse;
use regionmap::geometry::tolerance::CURVE_SEGMENTS;
use regionmap::model::Vec2;
use regionmap::BoundingBox;

fn build_str(d: &str) -> regionmap::Polygon {
    build(&parse(d).expect("parse"))
}

#[test]
fn move_line_close_yields_three_points() {
    let poly = build_str("M 2 3 L 8 -1 Z");
    assert_eq!(
        poly.points,
        vec![
            Vec2 { x: 2.0, y: 3.0 },
            Vec2 { x: 8.0, y: -1.0 },
            Vec2 { x: 2.0, y: 3.0 },
        ]
    );
    assert_eq!(poly.subpaths, vec![(0, 3)]);
    assert_eq!(
        poly.bounds(),
        BoundingBox {
            min_x: 2.0,
            min_y: -1.0,
            max_x: 8.0,
            max_y: 3.0,
        }
    );
}

#[test]
fn close_does_not_duplicate_start() {
    let poly = build_str("M 0 0 L 10 0 L 0 0 Z");
    assert_eq!(poly.points.len(), 3);
}

#[test]
fn relative_and_absolute_forms_agree() {
    let rel = build_str("M 0 0 l 10 0 l 0 10 z");
    let abs = build_str("M 0 0 L 10 0 L 10 10 Z");
    assert_eq!(rel, abs);
    assert_eq!(rel.bounds(), abs.bounds());
}

#[test]
fn build_is_deterministic() {
    let d = "M 0 0 C 0 10 10 10 10 0 Q 15 -10 20 0 A 5 5 0 0 1 30 0 Z";
    let a = build_str(d);
    let b = build_str(d);
    assert_eq!(a, b, "identical input must give bit-identical output");
    assert_eq!(a.bounds(), b.bounds());
}

#[test]
fn cubic_flattens_to_fixed_segment_count() {
    let poly = build_str("M 0 0 C 0 10 10 10 10 0");
    assert_eq!(poly.points.len(), 1 + CURVE_SEGMENTS as usize);
    // Parametric evaluation at t = 1 lands exactly on the endpoint.
    assert_eq!(*poly.points.last().unwrap(), Vec2 { x: 10.0, y: 0.0 });
}

#[test]
fn quadratic_passes_through_parametric_midpoint() {
    let poly = build_str("M 0 0 Q 5 10 10 0");
    let mid = poly.points[(CURVE_SEGMENTS / 2) as usize];
    assert_eq!(mid, Vec2 { x: 5.0, y: 5.0 });
}

#[test]
fn half_circle_arc_bounds() {
    let poly = build_str("M 0 0 A 5 5 0 0 1 10 0");
    let b = poly.bounds();
    assert!((b.min_x - 0.0).abs() < 0.1);
    assert!((b.max_x - 10.0).abs() < 0.1);
    assert!((b.min_y + 5.0).abs() < 0.1, "sweep arc should reach y = -5");
    assert!(b.max_y.abs() < 0.1);
}

#[test]
fn horizontal_and_vertical_segments() {
    let poly = build_str("M 1 2 H 5 V 7");
    assert_eq!(
        poly.points,
        vec![
            Vec2 { x: 1.0, y: 2.0 },
            Vec2 { x: 5.0, y: 2.0 },
            Vec2 { x: 5.0, y: 7.0 },
        ]
    );
}

#[test]
fn multiple_subpaths_are_marked_not_merged() {
    let poly = build_str("M 0 0 L 1 0 Z M 5 5 L 6 5 Z");
    assert_eq!(poly.subpaths.len(), 2);
    let rings: Vec<&[Vec2]> = poly.rings().collect();
    assert_eq!(rings[0][0], Vec2 { x: 0.0, y: 0.0 });
    assert_eq!(rings[1][0], Vec2 { x: 5.0, y: 5.0 });
}

#[test]
fn empty_commands_give_empty_polygon() {
    let poly = build(&[]);
    assert!(poly.is_empty());
    assert!(poly.bounds().is_empty());
}

#[test]
fn empty_bounds_are_skipped_by_union() {
    let empty = BoundingBox::EMPTY;
    let real = BoundingBox {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 1.0,
        max_y: 1.0,
    };
    assert_eq!(empty.union(&real), real);
    assert_eq!(real.union(&empty), real);
    assert!(empty.union(&BoundingBox::EMPTY).is_empty());
}

#[test]
fn drawing_before_any_moveto_starts_at_origin() {
    let poly = build_str("L 4 0 L 4 4");
    assert_eq!(poly.points[0], Vec2 { x: 0.0, y: 0.0 });
    assert_eq!(poly.points.len(), 3);
}
