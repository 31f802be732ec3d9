use proptest::prelude::*;

use regionmap::geometry::build::build;
use regionmap::geometry::path::parse;

#[derive(Clone, Debug)]
enum PathOp {
    Move(i16, i16),
    Line(i16, i16),
    Horiz(i16),
    Vert(i16),
    Cubic(i16, i16, i16, i16, i16, i16),
    Quad(i16, i16, i16, i16),
    Close,
}

fn op_strategy() -> impl Strategy<Value = PathOp> {
    let c = -2000i16..2000i16;
    prop_oneof![
        (c.clone(), c.clone()).prop_map(|(x, y)| PathOp::Move(x, y)),
        (c.clone(), c.clone()).prop_map(|(x, y)| PathOp::Line(x, y)),
        c.clone().prop_map(PathOp::Horiz),
        c.clone().prop_map(PathOp::Vert),
        (c.clone(), c.clone(), c.clone(), c.clone(), c.clone(), c.clone())
            .prop_map(|(a, b, d, e, f, g)| PathOp::Cubic(a, b, d, e, f, g)),
        (c.clone(), c.clone(), c.clone(), c.clone())
            .prop_map(|(a, b, d, e)| PathOp::Quad(a, b, d, e)),
        Just(PathOp::Close),
    ]
}

fn to_absolute(ops: &[PathOp]) -> String {
    let mut out = String::new();
    for op in ops {
        match *op {
            PathOp::Move(x, y) => out.push_str(&format!("M {} {} ", x, y)),
            PathOp::Line(x, y) => out.push_str(&format!("L {} {} ", x, y)),
            PathOp::Horiz(x) => out.push_str(&format!("H {} ", x)),
            PathOp::Vert(y) => out.push_str(&format!("V {} ", y)),
            PathOp::Cubic(x1, y1, x2, y2, x, y) => {
                out.push_str(&format!("C {} {} {} {} {} {} ", x1, y1, x2, y2, x, y))
            }
            PathOp::Quad(x1, y1, x, y) => out.push_str(&format!("Q {} {} {} {} ", x1, y1, x, y)),
            PathOp::Close => out.push_str("Z "),
        }
    }
    out
}

// Emit the same ops with relative letters, tracking the current point the
// way the parser does. Integer coordinates keep the delta arithmetic exact
// in f32, so both renderings must produce identical geometry.
fn to_relative(ops: &[PathOp]) -> String {
    let mut out = String::new();
    let mut cur = (0i32, 0i32);
    let mut start = (0i32, 0i32);
    for op in ops {
        match *op {
            PathOp::Move(x, y) => {
                out.push_str(&format!("m {} {} ", x as i32 - cur.0, y as i32 - cur.1));
                cur = (x as i32, y as i32);
                start = cur;
            }
            PathOp::Line(x, y) => {
                out.push_str(&format!("l {} {} ", x as i32 - cur.0, y as i32 - cur.1));
                cur = (x as i32, y as i32);
            }
            PathOp::Horiz(x) => {
                out.push_str(&format!("h {} ", x as i32 - cur.0));
                cur.0 = x as i32;
            }
            PathOp::Vert(y) => {
                out.push_str(&format!("v {} ", y as i32 - cur.1));
                cur.1 = y as i32;
            }
            PathOp::Cubic(x1, y1, x2, y2, x, y) => {
                out.push_str(&format!(
                    "c {} {} {} {} {} {} ",
                    x1 as i32 - cur.0,
                    y1 as i32 - cur.1,
                    x2 as i32 - cur.0,
                    y2 as i32 - cur.1,
                    x as i32 - cur.0,
                    y as i32 - cur.1
                ));
                cur = (x as i32, y as i32);
            }
            PathOp::Quad(x1, y1, x, y) => {
                out.push_str(&format!(
                    "q {} {} {} {} ",
                    x1 as i32 - cur.0,
                    y1 as i32 - cur.1,
                    x as i32 - cur.0,
                    y as i32 - cur.1
                ));
                cur = (x as i32, y as i32);
            }
            PathOp::Close => {
                out.push_str("z ");
                cur = start;
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn parse_then_build_is_deterministic(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let d = to_absolute(&ops);
        let a = build(&parse(&d).expect("valid path"));
        let b = build(&parse(&d).expect("valid path"));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.bounds(), b.bounds());
    }

    #[test]
    fn relative_rendering_matches_absolute(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let abs = build(&parse(&to_absolute(&ops)).expect("absolute"));
        let rel = build(&parse(&to_relative(&ops)).expect("relative"));
        prop_assert_eq!(abs, rel);
    }

    #[test]
    fn bounds_contain_every_vertex(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let poly = build(&parse(&to_absolute(&ops)).expect("valid path"));
        let b = poly.bounds();
        prop_assert_eq!(poly.is_empty(), b.is_empty());
        for p in &poly.points {
            prop_assert!(b.min_x <= p.x && p.x <= b.max_x);
            prop_assert!(b.min_y <= p.y && p.y <= b.max_y);
        }
    }
}
