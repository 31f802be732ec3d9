//! Point-in-region classification.
//!
//! Crossing-number (ray casting) test per subpath, combined with even-odd
//! semantics across the subpaths of one region, matching the fill rule the
//! geometry is rendered with. Boundary points get whatever classification
//! falls out of the ray test; callers must not rely on either answer.

use crate::model::{Polygon, Vec2};
use crate::RegionIndex;

/// Number of times a rightward horizontal ray from `(px, py)` crosses the
/// ring's edges. The ring is treated as closed (last vertex connects back
/// to the first).
pub fn crossing_number(px: f32, py: f32, ring: &[Vec2]) -> i32 {
    if ring.len() < 3 {
        return 0;
    }

    let mut crossings = 0i32;
    let n = ring.len();
    for i in 0..n {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % n];

        let y_crosses = (p1.y <= py && p2.y > py) || (p2.y <= py && p1.y > py);
        if y_crosses {
            let t = (py - p1.y) / (p2.y - p1.y);
            let x_intersect = p1.x + t * (p2.x - p1.x);
            if px < x_intersect {
                crossings += 1;
            }
        }
    }
    crossings
}

/// Even-odd containment across all subpaths: a point enclosed by an odd
/// number of subpath boundaries is inside.
pub fn point_in_polygon(px: f32, py: f32, polygon: &Polygon) -> bool {
    let mut crossings = 0i32;
    for ring in polygon.rings() {
        crossings += crossing_number(px, py, ring);
    }
    crossings % 2 == 1
}

// First match in render order wins; `x`/`y` are source-space coordinates.
pub(crate) fn locate_impl(index: &RegionIndex, x: f32, y: f32) -> Option<u32> {
    for entry in &index.entries {
        if point_in_polygon(x, y, &entry.entry.polygon) {
            return Some(entry.region.id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec2(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    fn polygon(rings: &[&[Vec2]]) -> Polygon {
        let mut points = Vec::new();
        let mut subpaths = Vec::new();
        for ring in rings {
            let start = points.len();
            points.extend_from_slice(ring);
            subpaths.push((start, points.len()));
        }
        Polygon { points, subpaths }
    }

    #[test]
    fn crossing_number_square() {
        let square = vec![
            vec2(0.0, 0.0),
            vec2(10.0, 0.0),
            vec2(10.0, 10.0),
            vec2(0.0, 10.0),
        ];

        // Inside: ray crosses the right side once.
        assert_eq!(crossing_number(5.0, 5.0, &square), 1);
        // Left of the square: both vertical sides crossed.
        assert_eq!(crossing_number(-5.0, 5.0, &square), 2);
        // Right of the square: nothing crossed.
        assert_eq!(crossing_number(15.0, 5.0, &square), 0);
    }

    #[test]
    fn point_in_square() {
        let p = polygon(&[&[
            vec2(0.0, 0.0),
            vec2(10.0, 0.0),
            vec2(10.0, 10.0),
            vec2(0.0, 10.0),
        ]]);

        assert!(point_in_polygon(5.0, 5.0, &p));
        assert!(!point_in_polygon(15.0, 15.0, &p));
        assert!(!point_in_polygon(-1.0, -1.0, &p));
    }

    #[test]
    fn concave_l_shape() {
        let p = polygon(&[&[
            vec2(0.0, 0.0),
            vec2(10.0, 0.0),
            vec2(10.0, 5.0),
            vec2(5.0, 5.0),
            vec2(5.0, 10.0),
            vec2(0.0, 10.0),
        ]]);

        assert!(point_in_polygon(2.0, 2.0, &p));
        assert!(point_in_polygon(2.0, 7.0, &p));
        // The notch is outside.
        assert!(!point_in_polygon(7.0, 7.0, &p));
    }

    #[test]
    fn even_odd_across_subpaths() {
        // Square with a square hole: inside the hole is outside the region.
        let p = polygon(&[
            &[
                vec2(0.0, 0.0),
                vec2(20.0, 0.0),
                vec2(20.0, 20.0),
                vec2(0.0, 20.0),
            ],
            &[
                vec2(5.0, 5.0),
                vec2(15.0, 5.0),
                vec2(15.0, 15.0),
                vec2(5.0, 15.0),
            ],
        ]);

        assert!(point_in_polygon(2.0, 10.0, &p));
        assert!(!point_in_polygon(10.0, 10.0, &p));
        assert!(!point_in_polygon(25.0, 10.0, &p));
    }

    #[test]
    fn degenerate_rings() {
        assert_eq!(crossing_number(0.0, 0.0, &[]), 0);
        assert_eq!(crossing_number(0.0, 0.0, &[vec2(1.0, 1.0)]), 0);
        assert_eq!(
            crossing_number(0.0, 0.0, &[vec2(0.0, 0.0), vec2(1.0, 1.0)]),
            0
        );
        assert!(!point_in_polygon(0.0, 0.0, &Polygon::default()));
    }
}
