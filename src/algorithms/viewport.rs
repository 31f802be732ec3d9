//! Fit-to-viewport transform computation.

use crate::geometry::tolerance::{clamp01, MIN_EXTENT};
use crate::model::{BoundingBox, Transform};

/// Compute the uniform scale + translation that fits the union of the
/// given bounds into a `viewport_w` x `viewport_h` rectangle, preserving
/// aspect ratio and centering the result. `padding` is the fraction of
/// each viewport dimension left free on each side.
///
/// Empty bounds are skipped; when nothing valid remains (or the viewport
/// itself is degenerate) the identity transform is returned. Output is a
/// pure function of the inputs: identical inputs give bit-identical
/// transforms.
pub fn fit_transform(
    bounds: &[BoundingBox],
    viewport_w: f32,
    viewport_h: f32,
    padding: f32,
) -> Transform {
    let mut combined = BoundingBox::EMPTY;
    for b in bounds {
        if !b.is_empty() {
            combined = combined.union(b);
        }
    }
    if combined.is_empty() || viewport_w <= 0.0 || viewport_h <= 0.0 {
        return Transform::IDENTITY;
    }

    // Degenerate (single-point) geometry gets a minimum extent instead of
    // dividing by zero.
    let w = combined.width().max(MIN_EXTENT);
    let h = combined.height().max(MIN_EXTENT);

    let pad = clamp01(padding).min(0.45);
    let usable_w = viewport_w * (1.0 - 2.0 * pad);
    let usable_h = viewport_h * (1.0 - 2.0 * pad);

    let scale = (usable_w / w).min(usable_h / h);
    let translate_x = (viewport_w - w * scale) / 2.0 - combined.min_x * scale;
    let translate_y = (viewport_h - h * scale) / 2.0 - combined.min_y * scale;

    Transform {
        scale,
        translate_x,
        translate_y,
    }
}
