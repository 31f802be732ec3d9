// Centralized tolerances and flattening constants

pub const EPS_LEN: f32 = 1e-6;            // zero-length vector threshold
pub const EPS_DENOM: f32 = 1e-8;          // denominator guard for ratios
pub const MIN_EXTENT: f32 = 1e-6;         // substitute extent for degenerate bounds

// Fixed line segments per flattened curve. Deliberately not adaptive so
// identical input always yields bit-identical vertex sequences.
pub const CURVE_SEGMENTS: u32 = 16;

#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.max(0.0).min(1.0)
}
