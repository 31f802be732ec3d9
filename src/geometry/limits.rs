// Centralized ingestion limits to harden against untrusted input (XML/path data)

pub const MAX_DOCUMENT_BYTES: usize = 8 * 1024 * 1024;
pub const MAX_PATH_DATA_BYTES: usize = 1024 * 1024;
pub const MAX_COMMANDS: usize = 100_000;
pub const MAX_SUBPATHS: usize = 10_000;
pub const MAX_POLYGON_POINTS: usize = 2_000_000;

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool {
    x.is_finite() && x >= COORD_MIN && x <= COORD_MAX
}
