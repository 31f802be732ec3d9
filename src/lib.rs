//! Region-map geometry engine.
//!
//! Turns a vector map description (named region outlines encoded as path
//! commands) into a renderable polygon set fitted to a viewport and a
//! hit-testable index resolving a pointer coordinate to the enclosing
//! region. Fetching the raw document bytes, rendering pixels and deciding
//! when to reload are the caller's concerns; this crate only turns path
//! text into geometry and answers geometric queries against it.

pub mod model;
pub mod error;
pub mod geometry {
    pub mod build;
    pub mod limits;
    pub mod math;
    pub mod path;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod hit;
    pub mod viewport;
}
mod cache;
mod document;

use std::collections::HashMap;
use std::sync::Arc;

pub use cache::GeometryCache;
pub use error::{DocumentError, ParseError};
pub use model::{BoundingBox, Diagnostic, GeometryEntry, Polygon, Region, Transform, Vec2};

/// Extract the region records from a raw document. `names` is the
/// externally supplied id-to-display-name table; ids it does not know get
/// a fallback label embedding the raw id.
pub fn parse_regions(
    bytes: &[u8],
    names: &HashMap<u32, String>,
) -> Result<Vec<Region>, DocumentError> {
    document::parse_regions_impl(bytes, names)
}

pub(crate) struct IndexedRegion {
    pub(crate) region: Region,
    pub(crate) entry: Arc<GeometryEntry>,
}

/// Ordered collection of named regions with their cached geometry.
///
/// Owns the geometry cache; insertion order is render order. The index is
/// rebuilt wholesale on new input (build-then-swap) rather than patched in
/// place, so readers never observe a half-replaced region set.
#[derive(Default)]
pub struct RegionIndex {
    pub(crate) entries: Vec<IndexedRegion>,
    cache: GeometryCache,
    combined_bounds: BoundingBox,
    diagnostics: Vec<Diagnostic>,
    padding: f32,
}

impl RegionIndex {
    pub fn new() -> Self {
        RegionIndex::default()
    }

    pub fn from_regions(regions: Vec<Region>) -> Self {
        let mut index = RegionIndex::new();
        index.rebuild(regions);
        index
    }

    /// Fraction of each viewport dimension kept free on every side when
    /// computing the fit transform.
    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    /// Replace the whole region set. The cache is invalidated and every
    /// region is re-parsed; a malformed region degrades to empty geometry
    /// with a diagnostic recorded instead of aborting the rest.
    pub fn rebuild(&mut self, regions: Vec<Region>) {
        self.cache.invalidate_all();
        let mut entries = Vec::with_capacity(regions.len());
        let mut diagnostics = Vec::new();
        let mut combined = BoundingBox::EMPTY;
        for region in regions {
            let (entry, parse_err) = self.cache.get_or_build(&region.path_data);
            if let Some(err) = parse_err {
                diagnostics.push(Diagnostic::ParseFailure {
                    id: region.id,
                    message: err.to_string(),
                });
            } else if entry.polygon.is_empty() {
                diagnostics.push(Diagnostic::EmptyGeometry { id: region.id });
            }
            combined = combined.union(&entry.bounds);
            entries.push(IndexedRegion { region, entry });
        }
        // Swap everything at once.
        self.entries = entries;
        self.combined_bounds = combined;
        self.diagnostics = diagnostics;
    }

    /// Regions with their flattened outlines, in render order.
    pub fn regions(&self) -> impl Iterator<Item = (&Region, &Polygon)> {
        self.entries.iter().map(|e| (&e.region, &e.entry.polygon))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union of the bounds of every region with valid geometry.
    pub fn bounds(&self) -> BoundingBox {
        self.combined_bounds
    }

    /// Per-region processing notices recorded during the last rebuild.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The transform that fits the aggregated geometry into the viewport.
    pub fn current_transform(&self, viewport_w: f32, viewport_h: f32) -> Transform {
        algorithms::viewport::fit_transform(
            std::slice::from_ref(&self.combined_bounds),
            viewport_w,
            viewport_h,
            self.padding,
        )
    }

    /// Resolve a viewport-space pointer coordinate to the enclosing
    /// region, if any. The point is mapped back into source space with
    /// the inverse of the current fit transform before testing.
    pub fn hit_test(&self, screen: Vec2, viewport_w: f32, viewport_h: f32) -> Option<&Region> {
        let transform = self.current_transform(viewport_w, viewport_h);
        let p = transform.invert(screen);
        let id = algorithms::hit::locate_impl(self, p.x, p.y)?;
        self.entries
            .iter()
            .find(|e| e.region.id == id)
            .map(|e| &e.region)
    }

    /// Hit test directly in source coordinate space.
    pub fn locate(&self, point: Vec2) -> Option<u32> {
        algorithms::hit::locate_impl(self, point.x, point.y)
    }
}
