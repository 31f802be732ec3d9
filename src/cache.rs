use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ParseError;
use crate::geometry::{build, path};
use crate::model::GeometryEntry;

/// Memoizes parse + build output keyed by the raw path-data string.
///
/// Keys are compared by exact equality with no normalization, so two
/// regions sharing identical path text alias one entry. This is a
/// deliberate simplification for immutable input sets, not geometry
/// deduplication. Entries are append-only until `invalidate_all`.
#[derive(Default)]
pub struct GeometryCache {
    entries: Mutex<HashMap<String, Arc<GeometryEntry>>>,
}

impl GeometryCache {
    pub fn new() -> Self {
        GeometryCache::default()
    }

    /// Look up or build the geometry for one path-data string.
    ///
    /// A parse failure is cached as an empty-geometry sentinel and the
    /// error is returned exactly once, when the entry is first built;
    /// later lookups of the same key return the sentinel silently.
    pub fn get_or_build(&self, path_data: &str) -> (Arc<GeometryEntry>, Option<ParseError>) {
        if let Some(entry) = self.lock().get(path_data) {
            return (Arc::clone(entry), None);
        }
        // Built outside the lock; concurrent misses on the same key may
        // both compute, the first insert wins and the loser is discarded.
        let (built, err) = match path::parse(path_data) {
            Ok(commands) => {
                let polygon = build::build(&commands);
                let bounds = polygon.bounds();
                (GeometryEntry { polygon, bounds }, None)
            }
            Err(e) => (GeometryEntry::default(), Some(e)),
        };
        let mut map = self.lock();
        match map.entry(path_data.to_string()) {
            Entry::Occupied(existing) => (Arc::clone(existing.get()), None),
            Entry::Vacant(slot) => (Arc::clone(slot.insert(Arc::new(built))), err),
        }
    }

    /// Drop every entry. Called when the full input region set changes.
    pub fn invalidate_all(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<GeometryEntry>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
