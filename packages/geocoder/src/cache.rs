//! In-memory geocoding result cache.
//!
//! Caches both successful geocodes and fallback results so the same
//! address is never sent to the provider twice within a process's
//! uptime. Keyed by the full normalized address string. Unbounded, no
//! eviction, no persistence — the sheet has at most a few hundred rows.
//!
//! Concurrent lookups for the same address may race to populate an
//! entry; last writer wins, which is harmless since results for a given
//! address are interchangeable.

use std::collections::BTreeMap;
use std::sync::RwLock;

use care_map_facility_models::GeocodeResult;

/// Process-wide memoization of address → coordinate lookups.
#[derive(Debug, Default)]
pub struct GeocodeCache {
    entries: RwLock<BTreeMap<String, GeocodeResult>>,
}

impl GeocodeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached result for the given full address.
    ///
    /// # Panics
    ///
    /// Panics if the cache lock is poisoned.
    #[must_use]
    pub fn get(&self, address: &str) -> Option<GeocodeResult> {
        self.entries
            .read()
            .expect("geocode cache lock poisoned")
            .get(address)
            .copied()
    }

    /// Stores a result for the given full address, replacing any
    /// existing entry.
    ///
    /// # Panics
    ///
    /// Panics if the cache lock is poisoned.
    pub fn insert(&self, address: &str, result: GeocodeResult) {
        self.entries
            .write()
            .expect("geocode cache lock poisoned")
            .insert(address.to_owned(), result);
    }

    /// Number of cached addresses.
    ///
    /// # Panics
    ///
    /// Panics if the cache lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("geocode cache lock poisoned")
            .len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT: GeocodeResult = GeocodeResult {
        latitude: 33.4484,
        longitude: -112.0740,
        geocoded: true,
    };

    #[test]
    fn misses_on_empty_cache() {
        let cache = GeocodeCache::new();
        assert!(cache.get("123 Oak St, Phoenix, AZ 85001").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn returns_inserted_result() {
        let cache = GeocodeCache::new();
        cache.insert("123 Oak St, Phoenix, AZ 85001", RESULT);

        let hit = cache.get("123 Oak St, Phoenix, AZ 85001").unwrap();
        assert!(hit.geocoded);
        assert!((hit.latitude - 33.4484).abs() < f64::EPSILON);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn last_writer_wins() {
        let cache = GeocodeCache::new();
        cache.insert("key", RESULT);
        cache.insert(
            "key",
            GeocodeResult {
                latitude: 1.0,
                longitude: 2.0,
                geocoded: false,
            },
        );

        let hit = cache.get("key").unwrap();
        assert!(!hit.geocoded);
        assert_eq!(cache.len(), 1);
    }
}
