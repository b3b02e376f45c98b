#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding for care facility addresses.
//!
//! Resolves each facility's postal address to coordinates through the
//! Google Maps Geocoding API (configured via `services/google.toml`),
//! with three layers in front of the network:
//!
//! 1. **Cache** ([`cache::GeocodeCache`]) — process-wide memoization of
//!    address → coordinate lookups. Hits skip rate limiting entirely.
//! 2. **Rate gate** ([`rate_gate::RateGate`]) — a serialized minimum
//!    inter-call spacing shared by all live lookups.
//! 3. **Fallback** ([`fallback`]) — deterministic approximate city/ZIP
//!    coordinates when the provider fails or no API key is configured.
//!
//! [`Geocoder::resolve`] never fails outwardly: provider errors are
//! logged and converted to fallback coordinates, and the fallback is
//! cached so repeated failures for the same address don't re-attempt
//! the network call.

pub mod cache;
pub mod fallback;
pub mod google;
pub mod rate_gate;
pub mod service;

use std::time::Duration;

use care_map_facility_models::{EnrichedFacility, FacilityRecord, GeocodeResult};

use crate::cache::GeocodeCache;
use crate::rate_gate::RateGate;

/// Errors from geocoding operations.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// No API key is configured for the provider.
    #[error("Geocoding API key not configured")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success transport status.
    #[error("Geocoding request returned status {0}")]
    Status(reqwest::StatusCode),

    /// The provider reported a non-OK status or no results.
    #[error("Geocoding failed: {status}")]
    Provider {
        /// Provider-level status string (e.g., `"ZERO_RESULTS"`).
        status: String,
    },

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },
}

/// Trait for resolving an address string to `(latitude, longitude)`.
pub trait GeocodeProvider: Send + Sync {
    /// Geocodes a single full address string.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the lookup cannot produce
    /// authoritative coordinates for any reason (missing credentials,
    /// transport failure, provider-level failure, empty results).
    fn geocode(
        &self,
        address: &str,
    ) -> impl std::future::Future<Output = Result<(f64, f64), GeocodeError>> + Send;
}

/// Address resolver combining the cache, the rate gate, a provider, and
/// the fallback heuristic.
///
/// Construct one per process and share it; the cache and the rate gate
/// are only process-wide if the `Geocoder` itself is.
pub struct Geocoder<P: GeocodeProvider> {
    provider: P,
    cache: GeocodeCache,
    gate: RateGate,
}

impl<P: GeocodeProvider> Geocoder<P> {
    /// Creates a geocoder with an empty cache and the given minimum
    /// spacing between live provider calls.
    #[must_use]
    pub fn new(provider: P, min_call_spacing: Duration) -> Self {
        Self {
            provider,
            cache: GeocodeCache::new(),
            gate: RateGate::new(min_call_spacing),
        }
    }

    /// Resolves coordinates for a facility record. Never fails: provider
    /// errors fall back to approximate city/ZIP coordinates.
    ///
    /// Cache hits return immediately without touching the rate gate.
    /// Both live results and fallbacks are cached, so a failing address
    /// costs at most one provider attempt per process lifetime.
    pub async fn resolve(&self, record: FacilityRecord) -> EnrichedFacility {
        let address = record.full_address();

        if let Some(hit) = self.cache.get(&address) {
            return EnrichedFacility::new(record, hit);
        }

        self.gate.wait().await;

        let result = match self.provider.geocode(&address).await {
            Ok((latitude, longitude)) => GeocodeResult {
                latitude,
                longitude,
                geocoded: true,
            },
            Err(e) => {
                log::warn!("Geocoding failed for {} at {address}: {e}", record.name);
                let (latitude, longitude) =
                    fallback::fallback_coordinates(&record.city, &record.zip);
                GeocodeResult {
                    latitude,
                    longitude,
                    geocoded: false,
                }
            }
        };

        self.cache.insert(&address, result);
        EnrichedFacility::new(record, result)
    }

    /// The shared geocode cache.
    #[must_use]
    pub const fn cache(&self) -> &GeocodeCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProvider {
        calls: AtomicUsize,
    }

    impl GeocodeProvider for FixedProvider {
        async fn geocode(&self, _address: &str) -> Result<(f64, f64), GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((33.5000, -112.1000))
        }
    }

    struct FailingProvider {
        calls: AtomicUsize,
    }

    impl GeocodeProvider for FailingProvider {
        async fn geocode(&self, _address: &str) -> Result<(f64, f64), GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GeocodeError::MissingApiKey)
        }
    }

    fn record(name: &str, city: &str, zip: &str) -> FacilityRecord {
        FacilityRecord {
            id: "facility-1".to_owned(),
            name: name.to_owned(),
            address: "123 Oak St".to_owned(),
            city: city.to_owned(),
            zip: zip.to_owned(),
            ..FacilityRecord::default()
        }
    }

    #[tokio::test]
    async fn second_lookup_hits_cache_with_one_provider_call() {
        let geocoder = Geocoder::new(
            FixedProvider {
                calls: AtomicUsize::new(0),
            },
            Duration::from_millis(0),
        );

        let first = geocoder.resolve(record("A", "Phoenix", "85001")).await;
        let second = geocoder.resolve(record("A", "Phoenix", "85001")).await;

        assert!(first.geocoded);
        assert!(second.geocoded);
        assert!((first.latitude - second.latitude).abs() < f64::EPSILON);
        assert!((first.longitude - second.longitude).abs() < f64::EPSILON);
        assert_eq!(geocoder.provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_falls_back_near_city_base() {
        let geocoder = Geocoder::new(
            FailingProvider {
                calls: AtomicUsize::new(0),
            },
            Duration::from_millis(0),
        );

        let enriched = geocoder.resolve(record("A", "Phoenix", "85001")).await;

        assert!(!enriched.geocoded);
        // Within the small-offset neighborhood of Phoenix's base coordinate.
        assert!((enriched.latitude - 33.4484).abs() < 0.002);
        assert!((enriched.longitude - -112.0740).abs() < 0.002);
    }

    #[tokio::test]
    async fn failure_is_cached_and_not_retried() {
        let geocoder = Geocoder::new(
            FailingProvider {
                calls: AtomicUsize::new(0),
            },
            Duration::from_millis(0),
        );

        let first = geocoder.resolve(record("A", "Phoenix", "85001")).await;
        let second = geocoder.resolve(record("A", "Phoenix", "85001")).await;

        assert!(!first.geocoded);
        assert_eq!(first.latitude.to_bits(), second.latitude.to_bits());
        assert_eq!(geocoder.provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(geocoder.cache().len(), 1);
    }
}
