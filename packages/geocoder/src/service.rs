//! Compile-time embedded geocoding service configuration.
//!
//! The provider's endpoint and rate-limit interval live in
//! `services/google.toml`, embedded at compile time. The API key is the
//! one value that stays in the environment.

use serde::Deserialize;

/// A geocoding service configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingService {
    /// Unique identifier (e.g., `"google"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// API base URL.
    pub base_url: String,
    /// Minimum delay between live requests in milliseconds.
    pub rate_limit_ms: u64,
}

const SERVICE_TOML: &str = include_str!("../services/google.toml");

/// Returns the embedded geocoding service definition.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (a compile-time guarantee
/// in practice since the config ships with the crate).
#[must_use]
pub fn definition() -> GeocodingService {
    toml::de::from_str(SERVICE_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse geocoding service config: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_service_definition() {
        let service = definition();
        assert_eq!(service.id, "google");
        assert!(!service.name.is_empty());
        assert!(service.base_url.starts_with("https://"));
    }

    #[test]
    fn rate_limit_is_positive() {
        assert!(definition().rate_limit_ms > 0);
    }
}
