//! Google Maps Geocoding API client.
//!
//! A successful lookup requires a 2xx transport response **and** a
//! provider-level `"OK"` status with at least one result; anything else
//! is an error the caller converts to fallback coordinates. The caller
//! is responsible for rate limiting (see `rate_limit_ms` in the service
//! TOML configuration).
//!
//! See <https://developers.google.com/maps/documentation/geocoding>

use crate::{GeocodeError, GeocodeProvider};

/// Environment variable holding the Google Maps API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// [`GeocodeProvider`] backed by the Google Maps Geocoding API.
///
/// An absent API key is not a construction error: every lookup then
/// fails with [`GeocodeError::MissingApiKey`] (without a network call)
/// and the resolver falls back to approximate coordinates.
#[derive(Debug, Clone)]
pub struct GoogleMapsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleMapsProvider {
    /// Creates a provider for the given endpoint and optional API key.
    #[must_use]
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_owned(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Creates a provider from the embedded service configuration and
    /// the `GOOGLE_MAPS_API_KEY` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        let service = crate::service::definition();
        Self::new(&service.base_url, std::env::var(API_KEY_ENV).ok())
    }

    /// Whether an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl GeocodeProvider for GoogleMapsProvider {
    async fn geocode(&self, address: &str) -> Result<(f64, f64), GeocodeError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(GeocodeError::MissingApiKey);
        };

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("address", address), ("key", key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status));
        }

        let body: serde_json::Value = response.json().await?;
        parse_response(&body)
    }
}

/// Parses a Google Geocoding API JSON response body.
fn parse_response(body: &serde_json::Value) -> Result<(f64, f64), GeocodeError> {
    let status = body["status"].as_str().unwrap_or("UNKNOWN");
    if status != "OK" {
        return Err(GeocodeError::Provider {
            status: status.to_owned(),
        });
    }

    let Some(first) = body["results"].as_array().and_then(|r| r.first()) else {
        return Err(GeocodeError::Provider {
            status: "OK with no results".to_owned(),
        });
    };

    let location = &first["geometry"]["location"];

    let lat = location["lat"].as_f64().ok_or_else(|| GeocodeError::Parse {
        message: "Missing lat in geocoding response".to_owned(),
    })?;

    let lng = location["lng"].as_f64().ok_or_else(|| GeocodeError::Parse {
        message: "Missing lng in geocoding response".to_owned(),
    })?;

    Ok((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ok_result() {
        let body = serde_json::json!({
            "status": "OK",
            "results": [{
                "geometry": { "location": { "lat": 33.4484, "lng": -112.0740 } }
            }]
        });
        let (lat, lng) = parse_response(&body).unwrap();
        assert!((lat - 33.4484).abs() < 1e-4);
        assert!((lng - -112.0740).abs() < 1e-4);
    }

    #[test]
    fn rejects_non_ok_status() {
        let body = serde_json::json!({
            "status": "REQUEST_DENIED",
            "results": []
        });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Provider { status }) if status == "REQUEST_DENIED"
        ));
    }

    #[test]
    fn rejects_ok_with_empty_results() {
        let body = serde_json::json!({ "status": "OK", "results": [] });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Provider { .. })
        ));
    }

    #[test]
    fn rejects_missing_geometry() {
        let body = serde_json::json!({
            "status": "OK",
            "results": [{ "formatted_address": "somewhere" }]
        });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let provider = GoogleMapsProvider::new("http://localhost:1", None);
        assert!(!provider.has_api_key());
        assert!(matches!(
            provider.geocode("123 Oak St, Phoenix, AZ 85001").await,
            Err(GeocodeError::MissingApiKey)
        ));
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let provider = GoogleMapsProvider::new("http://localhost:1", Some(String::new()));
        assert!(!provider.has_api_key());
    }
}
