#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API response types for the care map server.
//!
//! These types are serialized to JSON for the REST API. Facility fields
//! stay snake_case (the sheet's column names, which the map consumer
//! expects); the response envelopes use camelCase keys.

use care_map_facility_models::EnrichedFacility;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response body of `GET /api/facilities`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitiesResponse {
    /// Enriched facilities in source row order.
    pub facilities: Vec<EnrichedFacility>,
    /// Number of facilities in the list.
    pub count: usize,
    /// When this response was assembled (ISO 8601).
    pub last_updated: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_keys_are_camel_case() {
        let response = FacilitiesResponse {
            facilities: Vec::new(),
            count: 0,
            last_updated: Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("last_updated").is_none());
        assert_eq!(json["count"], 0);
    }
}
