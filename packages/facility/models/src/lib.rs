#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Data types for senior-care facility records.
//!
//! A [`FacilityRecord`] is one row of the published facilities spreadsheet,
//! carried as free-text strings exactly as sourced (no type coercion at
//! parse time). An [`EnrichedFacility`] is a record plus the coordinates
//! resolved for it, tagged with whether they came from an authoritative
//! geocode or the city/ZIP fallback heuristic.

use serde::{Deserialize, Serialize};

/// One row of the facilities spreadsheet.
///
/// Every field except `id` is sourced verbatim from the sheet; absent or
/// short rows default missing cells to the empty string. A record only
/// exists if its `name` is non-empty after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Synthesized id, `"facility-" + <1-based source line index>`.
    ///
    /// Positional — not stable across fetches if upstream rows are added
    /// or removed.
    pub id: String,
    /// Facility name (the one required field).
    pub name: String,
    /// Who added the row to the sheet.
    pub added_by: String,
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// ZIP code.
    pub zip: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact person at the facility.
    pub contact_person: String,
    /// Facility type (e.g., "Memory Care", "Assisted Living").
    pub facility_type: String,
    /// Number of available beds, as entered in the sheet.
    pub available_beds: String,
    /// Minimum monthly price, as entered in the sheet.
    pub price_min: String,
    /// Maximum monthly price, as entered in the sheet.
    pub price_max: String,
    /// ALTCS acceptance status (carried opaquely, e.g. "Yes"/"No"/"Pending").
    pub altcs_accepted: String,
    /// Special services offered.
    pub special_services: String,
    /// Free-form notes.
    pub notes: String,
    /// Date the row was added.
    pub date_added: String,
}

impl FacilityRecord {
    /// Builds the normalized full address string used as the geocode
    /// cache key: `"<address>, <city>, AZ <zip>"`, trimmed.
    #[must_use]
    pub fn full_address(&self) -> String {
        format!("{}, {}, AZ {}", self.address, self.city, self.zip)
            .trim()
            .to_owned()
    }
}

/// Result of a coordinate lookup for one address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// `true` if an authoritative provider lookup succeeded, `false` if
    /// the city/ZIP fallback heuristic was used.
    pub geocoded: bool,
}

/// A facility record enriched with resolved coordinates.
///
/// Serializes flat: the record's fields plus `latitude`, `longitude`,
/// and `geocoded` at the top level, matching the map consumer's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedFacility {
    /// The source record.
    #[serde(flatten)]
    pub record: FacilityRecord,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Whether the coordinates came from a live geocode.
    pub geocoded: bool,
}

impl EnrichedFacility {
    /// Combines a record with the coordinates resolved for it.
    #[must_use]
    pub fn new(record: FacilityRecord, result: GeocodeResult) -> Self {
        Self {
            record,
            latitude: result.latitude,
            longitude: result.longitude,
            geocoded: result.geocoded,
        }
    }
}
