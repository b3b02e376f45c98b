#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Facility ingestion pipeline: fetch → parse → geocode → respond.
//!
//! Runs fresh on every request — facility data is never persisted; only
//! the geocode cache inside the shared [`Geocoder`] survives between
//! runs. A fetch failure fails the whole run (no partial results);
//! malformed rows are dropped silently during parsing; geocoding
//! failures degrade per-record to fallback coordinates and never fail
//! the run.

use care_map_facility_models::EnrichedFacility;
use care_map_geocoder::{GeocodeProvider, Geocoder};
use care_map_sheet::parse::{ParseStats, parse_facilities};
use care_map_sheet::{SheetError, SheetSource};

/// Errors that fail an entire ingestion run.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The spreadsheet export could not be fetched.
    #[error("Sheet fetch failed: {0}")]
    Sheet(#[from] SheetError),
}

/// Result of one ingestion run.
#[derive(Debug)]
pub struct IngestOutcome {
    /// Enriched facilities in source row order.
    pub facilities: Vec<EnrichedFacility>,
    /// Row-drop diagnostics from the parse phase.
    pub stats: ParseStats,
}

/// Orchestrates one fetch → parse → geocode sequence per call.
///
/// Geocoding is strictly sequential in source order: all live lookups
/// share one rate gate, so worst-case latency is roughly
/// (uncached facilities) × (rate-limit interval) plus network time.
pub struct IngestPipeline<S: SheetSource, P: GeocodeProvider> {
    source: S,
    geocoder: Geocoder<P>,
}

impl<S: SheetSource, P: GeocodeProvider> IngestPipeline<S, P> {
    /// Creates a pipeline over a sheet source and a shared geocoder.
    #[must_use]
    pub const fn new(source: S, geocoder: Geocoder<P>) -> Self {
        Self { source, geocoder }
    }

    /// Runs one full ingestion pass.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] if the sheet fetch fails; geocoding
    /// failures never propagate.
    pub async fn run(&self) -> Result<IngestOutcome, IngestError> {
        let csv_text = self.source.fetch_csv().await?;

        let (records, stats) = parse_facilities(&csv_text);
        if stats.dropped() > 0 {
            log::debug!(
                "Dropped {} rows during parse ({} blank, {} short, {} unnamed)",
                stats.dropped(),
                stats.dropped_blank,
                stats.dropped_short,
                stats.dropped_unnamed
            );
        }

        // Sequential by design: the rate gate serializes live lookups.
        let mut facilities = Vec::with_capacity(records.len());
        for record in records {
            facilities.push(self.geocoder.resolve(record).await);
        }

        let live = facilities.iter().filter(|f| f.geocoded).count();
        log::info!(
            "Ingested {} facilities ({live} geocoded, {} fallback)",
            facilities.len(),
            facilities.len() - live
        );

        Ok(IngestOutcome { facilities, stats })
    }

    /// The shared geocoder (and with it the process-wide cache).
    #[must_use]
    pub const fn geocoder(&self) -> &Geocoder<P> {
        &self.geocoder
    }
}
