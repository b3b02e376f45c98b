#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fetching and parsing of the facilities spreadsheet CSV export.
//!
//! The sheet is published as an unauthenticated CSV export with a fixed
//! positional schema (15 columns). Parsing is best-effort: blank lines,
//! short rows, and rows without a facility name are silently dropped
//! (counted in [`parse::ParseStats`] for diagnostics). The [`SheetSource`]
//! trait abstracts the fetch so the ingest pipeline can be tested against
//! canned CSV text.

pub mod export;
pub mod parse;

/// Errors from fetching the spreadsheet export.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// The HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The export endpoint returned a non-success status.
    #[error("Sheet export returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Trait for fetching the raw CSV text of the facilities sheet.
pub trait SheetSource: Send + Sync {
    /// Fetches the full CSV document, always bypassing intermediary
    /// caches so the latest published version is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError`] if the HTTP request fails or the endpoint
    /// responds with a non-success status.
    fn fetch_csv(&self) -> impl std::future::Future<Output = Result<String, SheetError>> + Send;
}
