//! Fetcher for the published Google Sheets CSV export.
//!
//! The export is an unauthenticated HTTPS GET. Requests carry a
//! `Cache-Control: no-cache` header so the latest published version is
//! always retrieved rather than an intermediary-cached copy.

use crate::{SheetError, SheetSource};

/// Default CSV export URL for the published facilities sheet.
pub const DEFAULT_SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/1rdW8JWG734RdaZ3NHqin9E4Tdzin-52KuEriQYpM0IY/export?format=csv&gid=0";

/// Environment variable overriding the sheet export URL.
pub const SHEET_CSV_URL_ENV: &str = "SHEET_CSV_URL";

/// [`SheetSource`] that downloads the sheet's CSV export over HTTPS.
#[derive(Debug, Clone)]
pub struct CsvExportSource {
    url: String,
    client: reqwest::Client,
}

impl CsvExportSource {
    /// Creates a source for the given export URL.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a source from the `SHEET_CSV_URL` environment variable,
    /// falling back to [`DEFAULT_SHEET_CSV_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let url =
            std::env::var(SHEET_CSV_URL_ENV).unwrap_or_else(|_| DEFAULT_SHEET_CSV_URL.to_owned());
        Self::new(&url)
    }

    /// The export URL this source fetches.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SheetSource for CsvExportSource {
    async fn fetch_csv(&self) -> Result<String, SheetError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status(status));
        }

        let text = response.text().await?;
        log::debug!("Downloaded {} bytes from {}", text.len(), self.url);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_published_export_url() {
        let source = CsvExportSource::new(DEFAULT_SHEET_CSV_URL);
        assert_eq!(source.url(), DEFAULT_SHEET_CSV_URL);
        assert!(source.url().contains("format=csv"));
    }
}
