#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the care map facility locator.
//!
//! Serves the facility data consumed by the map frontend: every
//! `GET /api/facilities` request runs a fresh fetch → parse → geocode
//! pass over the published sheet. The pipeline is constructed once at
//! startup and shared across requests, making the geocode cache and the
//! provider rate gate process-wide.

mod handlers;

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use care_map_geocoder::google::{API_KEY_ENV, GoogleMapsProvider};
use care_map_geocoder::{Geocoder, service};
use care_map_ingest::IngestPipeline;
use care_map_sheet::export::CsvExportSource;

/// The production pipeline: live sheet export + Google Maps geocoding.
pub type ProductionPipeline = IngestPipeline<CsvExportSource, GoogleMapsProvider>;

/// Shared application state.
pub struct AppState {
    /// Ingestion pipeline shared across requests.
    pub pipeline: Arc<ProductionPipeline>,
}

/// Starts the care map API server.
///
/// Builds the pipeline from the embedded geocoding service config and
/// the environment (`GOOGLE_MAPS_API_KEY`, `SHEET_CSV_URL`, `BIND_ADDR`,
/// `PORT`), then starts the Actix-Web HTTP server. This is a regular
/// async function — the caller provides the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let service = service::definition();
    log::info!(
        "Geocoding via {} (min {}ms between calls)",
        service.name,
        service.rate_limit_ms
    );

    let provider = GoogleMapsProvider::from_env();
    if !provider.has_api_key() {
        log::warn!("{API_KEY_ENV} not set; all lookups will use fallback coordinates");
    }

    let source = CsvExportSource::from_env();
    log::info!("Facilities sheet: {}", source.url());

    let geocoder = Geocoder::new(provider, Duration::from_millis(service.rate_limit_ms));
    let pipeline = Arc::new(IngestPipeline::new(source, geocoder));

    let state = web::Data::new(AppState { pipeline });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/facilities", web::get().to(handlers::facilities)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
