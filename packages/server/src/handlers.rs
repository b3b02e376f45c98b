//! HTTP handler functions for the care map API.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use care_map_server_models::{ApiHealth, FacilitiesResponse};
use chrono::Utc;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/facilities`
///
/// Runs a full ingestion pass and returns the enriched facility list.
/// The response is marked non-cacheable so the map always sees the
/// latest published sheet. Failures surface as a generic 500 — which
/// row or provider call failed is only visible in the server log.
pub async fn facilities(state: web::Data<AppState>) -> HttpResponse {
    match state.pipeline.run().await {
        Ok(outcome) => {
            let count = outcome.facilities.len();
            HttpResponse::Ok()
                .insert_header((header::CACHE_CONTROL, "no-store"))
                .json(FacilitiesResponse {
                    facilities: outcome.facilities,
                    count,
                    last_updated: Utc::now(),
                })
        }
        Err(e) => {
            log::error!("Error fetching facilities: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to fetch facilities data"
            }))
        }
    }
}
