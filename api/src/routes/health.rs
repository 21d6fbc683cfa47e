use actix_web::HttpResponse;

use acct_shared::types::{ApiResponse, HealthResponse};

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(HealthResponse::healthy(env!("CARGO_PKG_VERSION"))))
}
