pub mod artworks;
pub mod orders;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Fallback inside the `/api` scope: the root matched but no endpoint did.
pub async fn endpoint_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Endpoint not found" }))
}

/// Fallback outside the `/api` scope.
pub async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "API not found" }))
}

/// Absent or unparseable JSON bodies become a 400 JSON error instead of
/// actix's default text/plain response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": "Invalid JSON data" })),
        )
        .into()
    })
}
