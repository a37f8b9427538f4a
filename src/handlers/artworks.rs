use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::artwork_service::ArtworkService;
use crate::domain::artwork::ArtworkView;
use crate::errors::AppError;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtworkResponse {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub description: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "2500.00"
    pub price: String,
    pub status: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub artist_name: String,
    pub artist_birth_year: Option<i32>,
    pub artist_origin: Option<String>,
    pub artist_specialty: Option<String>,
}

impl From<ArtworkView> for ArtworkResponse {
    fn from(view: ArtworkView) -> Self {
        ArtworkResponse {
            id: view.id,
            title: view.title,
            artist_id: view.artist_id,
            description: view.description,
            price: view.price.to_string(),
            status: view.status.to_string(),
            image_url: view.image_url,
            created_at: view.created_at.to_rfc3339(),
            artist_name: view.artist_name,
            artist_birth_year: view.artist_birth_year,
            artist_origin: view.artist_origin,
            artist_specialty: view.artist_specialty,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtworkListResponse {
    pub success: bool,
    pub data: Vec<ArtworkResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtworkDetailResponse {
    pub success: bool,
    pub data: ArtworkResponse,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/artworks
///
/// Lists every artwork still available for purchase, with its artist fields
/// joined in.
#[utoipa::path(
    get,
    path = "/api/artworks",
    responses(
        (status = 200, description = "Available artworks", body = ArtworkListResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "artworks"
)]
pub async fn list_artworks(service: web::Data<ArtworkService>) -> Result<HttpResponse, AppError> {
    let service = service.into_inner();

    let artworks = web::block(move || service.list_available())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let data = artworks.into_iter().map(ArtworkResponse::from).collect();
    Ok(HttpResponse::Ok().json(ArtworkListResponse {
        success: true,
        data,
    }))
}

/// GET /api/artworks/{id}
///
/// Resolves one artwork whatever its status, so a reserved or sold piece's
/// detail page keeps working.
#[utoipa::path(
    get,
    path = "/api/artworks/{id}",
    params(
        ("id" = String, Path, description = "Artwork id (positive integer)"),
    ),
    responses(
        (status = 200, description = "Artwork found", body = ArtworkDetailResponse),
        (status = 400, description = "Invalid artwork id"),
        (status = 404, description = "Artwork not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "artworks"
)]
pub async fn get_artwork(
    service: web::Data<ArtworkService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let service = service.into_inner();

    let artwork = web::block(move || service.get_by_id(&raw_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ArtworkDetailResponse {
        success: true,
        data: artwork.into(),
    }))
}
