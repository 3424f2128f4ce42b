use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::rank_by_distance;
use crate::error::ApiError;
use crate::models::{AddSchoolRequest, AddSchoolResponse, ListSchoolsQuery, ListSchoolsResponse};
use crate::services::SchoolStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SchoolStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }
}

/// Configure all school routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/addSchool", web::post().to(add_school))
        .route("/listSchools", web::get().to(list_schools));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("School API is running 🚀")
}

/// Add school endpoint
///
/// POST /addSchool
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "address": "string",
///   "latitude": 12.97,
///   "longitude": "77.59"
/// }
/// ```
async fn add_school(
    state: web::Data<AppState>,
    req: web::Json<AddSchoolRequest>,
) -> Result<HttpResponse, ApiError> {
    let school = req.into_inner().into_new_school().map_err(|e| {
        tracing::info!("Rejected addSchool request: {}", e);
        ApiError::from(e)
    })?;

    let school_id = state
        .store
        .insert_school(&school)
        .await
        .map_err(|e| ApiError::storage("Database error while adding school", e))?;

    tracing::info!("Added school {} ({})", school_id, school.name());

    Ok(HttpResponse::Created().json(AddSchoolResponse {
        success: true,
        message: "School added successfully".to_string(),
        school_id,
    }))
}

/// List schools endpoint
///
/// GET /listSchools?lat={lat}&lng={lng}
///
/// Returns every school, nearest to the given point first.
async fn list_schools(
    state: web::Data<AppState>,
    query: web::Query<ListSchoolsQuery>,
) -> Result<HttpResponse, ApiError> {
    let origin = query.origin().map_err(|e| {
        tracing::info!("Rejected listSchools request: {}", e);
        ApiError::from(e)
    })?;

    let schools = state
        .store
        .list_schools()
        .await
        .map_err(|e| ApiError::storage("Database error while listing schools", e))?;

    let ranked = rank_by_distance(origin, schools);

    tracing::debug!(
        "Ranked {} schools from ({}, {})",
        ranked.len(),
        origin.latitude,
        origin.longitude
    );

    Ok(HttpResponse::Ok().json(ListSchoolsResponse::new(ranked)))
}
