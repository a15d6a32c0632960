//! HTTP handler functions for the geofence API.

use actix_web::{HttpResponse, web};
use geofence_region_models::RegionError;
use geofence_server_models::{
    ApiError, ApiHealth, ApiRegion, CheckLocationRequest, CheckLocationResponse,
    CreateRegionRequest, LocateQueryParams,
};
use geofence_service::QueryService;

/// `GET /health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /countries`
///
/// Returns all registered regions in creation order.
pub async fn list_countries(service: web::Data<QueryService>) -> HttpResponse {
    let regions = service.list_regions();
    let api_regions: Vec<ApiRegion> = regions.iter().map(ApiRegion::from).collect();
    HttpResponse::Ok().json(api_regions)
}

/// `POST /countries/create`
///
/// Registers a new region from a GeoJSON `Polygon` or `MultiPolygon`.
pub async fn create_country(
    service: web::Data<QueryService>,
    body: web::Json<CreateRegionRequest>,
) -> HttpResponse {
    match service.create_region(&body.name, &body.code, &body.geo_json) {
        Ok(region) => HttpResponse::Created().json(ApiRegion::from(&region)),
        Err(e) => error_response(&e),
    }
}

/// `POST /countries/check-location`
///
/// Tests whether a point lies inside the named region.
pub async fn check_location(
    service: web::Data<QueryService>,
    body: web::Json<CheckLocationRequest>,
) -> HttpResponse {
    match service.check_location(body.lat, body.lng, &body.code) {
        Ok(inside) => HttpResponse::Ok().json(CheckLocationResponse { inside }),
        Err(e) => error_response(&e),
    }
}

/// `GET /countries/locate?lat=..&lng=..`
///
/// Returns every region containing the point.
pub async fn locate(
    service: web::Data<QueryService>,
    params: web::Query<LocateQueryParams>,
) -> HttpResponse {
    let regions = service.locate(params.lat, params.lng);
    let api_regions: Vec<ApiRegion> = regions.iter().map(ApiRegion::from).collect();
    HttpResponse::Ok().json(api_regions)
}

/// Maps the error taxonomy onto HTTP statuses: validation failures are
/// 400, duplicate codes 409 (so callers can branch on them), unknown
/// codes 404.
fn error_response(error: &RegionError) -> HttpResponse {
    log::warn!("Request failed: {error}");

    let body = ApiError {
        error: error.to_string(),
    };
    match error {
        RegionError::Validation { .. } => HttpResponse::BadRequest().json(body),
        RegionError::DuplicateCode { .. } => HttpResponse::Conflict().json(body),
        RegionError::NotFound { .. } => HttpResponse::NotFound().json(body),
    }
}
