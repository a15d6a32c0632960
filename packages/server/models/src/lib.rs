#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the geofence server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the internal region types so the API contract can
//! evolve independently of the stored representation. `geoJson` fields
//! deserialize through the `geojson` crate, so structurally invalid
//! geometry is rejected before a handler runs.

use geofence_region_models::Region;
use serde::{Deserialize, Serialize};

/// A region as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    /// Human-readable label.
    pub name: String,
    /// Unique region code (canonical uppercase).
    pub code: String,
    /// Boundary as a GeoJSON `Polygon` or `MultiPolygon`,
    /// coordinates in `[lng, lat]` order.
    pub geo_json: geojson::Geometry,
}

impl From<&Region> for ApiRegion {
    fn from(region: &Region) -> Self {
        Self {
            name: region.name.clone(),
            code: region.code.clone(),
            geo_json: geofence_geometry::boundary_to_geojson(&region.boundary, region.kind),
        }
    }
}

/// Body of `POST /countries/create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionRequest {
    /// Human-readable label.
    pub name: String,
    /// Desired region code.
    pub code: String,
    /// Boundary as a GeoJSON `Polygon` or `MultiPolygon`.
    pub geo_json: geojson::Geometry,
}

/// Body of `POST /countries/check-location`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckLocationRequest {
    /// Latitude of the query point.
    pub lat: f64,
    /// Longitude of the query point.
    pub lng: f64,
    /// Target region code, case-insensitive.
    pub code: String,
}

/// Response of `POST /countries/check-location`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckLocationResponse {
    /// Whether the point lies inside the region's boundary.
    pub inside: bool,
}

/// Query parameters for `GET /countries/locate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateQueryParams {
    /// Latitude of the query point.
    pub lat: f64,
    /// Longitude of the query point.
    pub lng: f64,
}

/// Error body for 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable reason.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
