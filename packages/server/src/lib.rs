#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the geofence region lookup service.
//!
//! Exposes the region management and location check endpoints consumed
//! by the admin frontend. All state lives in the shared
//! [`geofence_service::QueryService`]; handlers only translate between
//! the wire types and service calls.

pub mod handlers;

use actix_web::web;

/// Registers all API routes.
///
/// Split out from `main` so tests can mount the same routes on an
/// in-process test service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/countries", web::get().to(handlers::list_countries))
        .route("/countries/create", web::post().to(handlers::create_country))
        .route(
            "/countries/check-location",
            web::post().to(handlers::check_location),
        )
        .route("/countries/locate", web::get().to(handlers::locate));
}
