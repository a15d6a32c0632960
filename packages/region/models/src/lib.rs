#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core region types for the geofence service.
//!
//! These types are the normalized internal representation shared by the
//! store, spatial index, and query service. API wire types live in
//! `geofence_server_models` so the HTTP contract can evolve separately.

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by region operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegionError {
    /// Malformed boundary or missing required field.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of what went wrong.
        message: String,
    },

    /// Creation attempted with an already-registered code.
    #[error("Region code already exists: {code}")]
    DuplicateCode {
        /// The conflicting code, in canonical uppercase.
        code: String,
    },

    /// No region registered under the given code.
    #[error("Region not found: {code}")]
    NotFound {
        /// The code that was looked up.
        code: String,
    },
}

impl RegionError {
    /// Shorthand for a [`RegionError::Validation`] with the given reason.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Which GeoJSON geometry type a region was created from.
///
/// A single-polygon boundary created as a `MultiPolygon` must round-trip
/// back out as a `MultiPolygon`, so the original type is remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryKind {
    /// GeoJSON `Polygon`.
    Polygon,
    /// GeoJSON `MultiPolygon`.
    MultiPolygon,
}

/// Axis-aligned bounding box in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Whether the point lies within the box, edges included.
    ///
    /// Edges are inclusive so that a point exactly on a region's bounding
    /// box can never be rejected before the exact containment test runs.
    #[must_use]
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        lng >= self.west && lng <= self.east && lat >= self.south && lat <= self.north
    }
}

/// A named, coded geographic area with a polygonal boundary.
///
/// Immutable once created. The bounding box is computed at creation time
/// and cached for fast rejection during location checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Unique identifier, canonical uppercase (e.g. "IL").
    pub code: String,
    /// Human-readable label. Not unique.
    pub name: String,
    /// Boundary polygons; each has an exterior ring plus optional holes.
    pub boundary: MultiPolygon<f64>,
    /// GeoJSON geometry type the boundary was created from.
    pub kind: BoundaryKind,
    /// Cached bounding box over all boundary polygons.
    pub bbox: BoundingBox,
}

/// Canonicalizes a region code: trimmed and uppercased.
///
/// All code comparisons in the store and index go through this, which is
/// what makes code uniqueness and lookup case-insensitive.
#[must_use]
pub fn canonical_code(code: &str) -> String {
    code.trim().to_uppercase()
}
