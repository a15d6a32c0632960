#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory geometry store.
//!
//! Owns all registered regions, in insertion order, and enforces the
//! case-insensitive code uniqueness invariant. Regions are immutable
//! once created; the store only grows. The store itself is not
//! synchronized: `geofence_service` wraps it (together with the spatial
//! index) in a single lock.

use std::collections::BTreeMap;

use geo::MultiPolygon;
use geofence_region_models::{BoundaryKind, Region, RegionError, canonical_code};

/// Ordered collection of regions with code-keyed lookup.
#[derive(Debug, Default)]
pub struct GeometryStore {
    /// Insertion order, which `list` exposes as the stable API order.
    regions: Vec<Region>,
    /// canonical code -> position in `regions`.
    by_code: BTreeMap<String, usize>,
}

impl GeometryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a new region, returning a reference to it.
    ///
    /// The boundary must already be structurally validated (see
    /// `geofence_geometry::parse_boundary`); this checks the fields the
    /// store is responsible for: non-blank name and code, and code
    /// uniqueness under case-insensitive comparison.
    ///
    /// # Errors
    ///
    /// * [`RegionError::Validation`] if `name` or `code` is blank.
    /// * [`RegionError::DuplicateCode`] if the code is already taken.
    pub fn create(
        &mut self,
        name: &str,
        code: &str,
        boundary: MultiPolygon<f64>,
        kind: BoundaryKind,
    ) -> Result<&Region, RegionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegionError::validation("name must not be empty"));
        }

        let code = canonical_code(code);
        if code.is_empty() {
            return Err(RegionError::validation("code must not be empty"));
        }
        if self.by_code.contains_key(&code) {
            return Err(RegionError::DuplicateCode { code });
        }

        let bbox = geofence_geometry::bounding_box(&boundary);
        let region = Region {
            code: code.clone(),
            name: name.to_string(),
            boundary,
            kind,
            bbox,
        };

        let index = self.regions.len();
        self.by_code.insert(code, index);
        self.regions.push(region);

        let region = &self.regions[index];
        log::info!(
            "Stored region {} ({} polygons)",
            region.code,
            region.boundary.0.len()
        );
        Ok(region)
    }

    /// Looks up a region by code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NotFound`] for unknown codes.
    pub fn get(&self, code: &str) -> Result<&Region, RegionError> {
        let code = canonical_code(code);
        self.by_code
            .get(&code)
            .map(|&index| &self.regions[index])
            .ok_or(RegionError::NotFound { code })
    }

    /// All regions, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Region] {
        &self.regions
    }

    /// Number of stored regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the store holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
