#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Query service over the geometry store and spatial index.
//!
//! All access to the shared region state goes through this service.
//! Store and index live behind one `RwLock`: reads (`list_regions`,
//! `check_location`, `locate`) run in parallel, while `create_region`
//! holds the write lock across the uniqueness check, store insert, and
//! index insert so two concurrent creations of the same code cannot
//! both succeed. No lock is held across await points; every operation
//! here is synchronous and short.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use geofence_geometry::{boundary_contains, parse_boundary};
use geofence_region_models::{Region, RegionError};
use geofence_spatial::SpatialIndex;
use geofence_store::GeometryStore;

#[derive(Debug, Default)]
struct State {
    store: GeometryStore,
    index: SpatialIndex,
}

/// Thread-safe facade over region storage and location queries.
#[derive(Debug, Default)]
pub struct QueryService {
    state: RwLock<State>,
}

impl QueryService {
    /// Creates a service with an empty store and index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers a new region, indexing it for lookups.
    ///
    /// GeoJSON parsing and boundary validation run before the lock is
    /// taken; only the store and index mutation happens inside it.
    ///
    /// # Errors
    ///
    /// * [`RegionError::Validation`] for a malformed boundary or blank
    ///   name/code.
    /// * [`RegionError::DuplicateCode`] if the code is already
    ///   registered (case-insensitive).
    pub fn create_region(
        &self,
        name: &str,
        code: &str,
        geometry: &geojson::Geometry,
    ) -> Result<Region, RegionError> {
        let (boundary, kind) = parse_boundary(geometry)?;

        let mut state = self.write();
        let region = state.store.create(name, code, boundary, kind)?.clone();
        state.index.insert(&region);
        Ok(region)
    }

    /// All registered regions, in creation order.
    #[must_use]
    pub fn list_regions(&self) -> Vec<Region> {
        self.read().store.list().to_vec()
    }

    /// Whether the point `(lat, lng)` lies inside the region registered
    /// under `code`.
    ///
    /// Fast path: the named region's cached bounding box is tested
    /// first; a point outside it cannot be inside the polygon, so the
    /// containment engine is skipped. The box test is edge-inclusive,
    /// so the fast path never flips an "inside" verdict to "outside".
    ///
    /// # Errors
    ///
    /// * [`RegionError::Validation`] for non-finite coordinates.
    /// * [`RegionError::NotFound`] for an unknown code.
    pub fn check_location(&self, lat: f64, lng: f64, code: &str) -> Result<bool, RegionError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(RegionError::validation(
                "latitude and longitude must be finite numbers",
            ));
        }

        let state = self.read();
        let region = state.store.get(code)?;

        if !region.bbox.contains(lng, lat) {
            log::debug!("({lat}, {lng}) outside bbox of {}", region.code);
            return Ok(false);
        }

        Ok(boundary_contains(&region.boundary, lng, lat))
    }

    /// All regions containing the point `(lat, lng)`.
    ///
    /// Uses the spatial index to narrow to bounding-box candidates,
    /// then filters with the exact containment test. Results are sorted
    /// by code for a stable order.
    #[must_use]
    pub fn locate(&self, lat: f64, lng: f64) -> Vec<Region> {
        let state = self.read();

        let mut matches: Vec<Region> = state
            .index
            .candidates(lng, lat)
            .filter_map(|code| state.store.get(code).ok())
            .filter(|region| boundary_contains(&region.boundary, lng, lat))
            .cloned()
            .collect();

        matches.sort_by(|a, b| a.code.cmp(&b.code));
        matches
    }

    /// Number of registered regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.read().store.len()
    }

    // Lock poisoning only happens if another thread panicked while
    // holding the guard; the state is still structurally valid, so
    // recover the guard instead of propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
