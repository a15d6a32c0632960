#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Exact point-in-polygon containment and GeoJSON boundary validation.
//!
//! The containment engine is independent of any index: given a boundary
//! and a point it answers inside/outside deterministically, including a
//! fixed policy for points exactly on a ring edge. Boundary parsing
//! validates the raw GeoJSON coordinate arrays before converting to
//! [`geo`] types, which would otherwise silently close open rings.

pub mod contains;
pub mod parse;

pub use contains::boundary_contains;
pub use parse::{boundary_to_geojson, parse_boundary};

use geo::{BoundingRect, MultiPolygon};
use geofence_region_models::BoundingBox;

/// Computes the bounding box over all polygons of a boundary.
///
/// Called once at region creation; the result is cached on the region
/// for fast rejection during location checks.
#[must_use]
pub fn bounding_box(boundary: &MultiPolygon<f64>) -> BoundingBox {
    boundary.bounding_rect().map_or_else(
        || BoundingBox::new(0.0, 0.0, 0.0, 0.0),
        |rect| BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Polygon};

    fn square(w: f64, s: f64, e: f64, n: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![(w, s), (e, s), (e, n), (w, n), (w, s)]),
            vec![],
        )
    }

    #[test]
    fn bounding_box_covers_single_polygon() {
        let boundary = MultiPolygon(vec![square(35.0, 32.0, 35.1, 32.1)]);
        assert_eq!(
            bounding_box(&boundary),
            BoundingBox::new(35.0, 32.0, 35.1, 32.1)
        );
    }

    #[test]
    fn bounding_box_spans_all_polygons() {
        let boundary = MultiPolygon(vec![
            square(-10.0, -5.0, 0.0, 5.0),
            square(20.0, 10.0, 30.0, 15.0),
        ]);
        assert_eq!(
            bounding_box(&boundary),
            BoundingBox::new(-10.0, -5.0, 30.0, 15.0)
        );
    }
}
