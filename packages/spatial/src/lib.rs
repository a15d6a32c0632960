#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! R-tree spatial index over region bounding boxes.
//!
//! Narrows "which regions could contain this point" queries to the
//! regions whose bounding box contains the point, before the exact
//! containment test runs. The index holds lookup codes, not regions:
//! ownership of geometry stays with the store.

use std::collections::BTreeMap;

use geofence_region_models::{BoundingBox, Region};
use rstar::{AABB, RTree, RTreeObject};

/// A region's bounding box stored in the R-tree, keyed by its code.
#[derive(Debug, Clone)]
struct IndexEntry {
    code: String,
    envelope: AABB<[f64; 2]>,
}

impl PartialEq for IndexEntry {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl RTreeObject for IndexEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Spatial index over registered regions.
///
/// `candidates` may return false positives (bounding boxes overlap more
/// than polygons do) but never false negatives: every region whose
/// polygon could contain the point is included.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<IndexEntry>,
    /// code -> envelope, so entries can be reconstructed for removal.
    envelopes: BTreeMap<String, AABB<[f64; 2]>>,
}

impl SpatialIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes a region under its canonical code.
    ///
    /// The caller (the query service) is responsible for not inserting
    /// the same code twice; the store's uniqueness check runs first.
    pub fn insert(&mut self, region: &Region) {
        let envelope = envelope_of(region.bbox);
        self.envelopes.insert(region.code.clone(), envelope);
        self.tree.insert(IndexEntry {
            code: region.code.clone(),
            envelope,
        });
        log::debug!("Indexed region {}", region.code);
    }

    /// Codes of all regions whose bounding box contains the point.
    pub fn candidates(&self, lng: f64, lat: f64) -> impl Iterator<Item = &str> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([lng, lat]))
            .map(|entry| entry.code.as_str())
    }

    /// Removes a region from the index. Idempotent: removing an absent
    /// code is a no-op returning `false`.
    pub fn remove(&mut self, code: &str) -> bool {
        let Some(envelope) = self.envelopes.remove(code) else {
            return false;
        };
        self.tree
            .remove(&IndexEntry {
                code: code.to_string(),
                envelope,
            })
            .is_some()
    }

    /// Number of indexed regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

fn envelope_of(bbox: BoundingBox) -> AABB<[f64; 2]> {
    AABB::from_corners([bbox.west, bbox.south], [bbox.east, bbox.north])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, MultiPolygon, Polygon};
    use geofence_region_models::BoundaryKind;

    fn region(code: &str, west: f64, south: f64, east: f64, north: f64) -> Region {
        Region {
            code: code.to_string(),
            name: code.to_string(),
            boundary: MultiPolygon(vec![Polygon::new(
                LineString::from(vec![
                    (west, south),
                    (east, south),
                    (east, north),
                    (west, north),
                    (west, south),
                ]),
                vec![],
            )]),
            kind: BoundaryKind::Polygon,
            bbox: BoundingBox::new(west, south, east, north),
        }
    }

    #[test]
    fn finds_candidates_containing_point() {
        let mut index = SpatialIndex::new();
        index.insert(&region("IL", 34.0, 29.0, 36.0, 34.0));
        index.insert(&region("FR", -5.0, 41.0, 10.0, 51.0));

        let hits: Vec<&str> = index.candidates(35.0, 32.0).collect();
        assert_eq!(hits, vec!["IL"]);
    }

    #[test]
    fn includes_every_overlapping_bbox() {
        let mut index = SpatialIndex::new();
        index.insert(&region("A", 0.0, 0.0, 10.0, 10.0));
        index.insert(&region("B", 5.0, 5.0, 15.0, 15.0));

        let mut hits: Vec<&str> = index.candidates(7.0, 7.0).collect();
        hits.sort_unstable();
        assert_eq!(hits, vec!["A", "B"]);
    }

    #[test]
    fn bbox_edge_point_is_a_candidate() {
        let mut index = SpatialIndex::new();
        index.insert(&region("A", 0.0, 0.0, 10.0, 10.0));

        assert_eq!(index.candidates(10.0, 10.0).count(), 1);
        assert_eq!(index.candidates(0.0, 5.0).count(), 1);
    }

    #[test]
    fn misses_return_empty() {
        let mut index = SpatialIndex::new();
        index.insert(&region("A", 0.0, 0.0, 10.0, 10.0));

        assert_eq!(index.candidates(20.0, 20.0).count(), 0);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut index = SpatialIndex::new();
        index.insert(&region("A", 0.0, 0.0, 10.0, 10.0));

        assert!(index.remove("A"));
        assert!(!index.remove("A"));
        assert!(index.is_empty());
        assert_eq!(index.candidates(5.0, 5.0).count(), 0);
    }

    #[test]
    fn len_tracks_inserts() {
        let mut index = SpatialIndex::new();
        assert!(index.is_empty());

        index.insert(&region("A", 0.0, 0.0, 1.0, 1.0));
        index.insert(&region("B", 2.0, 2.0, 3.0, 3.0));
        assert_eq!(index.len(), 2);
    }
}
