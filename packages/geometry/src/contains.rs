//! Ray-casting point-in-polygon tests with hole subtraction.
//!
//! On-edge policy: a point lying exactly on any ring segment, exterior
//! or hole, counts as inside the boundary. All comparisons are plain
//! double-precision; no epsilon is applied since input coordinates are
//! already normalized decimal degrees.

use geo::{LineString, MultiPolygon, Polygon};

/// Where a point sits relative to a single linear ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RingPosition {
    Inside,
    Outside,
    OnEdge,
}

/// Whether the point `(lng, lat)` is inside the boundary.
///
/// A point is inside when at least one polygon of the boundary contains
/// it: inside (or on) the polygon's exterior ring and not strictly
/// inside any of its hole rings.
#[must_use]
pub fn boundary_contains(boundary: &MultiPolygon<f64>, lng: f64, lat: f64) -> bool {
    boundary
        .0
        .iter()
        .any(|polygon| polygon_contains(polygon, lng, lat))
}

fn polygon_contains(polygon: &Polygon<f64>, lng: f64, lat: f64) -> bool {
    match ring_position(polygon.exterior(), lng, lat) {
        RingPosition::Outside => false,
        RingPosition::OnEdge => true,
        RingPosition::Inside => {
            for hole in polygon.interiors() {
                match ring_position(hole, lng, lat) {
                    // A hole edge is still part of the polygon's boundary.
                    RingPosition::OnEdge => return true,
                    RingPosition::Inside => return false,
                    RingPosition::Outside => {}
                }
            }
            true
        }
    }
}

/// Even-odd ray cast against one closed ring.
///
/// Casts a ray from the point toward +x (east) and counts crossings,
/// using the half-open rule `(a.y > lat) != (b.y > lat)` so vertices
/// are never double-counted. Segments the point lies on exactly short-
/// circuit to [`RingPosition::OnEdge`].
fn ring_position(ring: &LineString<f64>, lng: f64, lat: f64) -> RingPosition {
    let mut inside = false;

    for segment in ring.0.windows(2) {
        let (a, b) = (segment[0], segment[1]);

        if on_segment(a.x, a.y, b.x, b.y, lng, lat) {
            return RingPosition::OnEdge;
        }

        if (a.y > lat) != (b.y > lat) {
            let crossing_x = a.x + (lat - a.y) / (b.y - a.y) * (b.x - a.x);
            if lng < crossing_x {
                inside = !inside;
            }
        }
    }

    if inside {
        RingPosition::Inside
    } else {
        RingPosition::Outside
    }
}

/// Whether `(lng, lat)` lies exactly on the segment from `(ax, ay)` to
/// `(bx, by)`: collinear (exact cross product zero) and within the
/// segment's bounding rectangle.
#[allow(clippy::float_cmp)]
fn on_segment(ax: f64, ay: f64, bx: f64, by: f64, lng: f64, lat: f64) -> bool {
    let cross = (bx - ax) * (lat - ay) - (by - ay) * (lng - ax);
    if cross != 0.0 {
        return false;
    }

    lng >= ax.min(bx) && lng <= ax.max(bx) && lat >= ay.min(by) && lat <= ay.max(by)
}
