//! Parses and validates GeoJSON boundaries into [`geo`] geometry.
//!
//! Validation runs against the raw coordinate arrays, not the converted
//! geometry: [`geo::Polygon`] closes unclosed rings on construction, so
//! converting first would coerce malformed input instead of rejecting
//! it. Rejection happens on the first structural violation.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use geofence_region_models::{BoundaryKind, RegionError};

/// One GeoJSON linear ring: a list of `[lng, lat]` positions.
type RawRing = Vec<Vec<f64>>;

/// Parses a GeoJSON `Polygon` or `MultiPolygon` geometry into the
/// normalized boundary representation.
///
/// # Errors
///
/// Returns [`RegionError::Validation`] for unsupported geometry types,
/// empty polygons, rings with fewer than 4 positions, unclosed rings,
/// and out-of-range coordinates.
pub fn parse_boundary(
    geometry: &geojson::Geometry,
) -> Result<(MultiPolygon<f64>, BoundaryKind), RegionError> {
    match &geometry.value {
        geojson::Value::Polygon(rings) => {
            let polygon = convert_polygon(rings)?;
            Ok((MultiPolygon(vec![polygon]), BoundaryKind::Polygon))
        }
        geojson::Value::MultiPolygon(polygons) => {
            if polygons.is_empty() {
                return Err(RegionError::validation(
                    "MultiPolygon must contain at least one polygon",
                ));
            }
            let converted = polygons
                .iter()
                .map(|rings| convert_polygon(rings))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((MultiPolygon(converted), BoundaryKind::MultiPolygon))
        }
        other => Err(RegionError::validation(format!(
            "unsupported geometry type: {} (expected Polygon or MultiPolygon)",
            geometry_type_name(other)
        ))),
    }
}

/// Serializes a boundary back to the GeoJSON geometry type it was
/// created from.
#[must_use]
pub fn boundary_to_geojson(boundary: &MultiPolygon<f64>, kind: BoundaryKind) -> geojson::Geometry {
    match (kind, boundary.0.as_slice()) {
        (BoundaryKind::Polygon, [polygon]) => geojson::Geometry::new(geojson::Value::from(polygon)),
        _ => geojson::Geometry::new(geojson::Value::from(boundary)),
    }
}

fn convert_polygon(rings: &[RawRing]) -> Result<Polygon<f64>, RegionError> {
    let (exterior, holes) = rings.split_first().ok_or_else(|| {
        RegionError::validation("polygon must contain at least one ring (the exterior)")
    })?;

    validate_ring(exterior)?;
    for hole in holes {
        validate_ring(hole)?;
    }

    Ok(Polygon::new(
        to_line_string(exterior),
        holes.iter().map(|hole| to_line_string(hole)).collect(),
    ))
}

#[allow(clippy::float_cmp)]
fn validate_ring(ring: &RawRing) -> Result<(), RegionError> {
    if ring.len() < 4 {
        return Err(RegionError::validation(format!(
            "ring must contain at least 4 positions, got {}",
            ring.len()
        )));
    }

    for position in ring {
        if position.len() < 2 {
            return Err(RegionError::validation(
                "position must contain longitude and latitude",
            ));
        }
        let (lng, lat) = (position[0], position[1]);
        if !(-180.0..=180.0).contains(&lng) {
            return Err(RegionError::validation(format!(
                "longitude out of range [-180, 180]: {lng}"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(RegionError::validation(format!(
                "latitude out of range [-90, 90]: {lat}"
            )));
        }
    }

    let first = &ring[0];
    let last = &ring[ring.len() - 1];
    if first[0] != last[0] || first[1] != last[1] {
        return Err(RegionError::validation(
            "ring is not closed (first and last positions differ)",
        ));
    }

    Ok(())
}

fn to_line_string(ring: &RawRing) -> LineString<f64> {
    LineString::from(
        ring.iter()
            .map(|position| Coord {
                x: position[0],
                y: position[1],
            })
            .collect::<Vec<_>>(),
    )
}

fn geometry_type_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(json: serde_json::Value) -> geojson::Geometry {
        serde_json::from_value(json).unwrap()
    }

    fn square_polygon() -> geojson::Geometry {
        geometry(serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[35.0, 32.0], [35.1, 32.0], [35.1, 32.1], [35.0, 32.1], [35.0, 32.0]]],
        }))
    }

    #[test]
    fn parses_polygon() {
        let (boundary, kind) = parse_boundary(&square_polygon()).unwrap();
        assert_eq!(kind, BoundaryKind::Polygon);
        assert_eq!(boundary.0.len(), 1);
        assert_eq!(boundary.0[0].exterior().0.len(), 5);
    }

    #[test]
    fn parses_multipolygon() {
        let geom = geometry(serde_json::json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]],
            ],
        }));

        let (boundary, kind) = parse_boundary(&geom).unwrap();
        assert_eq!(kind, BoundaryKind::MultiPolygon);
        assert_eq!(boundary.0.len(), 2);
    }

    #[test]
    fn parses_polygon_with_hole() {
        let geom = geometry(serde_json::json!({
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
                [[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0], [4.0, 4.0]],
            ],
        }));

        let (boundary, _) = parse_boundary(&geom).unwrap();
        assert_eq!(boundary.0[0].interiors().len(), 1);
    }

    #[test]
    fn rejects_unclosed_ring() {
        let geom = geometry(serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]],
        }));

        let err = parse_boundary(&geom).unwrap_err();
        assert!(matches!(err, RegionError::Validation { .. }));
        assert!(err.to_string().contains("not closed"));
    }

    #[test]
    fn rejects_short_ring() {
        let geom = geometry(serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]],
        }));

        let err = parse_boundary(&geom).unwrap_err();
        assert!(err.to_string().contains("at least 4 positions"));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let geom = geometry(serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[190.0, 0.0], [191.0, 0.0], [191.0, 1.0], [190.0, 0.0]]],
        }));

        let err = parse_boundary(&geom).unwrap_err();
        assert!(err.to_string().contains("longitude out of range"));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let geom = geometry(serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 95.0], [1.0, 95.0], [1.0, 96.0], [0.0, 95.0]]],
        }));

        let err = parse_boundary(&geom).unwrap_err();
        assert!(err.to_string().contains("latitude out of range"));
    }

    #[test]
    fn rejects_unsupported_geometry_type() {
        let geom = geometry(serde_json::json!({
            "type": "Point",
            "coordinates": [35.0, 32.0],
        }));

        let err = parse_boundary(&geom).unwrap_err();
        assert!(err.to_string().contains("unsupported geometry type: Point"));
    }

    #[test]
    fn rejects_empty_multipolygon() {
        let geom = geometry(serde_json::json!({
            "type": "MultiPolygon",
            "coordinates": [],
        }));

        assert!(parse_boundary(&geom).is_err());
    }

    #[test]
    fn round_trips_polygon_unchanged() {
        let (boundary, kind) = parse_boundary(&square_polygon()).unwrap();
        let out = boundary_to_geojson(&boundary, kind);

        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            serde_json::to_value(&square_polygon()).unwrap()
        );
    }

    #[test]
    fn round_trips_multipolygon_type() {
        let geom = geometry(serde_json::json!({
            "type": "MultiPolygon",
            "coordinates": [[[[35.0, 32.0], [35.1, 32.0], [35.1, 32.1], [35.0, 32.0]]]],
        }));

        let (boundary, kind) = parse_boundary(&geom).unwrap();
        let out = boundary_to_geojson(&boundary, kind);
        assert!(matches!(out.value, geojson::Value::MultiPolygon(_)));
    }
}
