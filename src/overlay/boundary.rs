//! Search-derived boundary polygons.
//!
//! Shapes arrive as GeoJSON-style geometry from the geocoder, with
//! `[lng, lat]` vertex pairs and closed rings (first and last vertex
//! coincide, at least four points per ring).

use crate::core::constants::BOUNDARY_HALF_WIDTH_DEG;
use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A boundary around a cemetery, as one ring set or several
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoundaryPolygon {
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

impl BoundaryPolygon {
    /// The ring the overlay clips to: the first ring of the (first)
    /// polygon. Interior rings and secondary polygons are not rendered.
    pub fn outer_ring(&self) -> Option<&[[f64; 2]]> {
        match self {
            BoundaryPolygon::Polygon { coordinates } => {
                coordinates.first().map(Vec::as_slice)
            }
            BoundaryPolygon::MultiPolygon { coordinates } => coordinates
                .first()
                .and_then(|polygon| polygon.first())
                .map(Vec::as_slice),
        }
    }

    /// Synthesizes the default small rectangle around a resolved
    /// coordinate, for search results that carry no boundary of their own.
    pub fn around(center: LatLng) -> Self {
        Self::rect(center, BOUNDARY_HALF_WIDTH_DEG)
    }

    /// An axis-aligned closed rectangle of the given half-width in degrees
    pub fn rect(center: LatLng, half_width: f64) -> Self {
        let LatLng { lat, lng } = center;
        BoundaryPolygon::Polygon {
            coordinates: vec![vec![
                [lng - half_width, lat - half_width],
                [lng + half_width, lat - half_width],
                [lng + half_width, lat + half_width],
                [lng - half_width, lat + half_width],
                [lng - half_width, lat - half_width],
            ]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_rect_is_closed() {
        let center = LatLng::new(-26.19394, 28.02739);
        let polygon = BoundaryPolygon::around(center);
        let ring = polygon.outer_ring().unwrap();

        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert!((ring[0][0] - (center.lng - 0.001)).abs() < 1e-12);
        assert!((ring[0][1] - (center.lat - 0.001)).abs() < 1e-12);
    }

    #[test]
    fn test_multipolygon_takes_first_ring() {
        let polygon = BoundaryPolygon::MultiPolygon {
            coordinates: vec![
                vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]],
            ],
        };

        let ring = polygon.outer_ring().unwrap();
        assert_eq!(ring[0], [0.0, 0.0]);
    }

    #[test]
    fn test_geojson_wire_shape() {
        let json = serde_json::json!({
            "type": "Polygon",
            "coordinates": [[
                [28.026, -26.195], [28.028, -26.195],
                [28.028, -26.193], [28.026, -26.193],
                [28.026, -26.195]
            ]]
        });

        let polygon: BoundaryPolygon = serde_json::from_value(json).unwrap();
        assert_eq!(polygon.outer_ring().unwrap().len(), 5);
    }
}
