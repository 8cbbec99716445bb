//! Projection of a geographic boundary ring into a viewport-space clip
//! region.
//!
//! This is a pure function of the polygon and the projector: the session
//! recomputes it whenever either the resolved boundary changes (new
//! search) or the viewport transform changes (pan/zoom). Nothing is
//! cached across transform changes.

use crate::core::geo::{LatLng, Point};
use crate::overlay::boundary::BoundaryPolygon;
use std::fmt::Write as _;

/// An ordered ring of viewport pixel points masking the overlay to the
/// boundary's projected shape
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPath {
    points: Vec<Point>,
}

impl ClipPath {
    /// The projected ring, in the source polygon's winding order. The
    /// closing vertex is collapsed onto the first, so the ring is open.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Renders the region as a CSS `polygon(...)` expression for a
    /// clip-path overlay mask
    pub fn to_css(&self) -> String {
        let mut css = String::from("polygon(");
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                css.push(',');
            }
            let _ = write!(css, "{}px {}px", point.x, point.y);
        }
        css.push(')');
        css
    }
}

/// Projects the polygon's outer ring through `project` into a clip region.
///
/// `None` polygon means no clip (full view shown). A degenerate ring with
/// fewer than four points yields `None` rather than an invalid region.
pub fn compute_clip_path<P>(polygon: Option<&BoundaryPolygon>, project: P) -> Option<ClipPath>
where
    P: Fn(LatLng) -> Point,
{
    let ring = polygon?.outer_ring()?;
    if ring.len() < 4 {
        log::debug!("skipping degenerate boundary ring of {} points", ring.len());
        return None;
    }

    // Drop the closing vertex so it collapses onto the first point.
    let open_ring = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if first == last => &ring[..ring.len() - 1],
        _ => ring,
    };

    let points = open_ring
        .iter()
        .map(|&[lng, lat]| project(LatLng::new(lat, lng)))
        .collect();

    Some(ClipPath { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLngBounds;
    use crate::core::viewport::Viewport;

    fn identity(lat_lng: LatLng) -> Point {
        Point::new(lat_lng.lng, lat_lng.lat)
    }

    fn closed_square() -> BoundaryPolygon {
        BoundaryPolygon::Polygon {
            coordinates: vec![vec![
                [0.0, 0.0],
                [1.0, 0.0],
                [1.0, 1.0],
                [0.0, 1.0],
                [0.0, 0.0],
            ]],
        }
    }

    #[test]
    fn test_no_polygon_means_no_clip() {
        assert_eq!(compute_clip_path(None, identity), None);
    }

    #[test]
    fn test_closing_vertex_collapses() {
        let clip = compute_clip_path(Some(&closed_square()), identity).unwrap();

        // Five ring vertices project to four distinct points.
        assert_eq!(clip.points().len(), 4);
        assert_eq!(clip.points()[0], Point::new(0.0, 0.0));
        assert_eq!(clip.points()[3], Point::new(0.0, 1.0));
    }

    #[test]
    fn test_winding_order_preserved() {
        let clip = compute_clip_path(Some(&closed_square()), identity).unwrap();
        let xs: Vec<f64> = clip.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, [0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_degenerate_ring_yields_none() {
        let triangle_missing_close = BoundaryPolygon::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]],
        };
        assert_eq!(
            compute_clip_path(Some(&triangle_missing_close), identity),
            None
        );

        let empty = BoundaryPolygon::Polygon {
            coordinates: vec![],
        };
        assert_eq!(compute_clip_path(Some(&empty), identity), None);
    }

    #[test]
    fn test_css_expression() {
        let clip = compute_clip_path(Some(&closed_square()), identity).unwrap();
        assert_eq!(
            clip.to_css(),
            "polygon(0px 0px,1px 0px,1px 1px,0px 1px)"
        );
    }

    #[test]
    fn test_recomputes_with_viewport_transform() {
        let center = LatLng::new(-26.19394, 28.02739);
        let polygon = BoundaryPolygon::around(center);

        let mut viewport = Viewport::new(center, 15.0, Point::new(800.0, 600.0));
        viewport.set_max_bounds(Some(LatLngBounds::from_coords(-35.0, 15.0, -21.0, 35.0)));
        viewport.set_center(center);

        let before = compute_clip_path(Some(&polygon), viewport.projector()).unwrap();

        viewport.set_zoom(16.0);
        let after = compute_clip_path(Some(&polygon), viewport.projector()).unwrap();

        // Same ring, different transform, different pixels.
        assert_eq!(before.points().len(), after.points().len());
        assert_ne!(before.points()[0], after.points()[0]);
    }
}
