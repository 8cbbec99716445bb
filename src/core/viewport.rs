use crate::core::constants::TILE_SIZE;
use crate::core::geo::{LatLng, LatLngBounds, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const EARTH_RADIUS: f64 = 6378137.0;

/// Manages the current view of the map: center, zoom, and screen dimensions.
///
/// The viewport is the single source of the pixel transform: every marker
/// position and the boundary clip region are derived from it, so anything
/// projected through it must be recomputed when it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
    /// Pixel origin for coordinate transformations (to avoid precision issues)
    pixel_origin: Option<Point>,
    /// Pan limits for the map
    max_bounds: Option<LatLngBounds>,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
            pixel_origin: None,
            max_bounds: None,
        }
    }

    /// Sets the pan limits for the map
    pub fn set_max_bounds(&mut self, bounds: Option<LatLngBounds>) {
        self.max_bounds = bounds;
    }

    /// Gets the pan limits for the map if set
    pub fn max_bounds(&self) -> Option<&LatLngBounds> {
        self.max_bounds.as_ref()
    }

    /// Sets the center of the viewport with bounds checking
    pub fn set_center(&mut self, center: LatLng) {
        self.center = self.clamp_center(center);
        self.update_pixel_origin();
    }

    /// Sets the zoom level, clamping to the valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.update_pixel_origin();
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
        self.update_pixel_origin();
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Recenters the view on a coordinate at the given zoom level, the way a
    /// successful search recenters the map
    pub fn fly_to(&mut self, center: LatLng, zoom: f64) {
        self.set_zoom(zoom);
        self.set_center(center);
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    /// using the standard Web Mercator projection (EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = f64::from(TILE_SIZE) * 2_f64.powf(z);

        let mercator = lat_lng.to_mercator();
        let world = 2.0 * PI * EARTH_RADIUS;

        let pixel_x = (mercator.x + PI * EARTH_RADIUS) / world * scale;
        let pixel_y = (-mercator.y + PI * EARTH_RADIUS) / world * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Unprojects world pixel coordinates back to a LatLng at the given zoom
    /// level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let scale = f64::from(TILE_SIZE) * 2_f64.powf(z);
        let world = 2.0 * PI * EARTH_RADIUS;

        let x = (pixel.x / scale) * world - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - (pixel.y / scale) * world;

        LatLng::from_mercator(Point::new(x, y))
    }

    /// Gets or calculates the pixel origin for this viewport.
    /// Keeps pixel coordinates manageable and avoids precision issues.
    pub fn pixel_origin(&self) -> Point {
        self.pixel_origin
            .unwrap_or_else(|| self.project(&self.center, None).floor())
    }

    fn update_pixel_origin(&mut self) {
        self.pixel_origin = Some(self.project(&self.center, None).floor());
    }

    /// Converts a geographical coordinate to container-relative screen pixel
    /// coordinates. This is the projector handed to the boundary clipper.
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let layer = self.project(lat_lng, None) - self.pixel_origin();
        Point::new(layer.x + self.size.x / 2.0, layer.y + self.size.y / 2.0)
    }

    /// Converts container-relative screen pixel coordinates back to a
    /// geographical coordinate
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let layer = Point::new(pixel.x - self.size.x / 2.0, pixel.y - self.size.y / 2.0);
        self.unproject(&(layer + self.pixel_origin()), None)
    }

    /// A projector closure over the current transform, suitable for
    /// [`compute_clip_path`](crate::overlay::clip::compute_clip_path)
    pub fn projector(&self) -> impl Fn(LatLng) -> Point + '_ {
        move |lat_lng| self.lat_lng_to_pixel(&lat_lng)
    }

    /// Pans the viewport by the given pixel offset
    pub fn pan(&mut self, delta: Point) {
        let center_pixel = self.lat_lng_to_pixel(&self.center);
        let new_center = self.pixel_to_lat_lng(&(center_pixel - delta));
        self.set_center(new_center);
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let nw = self.pixel_to_lat_lng(&Point::new(0.0, 0.0));
        let se = self.pixel_to_lat_lng(&Point::new(self.size.x, self.size.y));

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Clamps center to world bounds, or max_bounds if set
    fn clamp_center(&self, center: LatLng) -> LatLng {
        if let Some(bounds) = &self.max_bounds {
            LatLng::new(
                center
                    .lat
                    .clamp(bounds.south_west.lat, bounds.north_east.lat),
                center
                    .lng
                    .clamp(bounds.south_west.lng, bounds.north_east.lng),
            )
        } else {
            LatLng::new(
                LatLng::clamp_lat(center.lat),
                center.lng.clamp(-180.0, 180.0),
            )
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}
