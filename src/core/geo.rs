use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub};

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// A geographical coordinate in signed decimal degrees.
///
/// South latitudes and west longitudes are negative; this is the canonical
/// form every heterogeneous input representation is normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinate is within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Clamps latitude to the Web Mercator projectable range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Wraps longitude to the [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Projects to raw Web Mercator meters (EPSG:3857)
    pub fn to_mercator(&self) -> Point {
        let x = self.lng.to_radians() * EARTH_RADIUS;
        let y = (PI / 4.0 + Self::clamp_lat(self.lat).to_radians() / 2.0)
            .tan()
            .ln()
            * EARTH_RADIUS;
        Point::new(x, y)
    }

    /// Inverse of [`to_mercator`](Self::to_mercator)
    pub fn from_mercator(point: Point) -> Self {
        let lng = (point.x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        Self::new(lat, lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A point in screen or projected pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn floor(&self) -> Point {
        Point::new(self.x.floor(), self.y.floor())
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// A bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Checks whether the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}
