//! Engine-wide constants derived from the original deployment and common
//! web-map conventions. Keeping them in a single place makes it easier to
//! tweak magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Markers are suppressed below this zoom level to avoid clutter.
pub const MARKER_MIN_ZOOM: u8 = 14;

/// Zoom level the map flies to after a successful cemetery search.
pub const DEFAULT_SEARCH_ZOOM: u8 = 17;

/// Domain qualifier appended to every free-text search query.
pub const SEARCH_QUALIFIER: &str = "cemetery";

/// Half-width in degrees of the rectangle synthesized around a search
/// result that carries no boundary polygon of its own.
pub const BOUNDARY_HALF_WIDTH_DEG: f64 = 0.001;

/// Default map center (lat, lng).
pub const DEFAULT_CENTER: (f64, f64) = (-26.19394, 28.02739);

/// Default initial zoom level.
pub const DEFAULT_ZOOM: u8 = 15;

/// Default pan limits as (south, west, north, east).
pub const DEFAULT_MAX_BOUNDS: (f64, f64, f64, f64) = (-35.0, 15.0, -21.0, 35.0);
