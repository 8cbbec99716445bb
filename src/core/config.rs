//! Configuration for the map session and its external adapters.
//!
//! Nothing in the crate reads a hardcoded backend URL or embeds a
//! credential: the record store and geocoder adapters receive their
//! configuration at construction time, and secrets are sourced from the
//! process environment.

use crate::core::constants::{
    DEFAULT_CENTER, DEFAULT_MAX_BOUNDS, DEFAULT_SEARCH_ZOOM, DEFAULT_ZOOM, MARKER_MIN_ZOOM,
};
use crate::core::geo::{LatLng, LatLngBounds};

/// Environment variable naming the record-store base URL.
pub const STORE_URL_VAR: &str = "PLOTMAP_STORE_URL";
/// Environment variable holding the record-store bearer token, if any.
pub const STORE_TOKEN_VAR: &str = "PLOTMAP_STORE_TOKEN";
/// Environment variable naming the geocoder endpoint.
pub const GEOCODER_URL_VAR: &str = "PLOTMAP_GEOCODER_URL";

/// Record-store adapter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Base URL of the record store, e.g. `https://plots.example.org`
    pub base_url: String,
    /// Optional bearer token attached to every request
    pub auth_token: Option<String>,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Reads the store location and credential from the environment.
    /// Returns `None` when no base URL is configured.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(STORE_URL_VAR).ok()?;
        Some(Self {
            base_url,
            auth_token: std::env::var(STORE_TOKEN_VAR).ok(),
        })
    }
}

/// Geocoder adapter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderConfig {
    /// Search endpoint, e.g. `https://nominatim.openstreetmap.org/search`
    pub endpoint: String,
    /// User-Agent sent with every lookup; public Nominatim requires one
    pub user_agent: String,
}

impl GeocoderConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: format!("plotmap/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn from_env() -> Option<Self> {
        std::env::var(GEOCODER_URL_VAR).ok().map(Self::new)
    }
}

/// Top-level map session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub store: StoreConfig,
    pub geocoder: GeocoderConfig,
    /// Markers are hidden below this zoom level
    pub min_marker_zoom: u8,
    /// Zoom applied when flying to a search result
    pub search_zoom: u8,
    pub initial_center: LatLng,
    pub initial_zoom: u8,
    /// Pan limits, if the deployment wants the map fenced in
    pub max_bounds: Option<LatLngBounds>,
}

impl MapConfig {
    pub fn new(store: StoreConfig, geocoder: GeocoderConfig) -> Self {
        let (lat, lng) = DEFAULT_CENTER;
        let (south, west, north, east) = DEFAULT_MAX_BOUNDS;
        Self {
            store,
            geocoder,
            min_marker_zoom: MARKER_MIN_ZOOM,
            search_zoom: DEFAULT_SEARCH_ZOOM,
            initial_center: LatLng::new(lat, lng),
            initial_zoom: DEFAULT_ZOOM,
            max_bounds: Some(LatLngBounds::from_coords(south, west, north, east)),
        }
    }

    pub fn with_center(mut self, center: LatLng, zoom: u8) -> Self {
        self.initial_center = center;
        self.initial_zoom = zoom;
        self
    }

    pub fn with_max_bounds(mut self, bounds: Option<LatLngBounds>) -> Self {
        self.max_bounds = bounds;
        self
    }
}
