//! # Plotmap
//!
//! A Rust-native data pipeline for burial-plot maps.
//!
//! The library turns heterogeneous plot records into a renderable
//! collection: coordinates of unknown representation are normalized to
//! signed decimal degrees, the occupied and available record sets are
//! merged and classified, the result is gated by zoom level and status
//! filter, and a search-derived boundary polygon is projected into
//! viewport pixel space to produce an overlay clip region.
//!
//! HTTP transport, tile rendering, and UI layout stay outside; the record
//! store and the geocoder are consumed through adapter traits.

pub mod core;
pub mod overlay;
pub mod records;
pub mod search;
pub mod session;
pub mod store;

pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{GeocoderConfig, MapConfig, StoreConfig},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use records::{
    filter::{markers, visible, PlotMarker, StatusFilter, ViewportState},
    merge::merge,
    model::{Coordinate, DeceasedInfo, PlotClass, PlotRecord, Sex},
};

pub use overlay::{
    boundary::BoundaryPolygon,
    clip::{compute_clip_path, ClipPath},
};

pub use search::{GeocodeHit, Geocoder, NominatimGeocoder, SearchResolver, SearchResult};

pub use store::{load_plots, HttpPlotStore, PlotStore};

pub use session::{MapSession, SessionEvent};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
///
/// Coordinate parse failures are deliberately absent:
/// [`Coordinate::normalize`](records::model::Coordinate::normalize) returns
/// `Option`, and callers skip the record instead of failing the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("no location found for {0:?}")]
    LookupNotFound(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;
