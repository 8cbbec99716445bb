//! Prelude module for common plotmap types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for
//! easy importing with `use plotmap::prelude::*;`

pub use crate::core::{
    config::{GeocoderConfig, MapConfig, StoreConfig},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use crate::records::{
    coords::normalize_opt,
    filter::{markers, visible, PlotMarker, StatusFilter, ViewportState},
    merge::merge,
    model::{
        AvailablePlotInput, Coordinate, DeceasedInfo, OccupiedPlotInput, PlotClass, PlotRecord,
        Sex,
    },
};

pub use crate::overlay::{
    boundary::BoundaryPolygon,
    clip::{compute_clip_path, ClipPath},
};

pub use crate::search::{GeocodeHit, Geocoder, NominatimGeocoder, SearchResolver, SearchResult};

pub use crate::store::{load_plots, HttpPlotStore, PlotStore};

pub use crate::session::{MapSession, SessionEvent};

pub use crate::{Error as MapError, Result};
