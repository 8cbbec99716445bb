//! Free-text cemetery search.
//!
//! The geocoder is an external collaborator behind the [`Geocoder`]
//! trait; [`SearchResolver`] owns the policy around it: qualify the
//! query, take the first hit, and guarantee a boundary polygon so the
//! clipper always has something to work with after a successful search.

use crate::core::constants::SEARCH_QUALIFIER;
use crate::core::geo::LatLng;
use crate::overlay::boundary::BoundaryPolygon;
use crate::{GeocoderConfig, MapError, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// One geocoding result, ordered by relevance
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub position: LatLng,
    pub boundary: Option<BoundaryPolygon>,
}

/// External lookup turning free text into coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>>;
}

/// A resolved search: where to fly to and what to clip against
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub center: LatLng,
    pub boundary: BoundaryPolygon,
}

/// Adapter turning free-text input into a map location
pub struct SearchResolver<G> {
    geocoder: G,
}

impl<G: Geocoder> SearchResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Resolves a query to a coordinate and boundary polygon.
    ///
    /// The fixed domain qualifier is appended before lookup and only the
    /// first hit is used. A blank query never reaches the geocoder; it and
    /// an empty result set are [`MapError::LookupNotFound`], surfaced to
    /// the user as a notice rather than a fault. A hit without a boundary
    /// gets the default small rectangle synthesized around it.
    pub async fn resolve(&self, query: &str) -> Result<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MapError::LookupNotFound(query.to_string()));
        }

        let qualified = format!("{query} {SEARCH_QUALIFIER}");
        let hits = self.geocoder.geocode(&qualified).await?;

        let Some(hit) = hits.into_iter().next() else {
            return Err(MapError::LookupNotFound(query.to_string()));
        };

        let boundary = hit
            .boundary
            .unwrap_or_else(|| BoundaryPolygon::around(hit.position));

        Ok(SearchResult {
            center: hit.position,
            boundary,
        })
    }
}

/// One place in a Nominatim search response. Nominatim serializes
/// coordinates as strings, and `geojson` may be any geometry type; only
/// polygonal shapes become boundaries.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    geojson: Option<serde_json::Value>,
}

impl NominatimPlace {
    fn boundary(&self) -> Option<BoundaryPolygon> {
        let geojson = self.geojson.clone()?;
        serde_json::from_value(geojson).ok()
    }
}

/// Geocoder adapter for a Nominatim-compatible search endpoint
pub struct NominatimGeocoder {
    client: reqwest::Client,
    config: GeocoderConfig,
}

impl NominatimGeocoder {
    pub fn new(config: GeocoderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>> {
        let places: Vec<NominatimPlace> = self
            .client
            .get(&self.config.endpoint)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", "1"),
                ("polygon_geojson", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let hits = places
            .into_iter()
            .filter_map(|place| {
                let lat: f64 = place.lat.parse().ok()?;
                let lng: f64 = place.lon.parse().ok()?;
                let boundary = place.boundary();
                Some(GeocodeHit {
                    position: LatLng::new(lat, lng),
                    boundary,
                })
            })
            .collect();

        Ok(hits)
    }
}
