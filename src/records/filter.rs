//! Viewport filtering: which records render at the current zoom and
//! status filter, and where.

use crate::core::constants::MARKER_MIN_ZOOM;
use crate::core::geo::LatLng;
use crate::records::coords::normalize_opt;
use crate::records::model::{PlotClass, PlotRecord};
use serde::{Deserialize, Serialize};

/// Status filter selected in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Occupied,
    Available,
}

impl StatusFilter {
    fn admits(&self, class: PlotClass) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Occupied => class == PlotClass::Occupied,
            StatusFilter::Available => class == PlotClass::Available,
        }
    }
}

/// Process-local UI state driving the filter. Lifecycle-bound to the
/// active map session; reset on navigation away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: u8,
    pub filter: StatusFilter,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: crate::core::constants::DEFAULT_ZOOM,
            filter: StatusFilter::All,
        }
    }
}

/// A record that survived filtering, paired with its normalized position
#[derive(Debug, Clone, PartialEq)]
pub struct PlotMarker<'a> {
    pub record: &'a PlotRecord,
    pub position: LatLng,
    pub class: PlotClass,
}

/// Applies the zoom gate, status gate, and coordinate gate.
///
/// Below [`MARKER_MIN_ZOOM`] nothing renders; otherwise a record survives
/// when its classification matches the filter and both coordinates
/// normalize to a decimal degree. Output order matches input order.
pub fn visible<'a>(records: &'a [PlotRecord], viewport: &ViewportState) -> Vec<&'a PlotRecord> {
    visible_above(records, viewport, MARKER_MIN_ZOOM)
}

/// [`visible`] with a configurable zoom threshold
pub fn visible_above<'a>(
    records: &'a [PlotRecord],
    viewport: &ViewportState,
    min_zoom: u8,
) -> Vec<&'a PlotRecord> {
    if viewport.zoom < min_zoom {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| viewport.filter.admits(record.classification()))
        .filter(|record| {
            normalize_opt(record.lat.as_ref()).is_some()
                && normalize_opt(record.lng.as_ref()).is_some()
        })
        .collect()
}

/// Like [`visible`], but pairs each surviving record with its normalized
/// position and classification for the renderer.
pub fn markers<'a>(records: &'a [PlotRecord], viewport: &ViewportState) -> Vec<PlotMarker<'a>> {
    markers_above(records, viewport, MARKER_MIN_ZOOM)
}

/// [`markers`] with a configurable zoom threshold
pub fn markers_above<'a>(
    records: &'a [PlotRecord],
    viewport: &ViewportState,
    min_zoom: u8,
) -> Vec<PlotMarker<'a>> {
    if viewport.zoom < min_zoom {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| viewport.filter.admits(record.classification()))
        .filter_map(|record| {
            let lat = normalize_opt(record.lat.as_ref())?;
            let lng = normalize_opt(record.lng.as_ref())?;
            Some(PlotMarker {
                record,
                position: LatLng::new(lat, lng),
                class: record.classification(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::model::Coordinate;

    fn record(permit: &str, status: &str, lat: Option<Coordinate>) -> PlotRecord {
        PlotRecord {
            permit: permit.to_string(),
            lot: "1".to_string(),
            block: "A".to_string(),
            grave: "1".to_string(),
            status: Some(status.to_string()),
            lat,
            lng: Some(Coordinate::Decimal(28.027)),
            deceased: None,
        }
    }

    fn sample() -> Vec<PlotRecord> {
        vec![
            record("P1", "Occupied", Some(Coordinate::Decimal(-26.194))),
            record("P2", "Available", Some(Coordinate::from("26°11'38\"S"))),
            record("P3", "Occupied", Some(Coordinate::from("not a coord"))),
            record("P4", "Available", None),
        ]
    }

    fn state(zoom: u8, filter: StatusFilter) -> ViewportState {
        ViewportState { zoom, filter }
    }

    #[test]
    fn test_zoom_gate_suppresses_everything() {
        assert!(visible(&sample(), &state(13, StatusFilter::All)).is_empty());
        assert!(markers(&sample(), &state(13, StatusFilter::All)).is_empty());
    }

    #[test]
    fn test_zoom_gate_opens_at_threshold() {
        assert!(!visible(&sample(), &state(14, StatusFilter::All)).is_empty());
    }

    #[test]
    fn test_status_gate() {
        let records = sample();

        let occupied = visible(&records, &state(15, StatusFilter::Occupied));
        assert!(occupied.iter().all(|r| !r.is_available()));

        let available = visible(&records, &state(15, StatusFilter::Available));
        assert!(available.iter().all(|r| r.is_available()));
    }

    #[test]
    fn test_coordinate_gate_drops_bad_records() {
        let records = sample();
        let shown = visible(&records, &state(15, StatusFilter::All));

        let permits: Vec<&str> = shown.iter().map(|r| r.permit.as_str()).collect();
        // P3 has an unparseable lat, P4 has none at all.
        assert_eq!(permits, ["P1", "P2"]);
    }

    #[test]
    fn test_output_order_is_stable() {
        let records = sample();
        let shown = visible(&records, &state(15, StatusFilter::All));
        let permits: Vec<&str> = shown.iter().map(|r| r.permit.as_str()).collect();
        assert_eq!(permits, ["P1", "P2"]);
    }

    #[test]
    fn test_markers_carry_normalized_positions() {
        let records = sample();
        let positioned = markers(&records, &state(15, StatusFilter::Available));

        assert_eq!(positioned.len(), 1);
        let marker = &positioned[0];
        assert_eq!(marker.record.permit, "P2");
        assert_eq!(marker.class, PlotClass::Available);
        assert!((marker.position.lat + 26.1939).abs() < 0.01);
        assert!((marker.position.lng - 28.027).abs() < 1e-9);
    }
}
