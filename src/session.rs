//! The active rendering session.
//!
//! All "shared" state — the record collection, the viewport, the resolved
//! boundary — is owned exclusively here and mutated only through
//! [`MapSession::apply`], a pure event-to-new-state transition. The
//! rendering surface reads derived values back out; it never mutates the
//! session through side effects. Visible markers and the clip region are
//! derived on every read, so they are always consistent with the current
//! viewport and boundary.

use crate::core::config::MapConfig;
use crate::core::geo::Point;
use crate::core::viewport::Viewport;
use crate::overlay::boundary::BoundaryPolygon;
use crate::overlay::clip::{compute_clip_path, ClipPath};
use crate::records::filter::{markers_above, visible_above, PlotMarker, StatusFilter, ViewportState};
use crate::records::model::PlotRecord;
use crate::search::SearchResult;

/// State transitions, triggered by user interaction or I/O completion
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Both record fetches completed; replaces the collection
    RecordsLoaded(Vec<PlotRecord>),
    /// A fetch failed; the previous collection stays on screen
    LoadFailed(String),
    ZoomChanged(u8),
    FilterChanged(StatusFilter),
    /// A search resolved; recenters the map and installs the boundary
    SearchResolved(SearchResult),
    SearchFailed(String),
    BoundaryCleared,
    ViewportResized(Point),
    Panned(Point),
    /// A record was deleted through the store; drops it locally
    RecordDeleted(String),
}

/// Owns the map state for one rendering session.
///
/// Constructed on mount from explicit configuration, discarded on
/// unmount. Records are reconstructed from the store on every load and
/// never mutated in place.
pub struct MapSession {
    records: Vec<PlotRecord>,
    state: ViewportState,
    viewport: Viewport,
    boundary: Option<BoundaryPolygon>,
    notice: Option<String>,
    min_marker_zoom: u8,
    search_zoom: u8,
}

impl MapSession {
    pub fn new(config: &MapConfig, size: Point) -> Self {
        let mut viewport = Viewport::new(
            config.initial_center,
            f64::from(config.initial_zoom),
            size,
        );
        viewport.set_max_bounds(config.max_bounds.clone());
        viewport.set_center(config.initial_center);

        Self {
            records: Vec::new(),
            state: ViewportState {
                zoom: config.initial_zoom,
                filter: StatusFilter::All,
            },
            viewport,
            boundary: None,
            notice: None,
            min_marker_zoom: config.min_marker_zoom,
            search_zoom: config.search_zoom,
        }
    }

    /// Applies one state transition
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::RecordsLoaded(records) => {
                log::debug!("session loaded {} records", records.len());
                self.records = records;
                self.notice = None;
            }
            SessionEvent::LoadFailed(message) => {
                // Stale-but-consistent: the last good collection stays.
                log::warn!("record load failed: {message}");
                self.notice = Some(message);
            }
            SessionEvent::ZoomChanged(zoom) => {
                self.state.zoom = zoom;
                self.viewport.set_zoom(f64::from(zoom));
            }
            SessionEvent::FilterChanged(filter) => {
                self.state.filter = filter;
            }
            SessionEvent::SearchResolved(result) => {
                self.viewport
                    .fly_to(result.center, f64::from(self.search_zoom));
                self.state.zoom = self.search_zoom;
                self.boundary = Some(result.boundary);
                self.notice = None;
            }
            SessionEvent::SearchFailed(message) => {
                log::warn!("search failed: {message}");
                self.notice = Some(message);
            }
            SessionEvent::BoundaryCleared => {
                self.boundary = None;
            }
            SessionEvent::ViewportResized(size) => {
                self.viewport.set_size(size);
            }
            SessionEvent::Panned(delta) => {
                self.viewport.pan(delta);
            }
            SessionEvent::RecordDeleted(permit) => {
                self.records.retain(|record| record.permit != permit);
            }
        }
    }

    /// Records that pass the zoom, status, and coordinate gates
    pub fn visible_records(&self) -> Vec<&PlotRecord> {
        visible_above(&self.records, &self.state, self.min_marker_zoom)
    }

    /// Visible records paired with normalized positions for the renderer
    pub fn visible_markers(&self) -> Vec<PlotMarker<'_>> {
        markers_above(&self.records, &self.state, self.min_marker_zoom)
    }

    /// The overlay clip region for the current boundary and viewport.
    ///
    /// Derived on every call rather than cached: a new search and a
    /// pan/zoom both invalidate it, and both flow through this session's
    /// state, so recomputation keeps the two triggers in one place.
    pub fn clip_path(&self) -> Option<ClipPath> {
        compute_clip_path(self.boundary.as_ref(), self.viewport.projector())
    }

    pub fn records(&self) -> &[PlotRecord] {
        &self.records
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.state
    }

    pub fn boundary(&self) -> Option<&BoundaryPolygon> {
        self.boundary.as_ref()
    }

    /// The pending user-visible notice, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Takes the pending notice, leaving none
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
