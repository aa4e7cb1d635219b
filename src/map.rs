//! Map viewport state: endpoint markers, the route line and bounds fitting
//!
//! The controller owns every mutable map artifact so no other component can
//! leave the viewport out of sync with the latest selections. At most one
//! start marker, one end marker and one route line exist at a time.
use crate::geo::{Bounds, Location};

/// A labeled point marker with an attached popup
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    location: Location,
    label: String,
    popup_open: bool,
}

impl Marker {
    /// Create a marker at the given location with its popup opened
    pub fn new(location: Location, label: String) -> Self {
        Marker {
            location,
            label,
            popup_open: true,
        }
    }

    /// Move the marker, preserving its label and popup state
    pub fn move_to(&mut self, location: Location) {
        self.location = location;
    }

    /// Close the marker's popup
    pub fn close_popup(&mut self) {
        self.popup_open = false;
    }

    /// Return the marker's position
    pub fn location(&self) -> Location {
        self.location
    }

    /// Return the popup label text
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return true while the popup is showing
    pub fn popup_open(&self) -> bool {
        self.popup_open
    }
}

/// Owns the map viewport and keeps markers and the route line consistent
/// with the latest endpoint selections and routing results
#[derive(Debug)]
pub struct MapView {
    center: Location,
    zoom: u8,
    bounds: Option<Bounds>,
    start_marker: Option<Marker>,
    end_marker: Option<Marker>,
    route_line: Option<Vec<Location>>,
}

impl MapView {
    /// Create the viewport once at a default center and zoom level
    pub fn new(center: Location, zoom: u8) -> Self {
        MapView {
            center,
            zoom,
            bounds: None,
            start_marker: None,
            end_marker: None,
            route_line: None,
        }
    }

    /// Place or move the endpoint markers and refit the viewport around them
    ///
    /// Any existing route line is removed first, a stale route must never be
    /// shown against new endpoints. Existing markers are repositioned in
    /// place so their identity and popup state carry over, new markers open
    /// their popup immediately.
    pub fn set_endpoints(&mut self, start: Location, end: Location) {
        self.route_line = None;

        match self.start_marker.as_mut() {
            Some(marker) => marker.move_to(start),
            None => self.start_marker = Some(Marker::new(start, "Start Point".to_string())),
        }
        match self.end_marker.as_mut() {
            Some(marker) => marker.move_to(end),
            None => self.end_marker = Some(Marker::new(end, "End Point".to_string())),
        }

        // adjust the viewport to frame both markers
        if let Some(bounds) = Bounds::fit(&[start, end]) {
            self.center = bounds.center();
            self.bounds = Some(bounds);
        }
    }

    /// Close the popups of any placed markers, leaving the markers in place
    ///
    /// Repositioning a marker afterwards keeps its popup closed, popups only
    /// open when a marker is first created.
    pub fn close_popups(&mut self) {
        if let Some(marker) = self.start_marker.as_mut() {
            marker.close_popup();
        }
        if let Some(marker) = self.end_marker.as_mut() {
            marker.close_popup();
        }
    }

    /// Store the route line connecting the ordered points
    ///
    /// Only one route line exists at a time, the prior line was already
    /// cleared by `set_endpoints` before a new route arrives.
    pub fn draw_route(&mut self, points: Vec<Location>) {
        self.route_line = Some(points);
    }

    /// Return the current viewport center
    pub fn center(&self) -> Location {
        self.center
    }

    /// Return the viewport zoom level
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Return the bounds framing both endpoints, if endpoints were set
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Return the start marker, if one has been placed
    pub fn start_marker(&self) -> Option<&Marker> {
        self.start_marker.as_ref()
    }

    /// Return the end marker, if one has been placed
    pub fn end_marker(&self) -> Option<&Marker> {
        self.end_marker.as_ref()
    }

    /// Return the points of the current route line, if one is drawn
    pub fn route_line(&self) -> Option<&[Location]> {
        self.route_line.as_deref()
    }
}
