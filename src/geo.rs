//! Geographic primitives shared across the crate
use serde::{Deserialize, Serialize};

/// Stores a single geospatial point
///
/// Every wire surface this application talks to (the place catalog and the
/// routing service) encodes points as two element `[latitude, longitude]`
/// arrays so the serde representation matches that layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Location {
    /// latitude coordinate in degrees
    latitude: f64,
    /// longitude coordinate in degrees
    longitude: f64,
}

impl Location {
    /// Create a location from coordinates provided in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
        }
    }

    /// Return latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Return longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<[f64; 2]> for Location {
    fn from(coords: [f64; 2]) -> Self {
        Location::new(coords[0], coords[1])
    }
}

impl From<Location> for [f64; 2] {
    fn from(location: Location) -> [f64; 2] {
        [location.latitude, location.longitude]
    }
}

/// Axis aligned bounding box used to fit the map viewport around points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl Bounds {
    /// Return the smallest box containing every point, or None for an empty slice
    pub fn fit(points: &[Location]) -> Option<Bounds> {
        let first = points.first()?;
        let mut bounds = Bounds {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };
        for point in &points[1..] {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    /// Return a box spanning `half_span` degrees out from the center in each direction
    pub fn around(center: Location, half_span: f64) -> Bounds {
        Bounds {
            south: center.latitude - half_span,
            west: center.longitude - half_span,
            north: center.latitude + half_span,
            east: center.longitude + half_span,
        }
    }

    /// Grow the box to include the given point
    pub fn extend(&mut self, point: Location) {
        if point.latitude < self.south {
            self.south = point.latitude
        }
        if point.latitude > self.north {
            self.north = point.latitude
        }
        if point.longitude < self.west {
            self.west = point.longitude
        }
        if point.longitude > self.east {
            self.east = point.longitude
        }
    }

    /// Return the midpoint of the box
    pub fn center(&self) -> Location {
        Location::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Expand each side by `fraction` of the box's span so points sitting on
    /// the edge stay visible, a minimum pad keeps zero area boxes drawable
    pub fn padded(&self, fraction: f64) -> Bounds {
        let lat_pad = ((self.north - self.south) * fraction).max(0.0005);
        let lon_pad = ((self.east - self.west) * fraction).max(0.0005);
        Bounds {
            south: self.south - lat_pad,
            west: self.west - lon_pad,
            north: self.north + lat_pad,
            east: self.east + lon_pad,
        }
    }

    /// Return the southern latitude limit in degrees
    pub fn south(&self) -> f64 {
        self.south
    }

    /// Return the western longitude limit in degrees
    pub fn west(&self) -> f64 {
        self.west
    }

    /// Return the northern latitude limit in degrees
    pub fn north(&self) -> f64 {
        self.north
    }

    /// Return the eastern longitude limit in degrees
    pub fn east(&self) -> f64 {
        self.east
    }
}
