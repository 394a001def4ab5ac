use crate::core::constants::DEFAULT_VIEWPORT;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A point projected into pixel space at a specific zoom level.
///
/// Only meaningful at the zoom level used to produce it; pixel points from
/// different zoom levels must never be compared. Coordinates are signed
/// because antimeridian unwrapping in the zoom search shifts the west edge
/// of a bounding box by a full world width, which can go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Target map image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        Self::new(width, height)
    }
}

/// Represents a bounding box of geographical coordinates
///
/// Invariant: `south_west.lat <= north_east.lat`. Longitude ordering is NOT
/// guaranteed; a box spanning the antimeridian has `south_west.lng >
/// north_east.lng` and is handled in pixel space by the zoom search.
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

    /// Computes the bounding box of a set of points.
    ///
    /// Takes the numeric min/max of latitude and longitude across all
    /// points. Known limitation: for point sets spanning the antimeridian
    /// this produces a box running the "long way" around the globe, since
    /// no wraparound-aware grouping is attempted.
    pub fn from_points(points: &[LatLng]) -> Result<Self> {
        let first = points.first().ok_or(MapError::EmptyPoints)?;
        let mut bounds = Self::new(*first, *first);
        for point in &points[1..] {
            bounds.extend(point);
        }
        Ok(bounds)
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Gets the center point of the bounds.
    ///
    /// Written as northeast minus half the delta rather than the plain
    /// midpoint sum, matching the static-map convention this engine
    /// reproduces pixel-for-pixel.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - (self.north_east.lat - self.south_west.lat) / 2.0,
            self.north_east.lng - (self.north_east.lng - self.south_west.lng) / 2.0,
        )
    }
}

/// Clamps `value` into `[min, max]`, where either bound may be absent.
pub fn bound(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut value = value;
    if let Some(min) = min {
        value = value.max(min);
    }
    if let Some(max) = max {
        value = value.min(max);
    }
    value
}
