//! # mapfit
//!
//! A small, pure geometry library for framing points on a static map.
//!
//! Static map images cannot pick a zoom level for you the way an
//! interactive map does, so this crate answers the one question a static
//! map caller has to solve numerically: given a set of latitude/longitude
//! points and a target image size, which zoom level shows them all with
//! the most detail? It provides a spherical ("web") Mercator projection
//! with precomputed per-zoom scaling tables, pixel conversion in both
//! directions, and a bounds-to-zoom fitting search, plus the small
//! geometry helpers (bounding boxes, centers, clamping) that feed it.
//!
//! Everything here is deterministic, synchronous computation with no I/O;
//! a [`Mercator`] engine is immutable after construction and safe to
//! share across threads.

pub mod core;
pub mod prelude;

// Re-export public API
pub use crate::core::{
    framing::{Framer, FramingConfig, MapFrame},
    geo::{bound, LatLng, LatLngBounds, PixelPoint, ViewportSize},
    projection::Mercator,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
///
/// Every variant signals a caller defect (bad construction parameter,
/// out-of-range zoom index, empty input), never a transient condition;
/// retrying without fixing the input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("max zoom level must be at least 1")]
    InvalidMaxZoom,

    #[error("zoom level {zoom} outside projection table range 0..{max_zoom}")]
    ZoomOutOfRange { zoom: u8, max_zoom: u8 },

    #[error("cannot compute bounds from an empty point set")]
    EmptyPoints,
}

/// Error type alias for convenience
pub type Error = MapError;
