//! Prelude module for common mapfit types and helpers
//!
//! Re-exports the most commonly used types and functions for easy
//! importing with `use mapfit::prelude::*;`

pub use crate::core::{
    constants::{DEFAULT_MAX_ZOOM, TILE_SIZE},
    framing::{Framer, FramingConfig, MapFrame},
    geo::{bound, LatLng, LatLngBounds, PixelPoint, ViewportSize},
    projection::Mercator,
};

pub use crate::{Error as MapError, Result};
