//! Turns a set of points into a framed static map view.
//!
//! This is the one composition every caller of the projection engine
//! performs: bounding box from the points, center from the box, zoom from
//! the box and the image size, and a projected pixel marker per point.

use crate::core::geo::{LatLng, LatLngBounds, PixelPoint, ViewportSize};
use crate::core::projection::Mercator;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Framer`].
///
/// Passed in explicitly at construction; the viewport and zoom depth are
/// deployment choices, not ambient globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramingConfig {
    /// Target map image dimensions the zoom search must fit within.
    pub viewport: ViewportSize,
    /// Zoom table depth for the projection engine.
    pub max_zoom: u8,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportSize::default(),
            max_zoom: crate::core::constants::DEFAULT_MAX_ZOOM,
        }
    }
}

/// A fully framed map view: everything needed to build a static map
/// image URL or display payload for a set of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFrame {
    /// Geographic center of the framed points.
    pub center: LatLng,
    /// Deepest zoom level at which all points fit the viewport.
    pub zoom: u8,
    /// Each input point projected to pixel space at `zoom`, in input order.
    pub markers: Vec<PixelPoint>,
}

/// Frames point sets into map views with a fixed viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Framer {
    projection: Mercator,
    viewport: ViewportSize,
}

impl Framer {
    pub fn new(config: FramingConfig) -> Result<Self> {
        Ok(Self {
            projection: Mercator::new(config.max_zoom)?,
            viewport: config.viewport,
        })
    }

    /// The engine backing this framer, for callers that need raw
    /// projection alongside framing.
    pub fn projection(&self) -> &Mercator {
        &self.projection
    }

    /// Frames `points` into a map view.
    ///
    /// A single point centers the view on it and frames at the deepest
    /// zoom level. Errors on an empty slice.
    pub fn frame(&self, points: &[LatLng]) -> Result<MapFrame> {
        let bounds = LatLngBounds::from_points(points)?;
        let zoom = self.projection.zoom_for_bounds(&bounds, self.viewport);
        let markers = points
            .iter()
            .map(|point| self.projection.project(point, zoom))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("framed {} point(s) at zoom {zoom}", points.len());
        Ok(MapFrame {
            center: bounds.center(),
            zoom,
            markers,
        })
    }
}

impl Default for Framer {
    fn default() -> Self {
        Self {
            projection: Mercator::default(),
            viewport: ViewportSize::default(),
        }
    }
}
