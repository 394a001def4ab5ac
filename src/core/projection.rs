//! Spherical Mercator projection with per-zoom scaling tables.
//!
//! Interactive map APIs pick a zoom level for you; a static map image
//! cannot. The [`Mercator`] engine here does the missing piece: it projects
//! lat/lng to pixel coordinates at any zoom level in its table, and
//! searches the table for the deepest zoom at which a geographic bounding
//! box still fits a target image size.

use crate::core::constants::{DEFAULT_MAX_ZOOM, SINY_BOUND, TILE_SIZE};
use crate::core::geo::{bound, LatLng, LatLngBounds, PixelPoint, ViewportSize};
use crate::{MapError, Result};
use std::f64::consts::PI;

/// Per-zoom-level scaling constants.
///
/// At zoom `z` the whole map is `256 * 2^z` pixels per axis; the other
/// fields are derived from that extent once at engine construction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ZoomScale {
    /// Pixels per degree of longitude.
    pixels_per_lon_degree: f64,
    /// Pixels per radian of longitude; scales the Mercator y term.
    pixels_per_lon_radian: f64,
    /// Pixel coordinate of (0°, 0°); the extent midpoint on both axes.
    origin: f64,
    /// Total pixel extent, also the world wrap width at this zoom.
    pixel_range: i64,
}

fn build_scales(max_zoom: u8) -> Vec<ZoomScale> {
    let mut scales = Vec::with_capacity(max_zoom as usize);
    let mut extent = f64::from(TILE_SIZE);
    for _ in 0..max_zoom {
        scales.push(ZoomScale {
            pixels_per_lon_degree: extent / 360.0,
            pixels_per_lon_radian: extent / (2.0 * PI),
            origin: extent / 2.0,
            pixel_range: extent as i64,
        });
        extent *= 2.0;
    }
    scales
}

/// Spherical Mercator projection engine.
///
/// The scaling table is a pure function of the configured max zoom level,
/// built once at construction and never mutated, so one engine can be
/// shared read-only across any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Mercator {
    scales: Vec<ZoomScale>,
}

impl Mercator {
    /// Creates an engine with zoom levels `0..max_zoom`.
    pub fn new(max_zoom: u8) -> Result<Self> {
        if max_zoom == 0 {
            return Err(MapError::InvalidMaxZoom);
        }
        log::debug!("building mercator scale table for zoom levels 0..{max_zoom}");
        Ok(Self {
            scales: build_scales(max_zoom),
        })
    }

    /// Number of zoom levels in the table; valid zooms are `0..max_zoom()`.
    pub fn max_zoom(&self) -> u8 {
        self.scales.len() as u8
    }

    fn scale(&self, zoom: u8) -> Result<&ZoomScale> {
        self.scales
            .get(zoom as usize)
            .ok_or(MapError::ZoomOutOfRange {
                zoom,
                max_zoom: self.max_zoom(),
            })
    }

    /// Projects a geographic point to pixel coordinates at `zoom`.
    pub fn project(&self, lat_lng: &LatLng, zoom: u8) -> Result<PixelPoint> {
        Ok(project_with(self.scale(zoom)?, lat_lng))
    }

    /// Inverse of [`project`](Self::project): pixel coordinates back to
    /// lat/lng at `zoom`. Exact up to the rounding done when projecting,
    /// so a round trip recovers the original point to within one pixel.
    pub fn unproject(&self, pixel: &PixelPoint, zoom: u8) -> Result<LatLng> {
        let scale = self.scale(zoom)?;
        let lng = (pixel.x as f64 - scale.origin) / scale.pixels_per_lon_degree;
        let merc_y = (scale.origin - pixel.y as f64) / scale.pixels_per_lon_radian;
        let lat = (2.0 * merc_y.exp().atan() - PI / 2.0).to_degrees();
        Ok(LatLng::new(lat, lng))
    }

    /// Total pixel extent of the world at `zoom`; the distance to shift a
    /// pixel x coordinate when a box wraps the antimeridian.
    pub fn wrap_width(&self, zoom: u8) -> Result<i64> {
        Ok(self.scale(zoom)?.pixel_range)
    }

    /// Finds the deepest zoom level at which `bounds` fits inside
    /// `viewport`.
    ///
    /// Scans from the most zoomed-in level downward and returns the first
    /// level where both projected corner distances fit; since pixel extent
    /// halves with each step down, the first fit is the maximal zoom.
    /// Falls back to `0`, which always fits, if no deeper level does.
    /// Linear scan: the table is at most a couple dozen entries, so the
    /// monotone structure is not worth a binary search.
    pub fn zoom_for_bounds(&self, bounds: &LatLngBounds, viewport: ViewportSize) -> u8 {
        for zoom in (0..self.max_zoom()).rev() {
            let scale = &self.scales[zoom as usize];
            let mut south_west = project_with(scale, &bounds.south_west);
            let north_east = project_with(scale, &bounds.north_east);
            // A west edge east of the east edge means the box wraps the
            // antimeridian in pixel space; unwrap by one world width.
            if south_west.x > north_east.x {
                south_west.x -= scale.pixel_range;
            }
            let fits_x = (north_east.x - south_west.x).abs() <= i64::from(viewport.width);
            let fits_y = (north_east.y - south_west.y).abs() <= i64::from(viewport.height);
            if fits_x && fits_y {
                log::trace!(
                    "bounds fit {}x{} viewport at zoom {zoom}",
                    viewport.width,
                    viewport.height
                );
                return zoom;
            }
        }
        0
    }
}

impl Default for Mercator {
    fn default() -> Self {
        Self {
            scales: build_scales(DEFAULT_MAX_ZOOM),
        }
    }
}

fn project_with(scale: &ZoomScale, lat_lng: &LatLng) -> PixelPoint {
    let x = (scale.origin + lat_lng.lng * scale.pixels_per_lon_degree).round() as i64;
    let siny = bound(
        lat_lng.lat.to_radians().sin(),
        Some(-SINY_BOUND),
        Some(SINY_BOUND),
    );
    let y = (scale.origin
        + 0.5 * ((1.0 + siny) / (1.0 - siny)).ln() * -scale.pixels_per_lon_radian)
        .round() as i64;
    PixelPoint::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_construction() {
        let projection = Mercator::new(18).unwrap();
        assert_eq!(projection.max_zoom(), 18);
        assert_eq!(projection.wrap_width(0).unwrap(), 256);
        assert_eq!(projection.wrap_width(1).unwrap(), 512);
        assert_eq!(projection.wrap_width(17).unwrap(), 256 << 17);
    }

    #[test]
    fn test_zero_max_zoom_rejected() {
        assert_eq!(Mercator::new(0), Err(MapError::InvalidMaxZoom));
    }

    #[test]
    fn test_zoom_out_of_range() {
        let projection = Mercator::new(4).unwrap();
        let result = projection.project(&LatLng::default(), 4);
        assert_eq!(
            result,
            Err(MapError::ZoomOutOfRange {
                zoom: 4,
                max_zoom: 4
            })
        );
    }

    #[test]
    fn test_project_world_origin() {
        // Equator/prime-meridian lands at the center of the single
        // zoom-0 tile.
        let projection = Mercator::default();
        let pixel = projection.project(&LatLng::new(0.0, 0.0), 0).unwrap();
        assert_eq!(pixel, PixelPoint::new(128, 128));
    }

    #[test]
    fn test_project_poles_stay_finite() {
        let projection = Mercator::default();
        let north = projection.project(&LatLng::new(90.0, 0.0), 3).unwrap();
        let south = projection.project(&LatLng::new(-90.0, 0.0), 3).unwrap();

        // Clamping sin(lat) keeps the log finite and the poles symmetric
        // around the origin line.
        let origin = 1024;
        assert_eq!(north.y - origin, -(south.y - origin));
        assert!(north.y < origin && south.y > origin);
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let projection = Mercator::default();
        let points = [
            LatLng::new(0.0, 0.0),
            LatLng::new(34.05, -118.24),
            LatLng::new(-33.86, 151.21),
            LatLng::new(65.0, 25.5),
        ];
        for point in &points {
            let pixel = projection.project(point, 12).unwrap();
            let recovered = projection.unproject(&pixel, 12).unwrap();
            // One pixel at zoom 12 is well under 0.001 degrees.
            assert!((recovered.lat - point.lat).abs() < 0.001, "{point:?}");
            assert!((recovered.lng - point.lng).abs() < 0.001, "{point:?}");
        }
    }

    #[test]
    fn test_zoom_for_city_scale_bounds() {
        // ~20 km box over Los Angeles in a 256x256 viewport.
        let projection = Mercator::new(18).unwrap();
        let bounds = LatLngBounds::from_coords(34.0, -118.5, 34.2, -118.2);
        let zoom = projection.zoom_for_bounds(&bounds, ViewportSize::new(256, 256));

        assert!((8..=12).contains(&zoom), "zoom {zoom} outside 8..=12");
    }

    #[test]
    fn test_zoom_for_whole_world() {
        let projection = Mercator::default();
        let bounds = LatLngBounds::from_coords(-85.0, -180.0, 85.0, 180.0);
        let zoom = projection.zoom_for_bounds(&bounds, ViewportSize::new(256, 256));
        assert_eq!(zoom, 0);
    }

    #[test]
    fn test_zoom_for_antimeridian_bounds() {
        // A 20-degree box straddling the dateline: west edge at 170°E,
        // east edge at 170°W. Without unwrapping this would look like a
        // 340-degree box and force zoom 0.
        let projection = Mercator::default();
        let bounds = LatLngBounds::new(LatLng::new(-10.0, 170.0), LatLng::new(10.0, -170.0));
        let zoom = projection.zoom_for_bounds(&bounds, ViewportSize::new(256, 256));
        assert_eq!(zoom, 4);
    }

    #[test]
    fn test_zoom_monotonic_in_viewport() {
        let projection = Mercator::default();
        let bounds = LatLngBounds::from_coords(34.0, -118.5, 34.2, -118.2);

        let mut last = 0;
        for size in [64, 128, 256, 512, 1024] {
            let zoom = projection.zoom_for_bounds(&bounds, ViewportSize::new(size, size));
            assert!(zoom >= last, "viewport {size} decreased zoom");
            last = zoom;
        }
    }

    #[test]
    fn test_zoom_monotonic_in_bounds() {
        let projection = Mercator::default();
        let viewport = ViewportSize::new(256, 256);

        let mut last = u8::MAX;
        for half_span in [0.01, 0.1, 1.0, 10.0, 60.0] {
            let bounds =
                LatLngBounds::from_coords(-half_span, -half_span, half_span, half_span);
            let zoom = projection.zoom_for_bounds(&bounds, viewport);
            assert!(zoom <= last, "half span {half_span} increased zoom");
            assert!(zoom < projection.max_zoom());
            last = zoom;
        }
    }

    #[test]
    fn test_zoom_for_degenerate_bounds() {
        // A single-point box fits at the deepest level.
        let projection = Mercator::default();
        let point = LatLng::new(13.75, 100.5);
        let bounds = LatLngBounds::new(point, point);
        let zoom = projection.zoom_for_bounds(&bounds, ViewportSize::new(256, 256));
        assert_eq!(zoom, projection.max_zoom() - 1);
    }
}
