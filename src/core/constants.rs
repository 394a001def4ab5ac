//! Core constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels; the world is one tile at zoom 0.
pub const TILE_SIZE: u32 = 256;

/// Deepest zoom level built into a projection table by default.
pub const DEFAULT_MAX_ZOOM: u8 = 18;

/// Clamp for sin(latitude) before the Mercator logarithm.
/// Keeps the projected y finite at the poles (±90°).
pub const SINY_BOUND: f64 = 0.9999;

/// Default static map image dimensions in pixels.
pub const DEFAULT_VIEWPORT: (u32, u32) = (256, 256);
