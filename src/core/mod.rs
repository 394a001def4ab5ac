pub mod constants;
pub mod framing;
pub mod geo;
pub mod projection;

pub use framing::{Framer, FramingConfig, MapFrame};
pub use geo::{bound, LatLng, LatLngBounds, PixelPoint, ViewportSize};
pub use projection::Mercator;
