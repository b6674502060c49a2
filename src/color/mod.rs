//! Color models and conversions
//!
//! Four immutable value types, each validated on construction:
//!
//! - [`HexColor`] - `#rrggbb` strings, short form and hash handling
//! - [`RgbColor`] - 8-bit channels, the pivot for every conversion
//! - [`HslColor`] - hue in degrees, saturation and lightness in percent
//! - [`CmykColor`] - cyan, magenta, yellow and key in percent
//!
//! [`Color`] wraps any of them for conversions chosen at runtime.
//!
//! Conversions round to integers at every step, so HSL and CMYK round trips
//! may drift by a unit. Hex and RGB round trip exactly.

pub mod cmyk;
pub mod convert;
pub mod hex;
pub mod hsl;
pub mod rgb;
pub mod validate;

pub use cmyk::CmykColor;
pub use convert::{Color, ColorModel, ParseModelError};
pub use hex::HexColor;
pub use hsl::HslColor;
pub use rgb::RgbColor;
