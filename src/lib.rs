//! Color Models Library
//!
//! Conversion between four common color representations: hex strings, RGB,
//! HSL and CMYK. Every value is validated when it is constructed, so an
//! out-of-range color can never exist, and every conversion produces a new
//! immutable value.
//!
//! # Architecture
//!
//! - [`color`] - The four color models, their conversions and the dynamic
//!   [`color::Color`] wrapper
//! - [`core`] - Error types and configuration
//! - [`cli`] - Command-line interface (only used by the binary)
//!
//! # Example Usage
//!
//! ```rust
//! use color_models::color::{CmykColor, HexColor, HslColor, RgbColor};
//!
//! fn main() -> color_models::core::error::Result<()> {
//!     let hex = HexColor::parse("#f97415")?;
//!     let hsl = hex.to_hsl()?;
//!     assert_eq!((hsl.hue(), hsl.saturation(), hsl.lightness()), (25, 95, 53));
//!
//!     let rgb = RgbColor::new(255, 0, 0)?;
//!     assert_eq!(rgb.to_cmyk()?, CmykColor::new(0, 100, 100, 0)?);
//!
//!     assert!(HslColor::new(361, 0, 0).is_err());
//!     Ok(())
//! }
//! ```
//!
//! Conversions chosen at runtime go through [`color::Color`]:
//!
//! ```rust
//! use color_models::color::{Color, ColorModel};
//!
//! let color = Color::parse("cmyk(50%, 50%, 50%, 50%)", false).unwrap();
//! assert_eq!(color.convert(ColorModel::Hex).unwrap().to_string(), "#404040");
//! ```
//!
//! # Rounding
//!
//! All components are integers. HSL and CMYK conversions round at each step,
//! so chained conversions may drift by a unit per channel. Hex and RGB share
//! the same 24-bit space and round trip exactly.

pub mod cli;
pub mod color;
pub mod core;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
