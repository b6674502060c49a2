//! Hexadecimal color strings
//!
//! A [`HexColor`] always holds the long `#rrggbb` form. Short input such as
//! `#abc` is expanded by doubling each digit, a missing `#` is added unless
//! strict mode is requested, and the case of the digits is left untouched.
//!
//! # Example
//!
//! ```rust
//! use color_models::color::HexColor;
//!
//! let hex = HexColor::new("c2b", false).unwrap();
//! assert_eq!(hex.hex_string(), "#cc22bb");
//! assert!(!HexColor::is_valid("c2b", true));
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Serialize, Serializer};

use crate::color::{CmykColor, HslColor, RgbColor};
use crate::core::error::{ColorError, Result};

/// Decode a single ASCII hex digit.
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// A color written as a `#rrggbb` hex string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    value: String,
    channels: [u8; 3],
}

impl HexColor {
    /// Parse a hex string.
    ///
    /// Accepts 3 or 6 hex digits with an optional leading `#`. In `strict`
    /// mode the `#` is required.
    pub fn new(input: &str, strict: bool) -> Result<Self> {
        let (has_hash, digits) = match input.strip_prefix('#') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let bytes = digits.as_bytes();
        let nibbles: Vec<u8> = bytes
            .iter()
            .map(|&c| nibble(c))
            .collect::<Option<_>>()
            .ok_or_else(|| ColorError::malformed_hex(input))?;

        let mut value = String::with_capacity(7);
        value.push('#');

        let channels = match nibbles.len() {
            3 => {
                for c in digits.chars() {
                    value.push(c);
                    value.push(c);
                }
                [nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17]
            }
            6 => {
                value.push_str(digits);
                [
                    nibbles[0] << 4 | nibbles[1],
                    nibbles[2] << 4 | nibbles[3],
                    nibbles[4] << 4 | nibbles[5],
                ]
            }
            _ => return Err(ColorError::malformed_hex(input)),
        };

        if strict && !has_hash {
            return Err(ColorError::missing_hash(input));
        }

        if value.len() != input.len() {
            debug!("canonicalized hex color {:?} to {:?}", input, value);
        }

        Ok(Self { value, channels })
    }

    /// Lenient parse, the `#` is optional.
    pub fn parse(input: &str) -> Result<Self> {
        Self::new(input, false)
    }

    /// Check whether `input` would be accepted by [`HexColor::new`].
    pub fn is_valid(input: &str, strict: bool) -> bool {
        match Self::new(input, strict) {
            Ok(_) => true,
            Err(ColorError::InvalidColor(_)) => false,
        }
    }

    /// Build from already validated channel bytes, rendered in lowercase.
    pub(crate) fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self {
            value: format!("#{:02x}{:02x}{:02x}", red, green, blue),
            channels: [red, green, blue],
        }
    }

    pub fn from_rgb(rgb: &RgbColor) -> Self {
        Self::from_channels(rgb.red(), rgb.green(), rgb.blue())
    }

    pub fn from_hsl(hsl: &HslColor) -> Result<Self> {
        Ok(Self::from_rgb(&RgbColor::from_hsl(hsl)?))
    }

    pub fn from_cmyk(cmyk: &CmykColor) -> Result<Self> {
        Ok(Self::from_rgb(&RgbColor::from_cmyk(cmyk)?))
    }

    /// The canonical `#rrggbb` string.
    pub fn hex_string(&self) -> &str {
        &self.value
    }

    /// The red, green and blue digit pairs, in that order, without the `#`.
    pub fn parts(&self) -> (&str, &str, &str) {
        (&self.value[1..3], &self.value[3..5], &self.value[5..7])
    }

    /// The decoded red, green and blue bytes.
    pub fn channels(&self) -> [u8; 3] {
        self.channels
    }

    /// Same color regardless of digit case.
    pub fn same_color(&self, other: &HexColor) -> bool {
        self.channels == other.channels
    }

    /// Copy of this color with the digits in uppercase.
    pub fn to_uppercase(&self) -> Self {
        Self {
            value: self.value.to_ascii_uppercase(),
            channels: self.channels,
        }
    }

    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hex(self)
    }

    pub fn to_hsl(&self) -> Result<HslColor> {
        HslColor::from_hex(self)
    }

    pub fn to_cmyk(&self) -> Result<CmykColor> {
        CmykColor::from_hex(self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self::from_rgb(&rgb)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
