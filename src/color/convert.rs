//! Cross-model conversions on a single dynamic color type
//!
//! [`Color`] wraps any of the four models so callers that only learn the
//! source and target model at runtime (the CLI, config driven tools) can
//! convert without matching on every pair themselves. Everything routes
//! through RGB.
//!
//! Text input is either a hex string or functional notation:
//!
//! * `rgb(r, g, b)`
//! * `hsl(h, s%, l%)`
//! * `cmyk(c%, m%, y%, k%)`
//!
//! Percent signs are optional and the function name is case-insensitive.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::color::{CmykColor, HexColor, HslColor, RgbColor};
use crate::core::error::{ColorError, Result};

/// The four supported color models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
}

impl ColorModel {
    pub const ALL: [ColorModel; 4] = [
        ColorModel::Hex,
        ColorModel::Rgb,
        ColorModel::Hsl,
        ColorModel::Cmyk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorModel::Hex => "hex",
            ColorModel::Rgb => "rgb",
            ColorModel::Hsl => "hsl",
            ColorModel::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a color model name is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color model \"{0}\", expected one of: hex, rgb, hsl, cmyk")]
pub struct ParseModelError(pub String);

impl FromStr for ColorModel {
    type Err = ParseModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ColorModel::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModelError(s.to_string()))
    }
}

/// A color in any of the supported models
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "model", content = "value", rename_all = "lowercase")]
pub enum Color {
    Hex(HexColor),
    Rgb(RgbColor),
    Hsl(HslColor),
    Cmyk(CmykColor),
}

/// Strip `name(` and `)` from already lowercased input.
fn function_args<'a>(lower: &'a str, name: &str) -> Option<&'a str> {
    lower
        .strip_prefix(name)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
}

/// Parse exactly `N` comma separated integers, each optionally suffixed by `%`.
fn components<const N: usize>(args: &str, input: &str) -> Result<[i32; N]> {
    let values = args
        .split(',')
        .map(|part| part.trim().trim_end_matches('%').trim_end().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| ColorError::unrecognized(input))?;

    <[i32; N]>::try_from(values).map_err(|_| ColorError::unrecognized(input))
}

impl Color {
    /// Parse a hex string or functional color notation.
    ///
    /// `strict` only applies to hex input and requires the leading `#`.
    pub fn parse(input: &str, strict: bool) -> Result<Self> {
        let lower = input.trim().to_ascii_lowercase();

        if let Some(args) = function_args(&lower, "cmyk") {
            let [c, m, y, k] = components::<4>(args, input)?;
            return Ok(Color::Cmyk(CmykColor::new(c, m, y, k)?));
        }
        if let Some(args) = function_args(&lower, "rgb") {
            let [r, g, b] = components::<3>(args, input)?;
            return Ok(Color::Rgb(RgbColor::new(r, g, b)?));
        }
        if let Some(args) = function_args(&lower, "hsl") {
            let [h, s, l] = components::<3>(args, input)?;
            return Ok(Color::Hsl(HslColor::new(h, s, l)?));
        }

        Ok(Color::Hex(HexColor::new(input, strict)?))
    }

    pub fn model(&self) -> ColorModel {
        match self {
            Color::Hex(_) => ColorModel::Hex,
            Color::Rgb(_) => ColorModel::Rgb,
            Color::Hsl(_) => ColorModel::Hsl,
            Color::Cmyk(_) => ColorModel::Cmyk,
        }
    }

    /// The pivot representation.
    pub fn to_rgb(&self) -> Result<RgbColor> {
        match self {
            Color::Hex(hex) => Ok(hex.to_rgb()),
            Color::Rgb(rgb) => Ok(*rgb),
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
        }
    }

    /// Convert to `target`. Converting to the current model returns an unchanged copy.
    pub fn convert(&self, target: ColorModel) -> Result<Color> {
        if self.model() == target {
            return Ok(self.clone());
        }

        let rgb = self.to_rgb()?;
        let converted = match target {
            ColorModel::Hex => Color::Hex(rgb.to_hex()),
            ColorModel::Rgb => Color::Rgb(rgb),
            ColorModel::Hsl => Color::Hsl(rgb.to_hsl()?),
            ColorModel::Cmyk => Color::Cmyk(rgb.to_cmyk()?),
        };

        debug!("converted {} to {}", self, converted);
        Ok(converted)
    }

    /// This color in every model, in [`ColorModel::ALL`] order.
    pub fn all_representations(&self) -> Result<Vec<Color>> {
        ColorModel::ALL
            .into_iter()
            .map(|model| self.convert(model))
            .collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(hex) => write!(f, "{}", hex),
            Color::Rgb(rgb) => write!(f, "rgb({}, {}, {})", rgb.red(), rgb.green(), rgb.blue()),
            Color::Hsl(hsl) => write!(
                f,
                "hsl({}, {}%, {}%)",
                hsl.hue(),
                hsl.saturation(),
                hsl.lightness()
            ),
            Color::Cmyk(cmyk) => write!(
                f,
                "cmyk({}%, {}%, {}%, {}%)",
                cmyk.cyan(),
                cmyk.magenta(),
                cmyk.yellow(),
                cmyk.key()
            ),
        }
    }
}

impl From<HexColor> for Color {
    fn from(hex: HexColor) -> Self {
        Color::Hex(hex)
    }
}

impl From<RgbColor> for Color {
    fn from(rgb: RgbColor) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<HslColor> for Color {
    fn from(hsl: HslColor) -> Self {
        Color::Hsl(hsl)
    }
}

impl From<CmykColor> for Color {
    fn from(cmyk: CmykColor) -> Self {
        Color::Cmyk(cmyk)
    }
}
