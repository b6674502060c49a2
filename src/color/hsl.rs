//! HSL colors and the RGB <-> HSL transforms

use serde::Serialize;

use crate::color::validate::{HUE, LIGHTNESS, SATURATION};
use crate::color::{CmykColor, HexColor, RgbColor};
use crate::core::error::Result;

/// Hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HslColor {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

/// Convert HSL to RGB channels in 0.0-1.0.
///
/// `hue` is in degrees, `saturation` and `lightness` are fractions.
pub(crate) fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [f64; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let second = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if hue < 60.0 {
        (chroma, second, 0.0)
    } else if hue < 120.0 {
        (second, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, second)
    } else if hue < 240.0 {
        (0.0, second, chroma)
    } else if hue < 300.0 {
        (second, 0.0, chroma)
    } else {
        (chroma, 0.0, second)
    };

    let modifier = lightness - chroma / 2.0;

    [r + modifier, g + modifier, b + modifier]
}

/// Convert RGB channels in 0.0-1.0 to unrounded `[hue°, saturation%, lightness%]`.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> [f64; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let lightness = (max + min) / 2.0;
    // exact comparison, any nonzero delta is chromatic
    let saturation = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    [(hue / 6.0) * 360.0, saturation * 100.0, lightness * 100.0]
}

impl HslColor {
    /// Create a color. Hue must be within 0-360, saturation and lightness within 0-100.
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> Result<Self> {
        let hue = HUE.check(hue)?;
        let saturation = SATURATION.check(saturation)?;
        let lightness = LIGHTNESS.check(lightness)?;

        Ok(Self {
            hue: hue as u16,
            saturation: saturation as u8,
            lightness: lightness as u8,
        })
    }

    /// Create a color from a hex string, example: `#fe02dc`
    pub fn from_hex_string(hex_string: &str) -> Result<Self> {
        Self::from_hex(&HexColor::parse(hex_string)?)
    }

    pub fn from_hex(hex: &HexColor) -> Result<Self> {
        Self::from_rgb(&RgbColor::from_hex(hex))
    }

    pub fn from_rgb(rgb: &RgbColor) -> Result<Self> {
        let [r, g, b] = rgb.normalized();
        let [hue, saturation, lightness] = rgb_to_hsl(r, g, b);

        Self::new(
            hue.round() as i32,
            saturation.round() as i32,
            lightness.round() as i32,
        )
    }

    pub fn from_cmyk(cmyk: &CmykColor) -> Result<Self> {
        Self::from_rgb(&RgbColor::from_cmyk(cmyk)?)
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn lightness(&self) -> u8 {
        self.lightness
    }

    pub fn to_rgb(&self) -> Result<RgbColor> {
        RgbColor::from_hsl(self)
    }

    pub fn to_hex(&self) -> Result<HexColor> {
        HexColor::from_hsl(self)
    }

    pub fn to_cmyk(&self) -> Result<CmykColor> {
        CmykColor::from_rgb(&self.to_rgb()?)
    }
}
