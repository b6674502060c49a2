//! RGB colors, the pivot every other model converts through

use serde::Serialize;

use crate::color::validate::{BLUE, GREEN, RED};
use crate::color::{cmyk, hsl, CmykColor, HexColor, HslColor};
use crate::core::error::Result;

/// An additive color with 8-bit red, green and blue channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Create a color, each channel must be within 0-255.
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self> {
        let red = RED.check(red)?;
        let green = GREEN.check(green)?;
        let blue = BLUE.check(blue)?;

        Ok(Self {
            red: red as u8,
            green: green as u8,
            blue: blue as u8,
        })
    }

    /// Create a color from a hex string, example: `#fe02dc`
    pub fn from_hex_string(hex_string: &str) -> Result<Self> {
        Ok(Self::from_hex(&HexColor::parse(hex_string)?))
    }

    pub fn from_hex(hex: &HexColor) -> Self {
        let [red, green, blue] = hex.channels();
        Self { red, green, blue }
    }

    pub fn from_hsl(hsl: &HslColor) -> Result<Self> {
        let [r, g, b] = hsl::hsl_to_rgb(
            f64::from(hsl.hue()),
            f64::from(hsl.saturation()) / 100.0,
            f64::from(hsl.lightness()) / 100.0,
        );

        Self::new(
            (r * 255.0).round() as i32,
            (g * 255.0).round() as i32,
            (b * 255.0).round() as i32,
        )
    }

    pub fn from_cmyk(cmyk: &CmykColor) -> Result<Self> {
        let [r, g, b] = cmyk::cmyk_to_rgb(
            f64::from(cmyk.cyan()) / 100.0,
            f64::from(cmyk.magenta()) / 100.0,
            f64::from(cmyk.yellow()) / 100.0,
            f64::from(cmyk.key()) / 100.0,
        );

        Self::new(r.round() as i32, g.round() as i32, b.round() as i32)
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Channels scaled to 0.0-1.0.
    pub(crate) fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        ]
    }

    pub fn to_hex(&self) -> HexColor {
        HexColor::from_rgb(self)
    }

    pub fn to_hsl(&self) -> Result<HslColor> {
        HslColor::from_rgb(self)
    }

    pub fn to_cmyk(&self) -> Result<CmykColor> {
        CmykColor::from_rgb(self)
    }

    /// The lowercase `#rrggbb` form of this color.
    pub fn hex_string(&self) -> String {
        self.to_hex().hex_string().to_string()
    }
}

impl From<&HexColor> for RgbColor {
    fn from(hex: &HexColor) -> Self {
        Self::from_hex(hex)
    }
}

impl From<HexColor> for RgbColor {
    fn from(hex: HexColor) -> Self {
        Self::from_hex(&hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_valid_values() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (50, 50, 50), (60, 120, 180)] {
            let rgb = RgbColor::new(r, g, b).unwrap();
            assert_eq!(
                (i32::from(rgb.red()), i32::from(rgb.green()), i32::from(rgb.blue())),
                (r, g, b)
            );
        }
    }

    #[test]
    fn test_invalid_red() {
        for r in [-1, -10, 256, 512] {
            let err = RgbColor::new(r, 66, 66).unwrap_err();
            assert!(err.message().contains("red"));
        }
    }

    #[test]
    fn test_invalid_green() {
        for g in [-1, -10, 256, 512] {
            let err = RgbColor::new(66, g, 66).unwrap_err();
            assert!(err.message().contains("green"));
        }
    }

    #[test]
    fn test_invalid_blue() {
        for b in [-1, -10, 256, 512] {
            let err = RgbColor::new(66, 66, b).unwrap_err();
            assert!(err.message().contains("blue"));
        }
    }

    #[test]
    fn test_first_invalid_field_is_reported() {
        let err = RgbColor::new(300, -5, 999).unwrap_err();
        assert!(err.message().contains("red"));
        let err = RgbColor::new(0, -5, 999).unwrap_err();
        assert!(err.message().contains("green"));
    }

    #[test]
    fn test_from_hex_string() {
        let cases = [
            ("#36E149", 54, 225, 73),
            ("#965D52", 150, 93, 82),
            ("#30ECD8", 48, 236, 216),
            ("#E0A280", 224, 162, 128),
            ("#ffffff", 255, 255, 255),
            ("#000000", 0, 0, 0),
        ];
        for (hex, r, g, b) in cases {
            assert_eq!(
                RgbColor::from_hex_string(hex).unwrap(),
                RgbColor::new(r, g, b).unwrap()
            );
        }
    }

    #[test]
    fn test_from_hex_string_rejects_garbage() {
        assert!(RgbColor::from_hex_string("#ffddxx").is_err());
    }

    #[test]
    fn test_from_hsl() {
        let cases = [
            ((0, 0, 100), (255, 255, 255)),
            ((0, 0, 0), (0, 0, 0)),
            ((336, 73, 49), (216, 34, 107)),
            ((69, 50, 78), (219, 227, 171)),
            ((159, 33, 34), (58, 115, 95)),
        ];
        for ((h, s, l), (r, g, b)) in cases {
            let rgb = RgbColor::from_hsl(&HslColor::new(h, s, l).unwrap()).unwrap();
            assert_eq!(rgb, RgbColor::new(r, g, b).unwrap(), "hsl({}, {}, {})", h, s, l);
        }
    }

    #[test]
    fn test_from_cmyk() {
        let cases = [
            ((0, 0, 0, 0), (255, 255, 255)),
            ((100, 100, 100, 100), (0, 0, 0)),
            ((50, 50, 50, 50), (64, 64, 64)),
            ((25, 62, 40, 65), (67, 34, 54)),
            ((0, 62, 40, 86), (36, 14, 21)),
            ((100, 62, 40, 55), (0, 44, 69)),
        ];
        for ((c, m, y, k), (r, g, b)) in cases {
            let rgb = RgbColor::from_cmyk(&CmykColor::new(c, m, y, k).unwrap()).unwrap();
            assert_eq!(rgb, RgbColor::new(r, g, b).unwrap());
        }
    }

    #[test]
    fn test_to_hex_is_lowercase_and_padded() {
        assert_eq!(RgbColor::new(0, 10, 255).unwrap().hex_string(), "#000aff");
    }

    #[test]
    fn test_hex_round_trip_is_exact() {
        for value in 0..=255 {
            let rgb = RgbColor::new(value, 255 - value, value / 2).unwrap();
            assert_eq!(RgbColor::from(rgb.to_hex()), rgb);
        }

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let rgb = RgbColor::new(
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
            )
            .unwrap();
            let parsed = RgbColor::from_hex_string(&rgb.hex_string()).unwrap();
            assert_eq!(parsed, rgb);
        }
    }

    #[test]
    fn test_converts_to_other_models() {
        let rgb = RgbColor::new(60, 120, 180).unwrap();
        assert!(rgb.to_hsl().is_ok());
        assert!(rgb.to_cmyk().is_ok());
        assert_eq!(rgb.to_hex().hex_string(), "#3c78b4");
    }
}
