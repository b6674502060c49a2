//! CMYK colors and the RGB <-> CMYK transforms

use serde::Serialize;

use crate::color::validate::{CYAN, KEY, MAGENTA, YELLOW};
use crate::color::{HexColor, HslColor, RgbColor};
use crate::core::error::Result;

/// A subtractive color, every channel in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CmykColor {
    cyan: u8,
    magenta: u8,
    yellow: u8,
    key: u8,
}

/// Convert fractional CMYK to unrounded RGB channels in 0.0-255.0.
pub(crate) fn cmyk_to_rgb(cyan: f64, magenta: f64, yellow: f64, key: f64) -> [f64; 3] {
    [
        255.0 * (1.0 - cyan) * (1.0 - key),
        255.0 * (1.0 - magenta) * (1.0 - key),
        255.0 * (1.0 - yellow) * (1.0 - key),
    ]
}

/// Convert RGB channels in 0.0-1.0 to unrounded CMYK percentages.
pub(crate) fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> [f64; 4] {
    let key = 1.0 - r.max(g).max(b);

    let (cyan, magenta, yellow) = if key < 1.0 {
        (
            (1.0 - r - key) / (1.0 - key),
            (1.0 - g - key) / (1.0 - key),
            (1.0 - b - key) / (1.0 - key),
        )
    } else {
        // pure black
        (0.0, 0.0, 0.0)
    };

    [cyan * 100.0, magenta * 100.0, yellow * 100.0, key * 100.0]
}

impl CmykColor {
    /// Create a color, each channel must be within 0-100.
    pub fn new(cyan: i32, magenta: i32, yellow: i32, key: i32) -> Result<Self> {
        let cyan = CYAN.check(cyan)?;
        let magenta = MAGENTA.check(magenta)?;
        let yellow = YELLOW.check(yellow)?;
        let key = KEY.check(key)?;

        Ok(Self {
            cyan: cyan as u8,
            magenta: magenta as u8,
            yellow: yellow as u8,
            key: key as u8,
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
        let [cyan, magenta, yellow, key] = rgb_to_cmyk(r, g, b);

        Self::new(
            cyan.round() as i32,
            magenta.round() as i32,
            yellow.round() as i32,
            key.round() as i32,
        )
    }

    pub fn from_hsl(hsl: &HslColor) -> Result<Self> {
        Self::from_rgb(&RgbColor::from_hsl(hsl)?)
    }

    pub fn cyan(&self) -> u8 {
        self.cyan
    }

    pub fn magenta(&self) -> u8 {
        self.magenta
    }

    pub fn yellow(&self) -> u8 {
        self.yellow
    }

    pub fn key(&self) -> u8 {
        self.key
    }

    pub fn to_rgb(&self) -> Result<RgbColor> {
        RgbColor::from_cmyk(self)
    }

    pub fn to_hex(&self) -> Result<HexColor> {
        HexColor::from_cmyk(self)
    }

    pub fn to_hsl(&self) -> Result<HslColor> {
        HslColor::from_rgb(&self.to_rgb()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cmyk(c: i32, m: i32, y: i32, k: i32) -> CmykColor {
        CmykColor::new(c, m, y, k).unwrap()
    }

    #[test]
    fn test_valid_values() {
        for (c, m, y, k) in [(0, 0, 0, 0), (-0, 0, 0, 0), (50, 50, 50, 50), (100, 100, 100, 100)] {
            assert!(CmykColor::new(c, m, y, k).is_ok());
        }
    }

    #[test]
    fn test_each_channel_is_validated() {
        for bad in [-10, 110, 500, 101] {
            let cases = [
                ("cyan", CmykColor::new(bad, 50, 50, 50)),
                ("magenta", CmykColor::new(50, bad, 50, 50)),
                ("yellow", CmykColor::new(50, 50, bad, 50)),
                ("key", CmykColor::new(50, 50, 50, bad)),
            ];
            for (field, result) in cases {
                let err = result.unwrap_err();
                assert!(err.message().contains(field), "{}", err);
                assert!(err.message().contains(&format!("\"{}\"", bad)));
            }
        }
    }

    #[test]
    fn test_from_hex_string() {
        let cases = [
            ("#ffffff", (0, 0, 0, 0)),
            ("#000000", (0, 0, 0, 100)),
            ("#ff0000", (0, 100, 100, 0)),
            ("#646400", (0, 0, 100, 61)),
            ("#AB3312", (0, 70, 89, 33)),
        ];
        for (hex, (c, m, y, k)) in cases {
            assert_eq!(CmykColor::from_hex_string(hex).unwrap(), cmyk(c, m, y, k), "{}", hex);
        }
    }

    #[test]
    fn test_from_rgb() {
        let cases = [
            ((255, 255, 255), (0, 0, 0, 0)),
            ((0, 0, 0), (0, 0, 0, 100)),
            ((255, 0, 0), (0, 100, 100, 0)),
            ((100, 100, 0), (0, 0, 100, 61)),
            ((171, 51, 18), (0, 70, 89, 33)),
        ];
        for ((r, g, b), (c, m, y, k)) in cases {
            let rgb = RgbColor::new(r, g, b).unwrap();
            assert_eq!(CmykColor::from_rgb(&rgb).unwrap(), cmyk(c, m, y, k));
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(cmyk(50, 50, 50, 50).to_hex().unwrap().hex_string(), "#404040");
        assert_eq!(cmyk(20, 80, 65, 34).to_hex().unwrap().hex_string(), "#87223b");
    }

    #[test]
    fn test_rgb_round_trip_within_one() {
        let mut rng = StdRng::seed_from_u64(0xbeef);
        for _ in 0..1000 {
            let (r, g, b) = (
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(64..=255),
            );
            let start = RgbColor::new(r, g, b).unwrap().to_cmyk().unwrap();
            let back = start.to_rgb().unwrap().to_cmyk().unwrap();

            let pairs = [
                (start.cyan(), back.cyan()),
                (start.magenta(), back.magenta()),
                (start.yellow(), back.yellow()),
                (start.key(), back.key()),
            ];
            for (before, after) in pairs {
                assert!(
                    (i32::from(before) - i32::from(after)).abs() <= 1,
                    "{:?} -> {:?}",
                    start,
                    back
                );
            }
        }
    }
}
