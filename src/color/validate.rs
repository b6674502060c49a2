//! Range checks shared by every model constructor

use crate::core::error::{ColorError, Result};
use log::trace;

/// Inclusive bounds for a single named component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub field: &'static str,
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    pub const fn new(field: &'static str, min: i32, max: i32) -> Self {
        Self { field, min, max }
    }

    /// Check `value` against the bounds, returning it on success.
    pub fn check(&self, value: i32) -> Result<i32> {
        if value < self.min || value > self.max {
            trace!("rejected {} = {}", self.field, value);
            return Err(ColorError::out_of_range(
                self.field, value, self.min, self.max,
            ));
        }

        Ok(value)
    }
}

pub const RED: Bounds = Bounds::new("red", 0, 255);
pub const GREEN: Bounds = Bounds::new("green", 0, 255);
pub const BLUE: Bounds = Bounds::new("blue", 0, 255);

pub const HUE: Bounds = Bounds::new("hue", 0, 360);
pub const SATURATION: Bounds = Bounds::new("saturation", 0, 100);
pub const LIGHTNESS: Bounds = Bounds::new("lightness", 0, 100);

pub const CYAN: Bounds = Bounds::new("cyan", 0, 100);
pub const MAGENTA: Bounds = Bounds::new("magenta", 0, 100);
pub const YELLOW: Bounds = Bounds::new("yellow", 0, 100);
pub const KEY: Bounds = Bounds::new("key", 0, 100);
