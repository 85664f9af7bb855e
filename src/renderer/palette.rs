//! Cycling hue for the curve and control points

use serde::{Deserialize, Serialize};

use crate::consts::HUE_STEP;

/// Hue that advances every rendered frame, wrapping at 360 degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueCycle {
    pub hue: u16,
    pub step: u16,
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new(HUE_STEP)
    }
}

impl HueCycle {
    pub fn new(step: u16) -> Self {
        Self { hue: 0, step: step % 360 }
    }

    /// Move to the next hue and return its color
    pub fn advance(&mut self) -> [f32; 4] {
        self.hue = (self.hue + self.step) % 360;
        self.color()
    }

    /// Fully saturated, half-lightness color for the current hue
    pub fn color(&self) -> [f32; 4] {
        let [r, g, b] = hsl_to_rgb(self.hue as f32, 1.0, 0.5);
        [r, g, b, 1.0]
    }
}

/// HSL (hue in degrees, saturation and lightness 0-1) to RGB (0-1)
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}
