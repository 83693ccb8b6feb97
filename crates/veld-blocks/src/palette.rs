//! Tint colors for generated blocks. Base colors come from the worldgen
//! config; per-block variation is a small channel jitter around the base.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Shift each channel by up to +-`spread`, driven by three uniform
    /// draws in [0,1). Channels clamp at the byte range instead of wrapping.
    pub fn jittered(self, spread: i32, u: [f32; 3]) -> Rgb {
        let shift = |c: u8, t: f32| -> u8 {
            let d = ((t * 2.0 - 1.0) * spread as f32).round() as i32;
            (c as i32 + d).clamp(0, 255) as u8
        };
        Rgb {
            r: shift(self.r, u[0]),
            g: shift(self.g, u[1]),
            b: shift(self.b, u[2]),
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}
