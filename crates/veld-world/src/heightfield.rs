use std::f32::consts::PI;

use veld_blocks::grid::align_down_f;

use crate::rng::rand01;
use crate::worldgen::WorldGenParams;

const SALT_SIN_COEF: u32 = 0x0051_0A11;
const SALT_PI_COEF: u32 = 0x0051_0A12;

/// Narrow height-query contract shared by the generators. Tree placement
/// receives heights through this seam rather than holding the field itself.
pub trait HeightLookup {
    fn height_at(&self, x: f32) -> f32;
}

/// Ground-surface height as a pure function of x. Two sine terms with
/// seed-derived coefficients, quantized down to the grid so column stacks
/// align regardless of fractional x.
#[derive(Clone, Copy, Debug)]
pub struct HeightField {
    cell: i32,
    base: f32,
    amplitude: f32,
    sin_coef: f32,
    pi_coef: f32,
}

impl HeightField {
    /// `base` is the average surface height in world units; the app passes
    /// a fixed fraction of the viewport height.
    pub fn new(seed: i32, cell: i32, base: f32, params: &WorldGenParams) -> Self {
        let sin_coef = rand01(seed, 0, 0, SALT_SIN_COEF) / params.noise_factor;
        let pi_coef = rand01(seed, 0, 1, SALT_PI_COEF) / params.noise_factor;
        Self {
            cell,
            base,
            amplitude: (cell * params.amplitude_cells) as f32,
            sin_coef,
            pi_coef,
        }
    }

    #[inline]
    pub fn cell(&self) -> i32 {
        self.cell
    }
}

impl HeightLookup for HeightField {
    fn height_at(&self, x: f32) -> f32 {
        let raw = self.base
            + self.amplitude * ((self.sin_coef * x).sin() + (self.pi_coef * PI * x).sin());
        align_down_f(raw, self.cell) as f32
    }
}
