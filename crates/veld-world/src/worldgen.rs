use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use veld_blocks::Rgb;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct WorldGenConfig {
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub trees: Trees,
    #[serde(default)]
    pub leaves: Leaves,
    #[serde(default)]
    pub palette: Palette,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    #[serde(default = "default_noise_factor")]
    pub noise_factor: f32,
    #[serde(default = "default_amplitude_cells")]
    pub amplitude_cells: i32,
    #[serde(default = "default_base_ratio")]
    pub base_ratio: f32,
}
fn default_noise_factor() -> f32 {
    200.0
}
fn default_amplitude_cells() -> i32 {
    2
}
fn default_base_ratio() -> f32 {
    2.0 / 3.0
}
impl Default for Height {
    fn default() -> Self {
        Self {
            noise_factor: default_noise_factor(),
            amplitude_cells: default_amplitude_cells(),
            base_ratio: default_base_ratio(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Terrain {
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default = "default_crust")]
    pub crust: u32,
    #[serde(default = "default_tint_spread")]
    pub tint_spread: i32,
}
fn default_depth() -> u32 {
    30
}
fn default_crust() -> u32 {
    2
}
fn default_tint_spread() -> i32 {
    10
}
impl Default for Terrain {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            crust: default_crust(),
            tint_spread: default_tint_spread(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    #[serde(default = "default_plant_modulus")]
    pub plant_modulus: u32,
    #[serde(default = "default_trunk_min")]
    pub trunk_min: i32,
    #[serde(default = "default_trunk_span")]
    pub trunk_span: u32,
    #[serde(default = "default_canopy")]
    pub canopy: i32,
    #[serde(default = "default_canopy_lift")]
    pub canopy_lift: i32,
}
fn default_plant_modulus() -> u32 {
    9
}
fn default_trunk_min() -> i32 {
    5
}
fn default_trunk_span() -> u32 {
    11
}
fn default_canopy() -> i32 {
    5
}
fn default_canopy_lift() -> i32 {
    2
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            plant_modulus: default_plant_modulus(),
            trunk_min: default_trunk_min(),
            trunk_span: default_trunk_span(),
            canopy: default_canopy(),
            canopy_lift: default_canopy_lift(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Leaves {
    #[serde(default = "default_tree_dwell")]
    pub tree_dwell: f32,
    #[serde(default = "default_ground_dwell")]
    pub ground_dwell: f32,
    #[serde(default = "default_fade")]
    pub fade: f32,
    #[serde(default = "default_fall_speed")]
    pub fall_speed: f32,
    #[serde(default = "default_sway_speed")]
    pub sway_speed: f32,
    #[serde(default = "default_sway_period")]
    pub sway_period: f32,
}
fn default_tree_dwell() -> f32 {
    120.0
}
fn default_ground_dwell() -> f32 {
    100.0
}
fn default_fade() -> f32 {
    10.0
}
fn default_fall_speed() -> f32 {
    50.0
}
fn default_sway_speed() -> f32 {
    50.0
}
fn default_sway_period() -> f32 {
    1.0
}
impl Default for Leaves {
    fn default() -> Self {
        Self {
            tree_dwell: default_tree_dwell(),
            ground_dwell: default_ground_dwell(),
            fade: default_fade(),
            fall_speed: default_fall_speed(),
            sway_speed: default_sway_speed(),
            sway_period: default_sway_period(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Palette {
    #[serde(default = "default_ground_color")]
    pub ground: Rgb,
    #[serde(default = "default_stump_color")]
    pub stump: Rgb,
    #[serde(default = "default_leaf_color")]
    pub leaf: Rgb,
}
fn default_ground_color() -> Rgb {
    Rgb::new(212, 123, 74)
}
fn default_stump_color() -> Rgb {
    Rgb::new(100, 50, 20)
}
fn default_leaf_color() -> Rgb {
    Rgb::new(50, 200, 30)
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            ground: default_ground_color(),
            stump: default_stump_color(),
            leaf: default_leaf_color(),
        }
    }
}

// Flattened params used in tight loops (snapshot of config)
#[derive(Clone, Debug)]
pub struct WorldGenParams {
    pub noise_factor: f32,
    pub amplitude_cells: i32,
    pub base_ratio: f32,
    pub terrain_depth: u32,
    pub crust_depth: u32,
    pub tint_spread: i32,
    pub plant_modulus: u32,
    pub trunk_min: i32,
    pub trunk_span: u32,
    pub canopy: i32,
    pub canopy_lift: i32,
    pub leaves: Leaves,
    pub ground_color: Rgb,
    pub stump_color: Rgb,
    pub leaf_color: Rgb,
}

impl WorldGenParams {
    pub fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }

    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        Self {
            noise_factor: cfg.height.noise_factor,
            amplitude_cells: cfg.height.amplitude_cells,
            base_ratio: cfg.height.base_ratio,
            terrain_depth: cfg.terrain.depth,
            crust_depth: cfg.terrain.crust,
            tint_spread: cfg.terrain.tint_spread,
            plant_modulus: cfg.trees.plant_modulus.max(1),
            trunk_min: cfg.trees.trunk_min.max(0),
            trunk_span: cfg.trees.trunk_span.max(1),
            canopy: cfg.trees.canopy,
            canopy_lift: cfg.trees.canopy_lift,
            leaves: cfg.leaves.clone(),
            ground_color: cfg.palette.ground,
            stump_color: cfg.palette.stump,
            leaf_color: cfg.palette.leaf,
        }
    }
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: WorldGenConfig = toml::from_str(&s)?;
    Ok(WorldGenParams::from_config(&cfg))
}
