use veld_blocks::grid::{GridPos, columns};
use veld_blocks::{Block, BlockKind, Rgb};

use crate::heightfield::HeightLookup;
use crate::rng::rand01;
use crate::worldgen::WorldGenParams;

const SALT_TINT_R: u32 = 0x00D1_2071;
const SALT_TINT_G: u32 = 0x00D1_2072;
const SALT_TINT_B: u32 = 0x00D1_2073;

/// Emits ground columns as spawn descriptions; never touches the scene.
/// The streaming coordinator owns all inserts and removals.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    seed: i32,
    cell: i32,
    depth: u32,
    crust: u32,
    tint_spread: i32,
    ground: Rgb,
}

impl TerrainGenerator {
    pub fn new(seed: i32, cell: i32, params: &WorldGenParams) -> Self {
        Self {
            seed,
            cell,
            depth: params.terrain_depth,
            crust: params.crust_depth,
            tint_spread: params.tint_spread,
            ground: params.ground_color,
        }
    }

    /// One column of ground blocks per grid cell in `[min_x, max_x)`,
    /// stacked downward from the surface. The topmost `crust` blocks are
    /// tagged `GroundCrust`; everything below is cosmetic fill.
    pub fn generate<H: HeightLookup>(&self, height: &H, min_x: i32, max_x: i32) -> Vec<Block> {
        let mut out = Vec::new();
        for x in columns(min_x, max_x, self.cell) {
            let surface = height.height_at(x as f32) as i32;
            for i in 0..self.depth {
                let y = surface + i as i32 * self.cell;
                let kind = if i < self.crust {
                    BlockKind::GroundCrust
                } else {
                    BlockKind::GroundFill
                };
                let tint = self.ground.jittered(
                    self.tint_spread,
                    [
                        rand01(self.seed, x, y, SALT_TINT_R),
                        rand01(self.seed, x, y, SALT_TINT_G),
                        rand01(self.seed, x, y, SALT_TINT_B),
                    ],
                );
                out.push(Block::new(GridPos::new(x, y), kind, tint));
            }
        }
        out
    }
}
