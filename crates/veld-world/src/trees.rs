use veld_blocks::grid::{GridPos, columns};
use veld_blocks::{Block, BlockKind, Rgb};

use crate::heightfield::HeightLookup;
use crate::rng::{ColumnRng, rand01};
use crate::worldgen::WorldGenParams;

const SALT_LEAF_R: u32 = 0x001E_AF01;
const SALT_LEAF_G: u32 = 0x001E_AF02;
const SALT_LEAF_B: u32 = 0x001E_AF03;

/// One planted tree: the column it grows in, the trunk stack, and the
/// canopy cells the leaf life cycle takes over.
#[derive(Clone, Debug)]
pub struct TreeSpawn {
    pub column: i32,
    pub trunk_height: i32,
    pub trunk: Vec<Block>,
    pub canopy: Vec<Block>,
}

/// Decides per grid column whether a tree is planted and emits its parts.
/// Every decision comes from a column-local generator seeded by
/// `hash(x, seed)`, so overlapping or split ranges agree exactly on shared
/// columns; canopies are not clipped to the requested range.
pub struct TreeGenerator {
    seed: i32,
    cell: i32,
    plant_modulus: u32,
    trunk_min: i32,
    trunk_span: u32,
    canopy: i32,
    canopy_lift: i32,
    tint_spread: i32,
    stump: Rgb,
    leaf: Rgb,
}

impl TreeGenerator {
    pub fn new(seed: i32, cell: i32, params: &WorldGenParams) -> Self {
        Self {
            seed,
            cell,
            plant_modulus: params.plant_modulus,
            trunk_min: params.trunk_min,
            trunk_span: params.trunk_span,
            canopy: params.canopy,
            canopy_lift: params.canopy_lift,
            tint_spread: params.tint_spread,
            stump: params.stump_color,
            leaf: params.leaf_color,
        }
    }

    pub fn generate<H: HeightLookup>(&self, height: &H, min_x: i32, max_x: i32) -> Vec<TreeSpawn> {
        let mut out = Vec::new();
        for x in columns(min_x, max_x, self.cell) {
            let mut rng = ColumnRng::for_column(x, self.seed);
            if rng.next_below(self.plant_modulus) != 0 {
                continue;
            }
            let trunk_height = self.trunk_min + rng.next_below(self.trunk_span) as i32;
            let surface = height.height_at(x as f32) as i32;
            out.push(self.build_tree(x, surface, trunk_height));
        }
        out
    }

    fn build_tree(&self, x: i32, surface: i32, trunk_height: i32) -> TreeSpawn {
        let mut trunk = Vec::with_capacity(trunk_height as usize);
        for i in 1..=trunk_height {
            trunk.push(Block::new(
                GridPos::new(x, surface - self.cell * i),
                BlockKind::Stump,
                self.stump,
            ));
        }

        // Canopy top-left: two cells left of the trunk, two cells above its top.
        let top_left = GridPos::new(
            x - 2 * self.cell,
            surface - self.cell * (trunk_height + self.canopy_lift),
        );
        let mut canopy = Vec::with_capacity((self.canopy * self.canopy) as usize);
        for row in 0..self.canopy {
            for col in 0..self.canopy {
                let pos = GridPos::new(
                    top_left.x + self.cell * col,
                    top_left.y + self.cell * row,
                );
                let tint = self.leaf.jittered(
                    self.tint_spread,
                    [
                        rand01(self.seed, pos.x, pos.y, SALT_LEAF_R),
                        rand01(self.seed, pos.x, pos.y, SALT_LEAF_G),
                        rand01(self.seed, pos.x, pos.y, SALT_LEAF_B),
                    ],
                );
                canopy.push(Block::new(pos, BlockKind::Leaf, tint));
            }
        }

        TreeSpawn {
            column: x,
            trunk_height,
            trunk,
            canopy,
        }
    }
}
