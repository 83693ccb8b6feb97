use proptest::prelude::*;
use veld_world::worldgen::WorldGenParams;
use veld_world::{HeightLookup, TreeGenerator, TreeSpawn};

const CELL: i32 = 32;

struct FlatGround(f32);
impl HeightLookup for FlatGround {
    fn height_at(&self, _x: f32) -> f32 {
        self.0
    }
}

fn planter(seed: i32) -> TreeGenerator {
    TreeGenerator::new(seed, CELL, &WorldGenParams::default())
}

fn planted(spawns: &[TreeSpawn]) -> Vec<(i32, i32)> {
    spawns.iter().map(|t| (t.column, t.trunk_height)).collect()
}

#[test]
fn split_ranges_agree_with_batch() {
    // Same seed, same columns: one batch call vs two halves.
    let g = planter(7);
    let ground = FlatGround(384.0);
    let whole = planted(&g.generate(&ground, 0, 320));
    let mut halves = planted(&g.generate(&ground, 0, 160));
    halves.extend(planted(&g.generate(&ground, 160, 320)));
    assert_eq!(whole, halves);

    // Plenty of columns plant over a wide span at the default 1-in-9 odds.
    let wide = planted(&g.generate(&ground, -16_000, 16_000));
    assert!(!wide.is_empty());
}

#[test]
fn single_cell_queries_match_batch() {
    let g = planter(7);
    let ground = FlatGround(384.0);
    let whole = planted(&g.generate(&ground, 0, 320));
    let mut cells = Vec::new();
    for x in (0..320).step_by(CELL as usize) {
        cells.extend(planted(&g.generate(&ground, x, x + CELL)));
    }
    assert_eq!(whole, cells);
}

#[test]
fn trunk_and_canopy_geometry() {
    let g = planter(7);
    let surface = 384.0;
    let ground = FlatGround(surface);
    let spawns = g.generate(&ground, -3_200, 3_200);
    assert!(!spawns.is_empty());
    for tree in &spawns {
        assert!(tree.trunk_height >= 5 && tree.trunk_height < 16);
        assert_eq!(tree.trunk.len(), tree.trunk_height as usize);
        // Stump stacks upward from the surface, one cell per block.
        for (i, b) in tree.trunk.iter().enumerate() {
            assert_eq!(b.pos.x, tree.column);
            assert_eq!(b.pos.y, surface as i32 - CELL * (i as i32 + 1));
        }
        // 5x5 canopy, top-left two cells left and two above the trunk top.
        assert_eq!(tree.canopy.len(), 25);
        let top = surface as i32 - CELL * (tree.trunk_height + 2);
        let left = tree.column - 2 * CELL;
        for (i, leaf) in tree.canopy.iter().enumerate() {
            let row = (i / 5) as i32;
            let col = (i % 5) as i32;
            assert_eq!(leaf.pos.x, left + CELL * col);
            assert_eq!(leaf.pos.y, top + CELL * row);
        }
    }
}

#[test]
fn all_parts_grid_aligned() {
    let g = planter(13);
    let ground = FlatGround(384.0);
    for tree in g.generate(&ground, -1_600, 1_600) {
        for b in tree.trunk.iter().chain(tree.canopy.iter()) {
            assert_eq!(b.pos.x.rem_euclid(CELL), 0);
            assert_eq!(b.pos.y.rem_euclid(CELL), 0);
        }
    }
}

proptest! {
    // Any split point gives the same plant/no-plant decisions and heights
    #[test]
    fn arbitrary_split_agrees(
        seed in any::<i32>(),
        start_cells in -200i32..200,
        len_cells in 0i32..64,
        cut_cells in 0i32..64,
    ) {
        let g = planter(seed);
        let ground = FlatGround(384.0);
        let a = start_cells * CELL;
        let c = a + len_cells * CELL;
        let b = (a + cut_cells.min(len_cells) * CELL).min(c);
        let whole = planted(&g.generate(&ground, a, c));
        let mut split = planted(&g.generate(&ground, a, b));
        split.extend(planted(&g.generate(&ground, b, c)));
        prop_assert_eq!(whole, split);
    }

    // Overlapping queries agree on every shared column
    #[test]
    fn overlapping_ranges_agree(
        seed in any::<i32>(),
        lo in -100i32..100,
        hi in -100i32..100,
    ) {
        let g = planter(seed);
        let ground = FlatGround(384.0);
        let (lo, hi) = (lo.min(hi) * CELL, lo.max(hi) * CELL + 10 * CELL);
        let first = planted(&g.generate(&ground, lo, hi));
        let wider = planted(&g.generate(&ground, lo - 5 * CELL, hi + 5 * CELL));
        for entry in &first {
            prop_assert!(wider.contains(entry));
        }
    }
}
