use hashbrown::HashMap;
use thiserror::Error;

use veld_blocks::grid::align_down;
use veld_blocks::{Block, BlockKind, Layer};
use veld_world::foliage::Leaf;
use veld_world::heightfield::{HeightField, HeightLookup};
use veld_world::terrain::TerrainGenerator;
use veld_world::trees::TreeGenerator;
use veld_world::worldgen::WorldGenParams;

use crate::scene::{EntityId, Scene};
use crate::window::VisibleRange;

/// Fixed world-construction inputs. Checked once up front; streaming itself
/// has no failure modes.
#[derive(Clone, Copy, Debug)]
pub struct StreamConfig {
    pub seed: i32,
    pub cell: i32,
    pub viewport_w: i32,
    pub viewport_h: i32,
    pub margin: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamConfigError {
    #[error("cell size must be positive, got {0}")]
    CellNotPositive(i32),
    #[error("viewport must be positive, got {w}x{h}")]
    ViewportNotPositive { w: i32, h: i32 },
    #[error("overscan margin must be non-negative, got {0}")]
    MarginNegative(i32),
    #[error("overscan margin {margin} is not a multiple of the cell size {cell}")]
    MarginMisaligned { margin: i32, cell: i32 },
}

impl StreamConfig {
    pub fn validate(&self) -> Result<(), StreamConfigError> {
        if self.cell <= 0 {
            return Err(StreamConfigError::CellNotPositive(self.cell));
        }
        if self.viewport_w <= 0 || self.viewport_h <= 0 {
            return Err(StreamConfigError::ViewportNotPositive {
                w: self.viewport_w,
                h: self.viewport_h,
            });
        }
        if self.margin < 0 {
            return Err(StreamConfigError::MarginNegative(self.margin));
        }
        if self.margin % self.cell != 0 {
            return Err(StreamConfigError::MarginMisaligned {
                margin: self.margin,
                cell: self.cell,
            });
        }
        Ok(())
    }
}

struct Entity {
    block: Block,
    layer: Layer,
    leaf: Option<Leaf>,
}

impl Entity {
    #[inline]
    fn center_x(&self, cell: i32) -> f32 {
        let left = match &self.leaf {
            Some(leaf) => leaf.pos.x,
            None => self.block.pos.x as f32,
        };
        left + cell as f32 * 0.5
    }
}

/// Owns the visible range and every generated entity inside it. The only
/// mutators of the generated world: generators produce spawn descriptions,
/// and this coordinator performs all scene inserts and removals.
pub struct Streamer {
    cfg: StreamConfig,
    params: WorldGenParams,
    field: HeightField,
    terrain: TerrainGenerator,
    trees: TreeGenerator,
    range: VisibleRange,
    half_viewport: i32,
    entities: HashMap<EntityId, Entity>,
    next_id: u64,
}

impl Streamer {
    /// Validates the configuration, then materializes the initial window
    /// centered on the tracked position.
    pub fn new<S: Scene>(
        cfg: StreamConfig,
        params: WorldGenParams,
        tracked_x: f32,
        scene: &mut S,
    ) -> Result<Self, StreamConfigError> {
        cfg.validate()?;
        let half_viewport = align_down(cfg.viewport_w / 2, cfg.cell);
        let base = cfg.viewport_h as f32 * params.base_ratio;
        let field = HeightField::new(cfg.seed, cfg.cell, base, &params);
        let terrain = TerrainGenerator::new(cfg.seed, cfg.cell, &params);
        let trees = TreeGenerator::new(cfg.seed, cfg.cell, &params);
        let range = VisibleRange::centered(tracked_x, half_viewport, cfg.margin, cfg.cell);
        let mut streamer = Self {
            cfg,
            params,
            field,
            terrain,
            trees,
            range,
            half_viewport,
            entities: HashMap::new(),
            next_id: 1,
        };
        streamer.fill_range(range.left, range.right, scene);
        log::info!(
            target: "stream",
            "materialized [{}, {}) seed={} entities={}",
            range.left,
            range.right,
            cfg.seed,
            streamer.entities.len()
        );
        Ok(streamer)
    }

    /// One simulation step, run after the tracked position updated: slide
    /// the window at most one cell toward the tracked entity, then advance
    /// the leaf cycles.
    pub fn tick<S: Scene>(&mut self, tracked_x: f32, dt: f32, scene: &mut S) {
        let cell = self.cfg.cell;
        let reach = (self.half_viewport + self.cfg.margin) as f32;
        if tracked_x + reach - self.range.right as f32 > cell as f32 {
            self.fill_range(self.range.right, self.range.right + cell, scene);
            let bound = (self.range.left + cell) as f32;
            self.evict(scene, |cx| cx < bound);
            self.range.shift_right(cell);
            log::debug!(
                target: "stream",
                "slide right -> [{}, {}) entities={}",
                self.range.left,
                self.range.right,
                self.entities.len()
            );
        } else if self.range.left as f32 - tracked_x + reach > cell as f32 {
            self.fill_range(self.range.left - cell, self.range.left, scene);
            let bound = (self.range.right - cell) as f32;
            self.evict(scene, |cx| cx > bound);
            self.range.shift_left(cell);
            log::debug!(
                target: "stream",
                "slide left -> [{}, {}) entities={}",
                self.range.left,
                self.range.right,
                self.entities.len()
            );
        }
        self.step_foliage(dt, scene);
    }

    /// Swap in reloaded worldgen parameters: drop everything, rebuild the
    /// generators for the same seed, and refill the current range.
    pub fn apply_params<S: Scene>(&mut self, params: WorldGenParams, scene: &mut S) {
        let ids: Vec<EntityId> = self.entities.keys().copied().collect();
        for id in ids {
            if let Some(e) = self.entities.remove(&id) {
                scene.remove(id, e.layer);
            }
        }
        let base = self.cfg.viewport_h as f32 * params.base_ratio;
        self.field = HeightField::new(self.cfg.seed, self.cfg.cell, base, &params);
        self.terrain = TerrainGenerator::new(self.cfg.seed, self.cfg.cell, &params);
        self.trees = TreeGenerator::new(self.cfg.seed, self.cfg.cell, &params);
        self.params = params;
        self.fill_range(self.range.left, self.range.right, scene);
        log::info!(
            target: "stream",
            "worldgen params applied; rebuilt [{}, {}) entities={}",
            self.range.left,
            self.range.right,
            self.entities.len()
        );
    }

    #[inline]
    pub fn range(&self) -> VisibleRange {
        self.range
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.cfg.seed
    }

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Ground-surface height at `x`; the avatar controller stands on this.
    #[inline]
    pub fn surface_height(&self, x: f32) -> f32 {
        self.field.height_at(x)
    }

    /// Live leaves with their current state, for presentation layers that
    /// need per-frame positions of the only moving blocks.
    pub fn live_leaves(&self) -> impl Iterator<Item = (EntityId, Leaf)> + '_ {
        self.entities
            .iter()
            .filter_map(|(id, e)| e.leaf.map(|leaf| (*id, leaf)))
    }

    fn fill_range<S: Scene>(&mut self, min_x: i32, max_x: i32, scene: &mut S) {
        for block in self.terrain.generate(&self.field, min_x, max_x) {
            self.insert(block, None, scene);
        }
        for tree in self.trees.generate(&self.field, min_x, max_x) {
            for block in tree.trunk {
                self.insert(block, None, scene);
            }
            for block in tree.canopy {
                let leaf = Leaf::sprout(block.pos, 0, self.cfg.seed, &self.params.leaves);
                self.insert(block, Some(leaf), scene);
            }
        }
    }

    fn insert<S: Scene>(&mut self, block: Block, leaf: Option<Leaf>, scene: &mut S) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let layer = block.kind.layer();
        scene.insert(id, &block, layer);
        self.entities.insert(id, Entity { block, layer, leaf });
        id
    }

    fn evict<S: Scene, F: Fn(f32) -> bool>(&mut self, scene: &mut S, out_of_range: F) {
        let cell = self.cfg.cell;
        let doomed: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|(_, e)| out_of_range(e.center_x(cell)))
            .map(|(id, _)| *id)
            .collect();
        for id in doomed {
            if let Some(e) = self.entities.remove(&id) {
                scene.remove(id, e.layer);
            }
        }
    }

    fn step_foliage<S: Scene>(&mut self, dt: f32, scene: &mut S) {
        if dt <= 0.0 {
            return;
        }
        let cell = self.cfg.cell;
        let seed = self.cfg.seed;
        let mut expired: Vec<EntityId> = Vec::new();
        for (id, e) in self.entities.iter_mut() {
            if let Some(leaf) = e.leaf.as_mut() {
                leaf.step(dt, &self.field, cell, seed, &self.params.leaves);
                if leaf.expired() {
                    expired.push(*id);
                }
            }
        }
        // An expired leaf is destroyed and a factory-fresh one sprouts at
        // the same origin with the next generation.
        for id in expired {
            if let Some(e) = self.entities.remove(&id) {
                scene.remove(id, e.layer);
                if let Some(old) = e.leaf {
                    let fresh = old.respawn(seed, &self.params.leaves);
                    let block = Block::new(fresh.origin, BlockKind::Leaf, e.block.tint);
                    self.insert(block, Some(fresh), scene);
                }
            }
        }
    }
}
