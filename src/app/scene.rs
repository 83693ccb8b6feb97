use hashbrown::HashMap;
use raylib::prelude::*;

use veld_blocks::{Block, Layer};
use veld_geom::Vec2;
use veld_stream::{EntityId, Scene};

struct Sprite {
    pos: Vec2,
    layer: Layer,
    color: Color,
}

/// Presentation store for streamed entities: one flat-colored rectangle
/// per block, drawn back to front by layer.
pub struct RaylibScene {
    sprites: HashMap<EntityId, Sprite>,
}

impl RaylibScene {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Follow a moving entity (leaves); static blocks never call this.
    pub fn set_pos(&mut self, id: EntityId, pos: Vec2) {
        if let Some(sprite) = self.sprites.get_mut(&id) {
            sprite.pos = pos;
        }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, cell: i32) {
        for layer in Layer::ALL {
            for sprite in self.sprites.values().filter(|s| s.layer == layer) {
                d.draw_rectangle(
                    sprite.pos.x as i32,
                    sprite.pos.y as i32,
                    cell,
                    cell,
                    sprite.color,
                );
            }
        }
    }
}

impl Scene for RaylibScene {
    fn insert(&mut self, id: EntityId, block: &Block, layer: Layer) {
        self.sprites.insert(
            id,
            Sprite {
                pos: Vec2::new(block.pos.x as f32, block.pos.y as f32),
                layer,
                color: Color::new(block.tint.r, block.tint.g, block.tint.b, 255),
            },
        );
    }

    fn remove(&mut self, id: EntityId, _layer: Layer) {
        self.sprites.remove(&id);
    }
}
