use raylib::prelude::*;

use veld_geom::Vec2;

const VELOCITY_X: f32 = 400.0;
const JUMP_VELOCITY: f32 = -300.0;
const GRAVITY: f32 = 500.0;
const MAX_ENERGY: f32 = 100.0;
const ENERGY_STEP: f32 = 0.5;
const AVATAR_SIZE: f32 = 60.0;

/// The tracked entity. Walks, jumps, and flies while energy lasts; the
/// streamer only ever reads its x position.
pub struct Avatar {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2,
    pub energy: f32,
    pub on_ground: bool,
}

impl Avatar {
    pub fn new(x: f32, ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(x, ground_y - AVATAR_SIZE - 100.0),
            vel: Vec2::ZERO,
            energy: MAX_ENERGY,
            on_ground: false,
        }
    }

    pub fn update<F: Fn(f32) -> f32>(&mut self, rl: &RaylibHandle, dt: f32, ground_at: F) {
        let mut vx = 0.0;
        if rl.is_key_down(KeyboardKey::KEY_LEFT) {
            vx -= VELOCITY_X;
        }
        if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
            vx += VELOCITY_X;
        }
        self.vel.x = vx;

        let flying = rl.is_key_down(KeyboardKey::KEY_SPACE)
            && rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT)
            && self.energy > 0.0;
        if flying {
            self.energy = (self.energy - ENERGY_STEP).max(0.0);
            self.vel.y = JUMP_VELOCITY;
        } else if rl.is_key_pressed(KeyboardKey::KEY_SPACE) && self.on_ground {
            self.vel.y = JUMP_VELOCITY;
        } else if !self.on_ground {
            self.vel.y += GRAVITY * dt;
        }

        self.pos += self.vel * dt;

        // Snap the feet onto the crust surface; no tunneling below ground.
        let ground = ground_at(self.pos.x);
        if self.pos.y + AVATAR_SIZE >= ground {
            self.pos.y = ground - AVATAR_SIZE;
            self.vel.y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }

        if self.on_ground && !flying && self.energy < MAX_ENERGY {
            self.energy = (self.energy + ENERGY_STEP).min(MAX_ENERGY);
        }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        d.draw_rectangle(
            self.pos.x as i32,
            self.pos.y as i32,
            AVATAR_SIZE as i32,
            AVATAR_SIZE as i32,
            Color::new(60, 60, 70, 255),
        );
    }
}
