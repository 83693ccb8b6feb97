mod avatar;
mod day_cycle;
mod scene;
mod watchers;

use std::path::Path;
use std::sync::mpsc::Receiver;

use raylib::prelude::*;

use veld_stream::{StreamConfig, StreamConfigError, Streamer};
use veld_world::{WorldGenParams, load_params_from_path};

use avatar::Avatar;
use day_cycle::DayCycle;
use scene::RaylibScene;

pub struct App {
    streamer: Streamer,
    scene: RaylibScene,
    avatar: Avatar,
    day: DayCycle,
    day_sample: day_cycle::DayLightSample,
    cell: i32,
    viewport: (i32, i32),
    worldgen_path: String,
    worldgen_rx: Option<Receiver<()>>,
    tick: u64,
}

impl App {
    pub fn new(
        cfg: StreamConfig,
        params: WorldGenParams,
        day_length: f32,
        worldgen_path: String,
        watch_worldgen: bool,
    ) -> Result<Self, StreamConfigError> {
        let mut scene = RaylibScene::new();
        let spawn_x = cfg.viewport_w as f32 * 0.5;
        let streamer = Streamer::new(cfg, params, spawn_x, &mut scene)?;
        let avatar = Avatar::new(spawn_x, streamer.surface_height(spawn_x));
        let worldgen_rx =
            watch_worldgen.then(|| watchers::spawn_worldgen_watcher(worldgen_path.clone()));
        let day = DayCycle::new(day_length);
        let day_sample = day.sample();
        Ok(Self {
            streamer,
            scene,
            avatar,
            day,
            day_sample,
            cell: cfg.cell,
            viewport: (cfg.viewport_w, cfg.viewport_h),
            worldgen_path,
            worldgen_rx,
            tick: 0,
        })
    }

    pub fn step(&mut self, rl: &RaylibHandle, dt: f32) {
        self.day_sample = self.day.advance(dt.max(0.0));

        // Worldgen hot-reload: drain the watcher, rebuild the window in place.
        if let Some(rx) = &self.worldgen_rx {
            if rx.try_iter().next().is_some() {
                match load_params_from_path(Path::new(&self.worldgen_path)) {
                    Ok(params) => {
                        self.streamer.apply_params(params, &mut self.scene);
                        log::info!("worldgen config reloaded from {}", self.worldgen_path);
                    }
                    Err(e) => log::warn!("worldgen reload failed: {}", e),
                }
            }
        }

        let streamer = &self.streamer;
        self.avatar.update(rl, dt, |x| streamer.surface_height(x));

        self.streamer.tick(self.avatar.pos.x, dt, &mut self.scene);

        // Leaves are the only entities that move after insertion.
        for (id, leaf) in self.streamer.live_leaves() {
            self.scene.set_pos(id, leaf.pos);
        }

        self.tick = self.tick.wrapping_add(1);
        if self.tick % 600 == 0 {
            let r = self.streamer.range();
            log::debug!(
                target: "stream",
                "[tick {}] range=[{}, {}) entities={}",
                self.tick,
                r.left,
                r.right,
                self.streamer.entity_count()
            );
        }
    }

    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let (w, h) = self.viewport;
        let sample = self.day_sample;
        let mut d = rl.begin_drawing(thread);

        let sky = Color::new(
            (sample.sky[0] * 255.0) as u8,
            (sample.sky[1] * 255.0) as u8,
            (sample.sky[2] * 255.0) as u8,
            255,
        );
        d.clear_background(sky);

        // Sun and halo arc across the viewport in screen space.
        let (sun_x, sun_y) = sample.sun_center(w as f32, h as f32);
        d.draw_circle(sun_x as i32, sun_y as i32, 60.0, Color::new(255, 255, 0, 20));
        d.draw_circle(sun_x as i32, sun_y as i32, 40.0, Color::new(255, 240, 110, 255));

        {
            let camera = Camera2D {
                offset: Vector2::new(w as f32 * 0.5, 0.0),
                target: Vector2::new(self.avatar.pos.x, 0.0),
                rotation: 0.0,
                zoom: 1.0,
            };
            let mut d2 = d.begin_mode2D(camera);
            self.scene.draw(&mut d2, self.cell);
            self.avatar.draw(&mut d2);
        }

        // Darkness overlay fades in toward midnight.
        let night = (sample.night_alpha * 255.0) as u8;
        if night > 0 {
            d.draw_rectangle(0, 0, w, h, Color::new(0, 0, 0, night));
        }

        d.draw_text(
            &format!("energy {:>3.0}", self.avatar.energy),
            12,
            12,
            20,
            Color::WHITE,
        );
        d.draw_fps(12, 40);
    }
}
