mod app;

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use veld_stream::StreamConfig;
use veld_world::{WorldGenParams, load_params_from_path};

const RANDOM_SEED_BOUND: u32 = 100;

#[derive(Parser, Debug)]
#[command(name = "veld", about = "Endless side-scrolling world, streamed around the avatar")]
struct Args {
    /// World seed; drawn at random (and logged) when omitted
    #[arg(long)]
    seed: Option<i32>,
    /// Window size as WxH
    #[arg(long, default_value = "1280x720")]
    size: String,
    /// Grid cell size in world units
    #[arg(long, default_value_t = 30)]
    cell: i32,
    /// Overscan beyond the viewport on each side, in world units
    #[arg(long, default_value_t = 180)]
    margin: i32,
    /// Worldgen config path
    #[arg(long, default_value = "assets/worldgen.toml")]
    worldgen: String,
    /// Reload the worldgen config when the file changes
    #[arg(long, default_value_t = false)]
    watch_worldgen: bool,
    /// Target framerate
    #[arg(long, default_value_t = 80)]
    fps: u32,
    /// Day/night cycle length in seconds
    #[arg(long, default_value_t = 30.0)]
    day_length: f32,
}

fn parse_size(s: &str) -> Option<(i32, i32)> {
    let (w, h) = s.split_once('x')?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

fn pick_seed() -> i32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    (nanos % RANDOM_SEED_BOUND) as i32
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let (width, height) = match parse_size(&args.size) {
        Some(dims) if dims.0 > 0 && dims.1 > 0 => dims,
        _ => {
            log::warn!("unparsable --size {:?}; using 1280x720", args.size);
            (1280, 720)
        }
    };

    let seed = args.seed.unwrap_or_else(pick_seed);
    log::info!("world seed {}", seed);

    let params = if Path::new(&args.worldgen).exists() {
        match load_params_from_path(Path::new(&args.worldgen)) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("worldgen config {} failed to load: {}", args.worldgen, e);
                WorldGenParams::default()
            }
        }
    } else {
        log::warn!("worldgen config missing: {}", args.worldgen);
        WorldGenParams::default()
    };

    let cfg = StreamConfig {
        seed,
        cell: args.cell,
        viewport_w: width,
        viewport_h: height,
        margin: args.margin,
    };

    let (mut rl, thread) = raylib::init().size(width, height).title("Veld").build();
    rl.set_target_fps(args.fps);

    let mut app = match app::App::new(
        cfg,
        params,
        args.day_length,
        args.worldgen.clone(),
        args.watch_worldgen,
    ) {
        Ok(app) => app,
        Err(e) => {
            log::error!("invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.step(&rl, dt);
        app.render(&mut rl, &thread);
    }
}
