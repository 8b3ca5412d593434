//! Rebound entry point
//!
//! Owns the frame schedule: measure elapsed time, run the fixed ticks the
//! pacer grants, repaint, sleep the remainder. The simulation itself never
//! touches the clock.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rebound::renderer::{MeshSurface, render_frame};
use rebound::sim::{Extent, WorldState, classic_scene, generate_scene, tick};
use rebound::{FramePacer, Settings};

/// Ticks between progress log lines (once a second at the default rate)
const LOG_INTERVAL: u64 = 60;

fn main() {
    env_logger::init();
    log::info!("Rebound starting...");

    let settings_path = std::env::args().nth(1).unwrap_or_else(|| "rebound.json".into());
    let settings = Settings::load(Path::new(&settings_path));

    let canvas = Extent::new(settings.canvas_width, settings.canvas_height);
    let seed = if settings.seed != 0 {
        settings.seed
    } else {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(1)
    };

    let mut world = if settings.random_shapes > 0 {
        log::info!("Generating {} shapes with seed {}", settings.random_shapes, seed);
        generate_scene(canvas, seed, settings.random_shapes)
    } else {
        classic_scene(canvas)
    };
    world.start();

    log::info!(
        "World initialized: {} shapes, {}x{} canvas",
        world.shapes.len(),
        canvas.width,
        canvas.height,
    );

    run_loop(&mut world, &settings);
}

fn run_loop(world: &mut WorldState, settings: &Settings) {
    let mut surface = MeshSurface::new();
    let mut pacer = FramePacer::new(settings.tick_rate);
    let frame_budget = Duration::from_secs_f32(pacer.tick_dt());
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_secs_f32();
        last = now;

        for _ in 0..pacer.advance(elapsed) {
            tick(world);

            if world.time_ticks % LOG_INTERVAL == 0 {
                if let Some(lead) = world.shapes.first() {
                    log::debug!(
                        "tick {}: shape {} at ({:.0}, {:.0})",
                        world.time_ticks,
                        lead.id,
                        lead.pos().x,
                        lead.pos().y,
                    );
                }
            }

            if settings.max_ticks.is_some_and(|max| world.time_ticks >= max) {
                log::info!("Reached {} ticks, exiting", world.time_ticks);
                return;
            }
        }

        render_frame(&mut surface, world);

        if let Some(rest) = frame_budget.checked_sub(last.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
