//! Tilt Pool headless demo
//!
//! Drives the simulation with a seeded wandering tilt, roughly the way a
//! player swirling the device would, and logs what happens. Useful for
//! eyeballing game balance without a device or renderer attached.
//!
//! Usage: `tilt-pool [seed]`, log level via `RUST_LOG`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tilt_pool::Tuning;
use tilt_pool::sim::{GameState, Outcome, TiltInput, tick};

/// Handheld display dimensions, in simulation units
const TABLE_W: f32 = 240.0;
const TABLE_H: f32 = 135.0;

const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after two minutes of level time
const MAX_FRAMES: u32 = 120 * 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            log::info!("no seed argument, using default");
            42
        });
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("demo run, seed {seed}");

    let mut state = GameState::new(Tuning::default());
    state.set_table_size(TABLE_W, TABLE_H);
    state.restart_level();

    let mut input = TiltInput::default();
    let mut frames = 0;
    for frame in 0..MAX_FRAMES {
        // Random-walk the tilt and spring it back toward level
        input.pitch = (input.pitch + rng.random_range(-12.0..12.0)) * 0.95;
        input.roll = (input.roll + rng.random_range(-12.0..12.0)) * 0.95;

        tick(&mut state, input, FRAME_DT);

        for event in &state.events {
            log::debug!("frame {frame}: {event:?}");
        }

        frames = frame + 1;
        if state.outcome != Outcome::Running {
            break;
        }
    }

    log::info!(
        "{} after {frames} frames: score {}, {:.1}s on the clock",
        match state.outcome {
            Outcome::Running => "still running",
            Outcome::Over => "game over",
            Outcome::Won => "game won",
        },
        state.score_text(),
        state.timer,
    );

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&state) {
            Ok(json) => log::debug!("final state: {json}"),
            Err(err) => log::warn!("state snapshot failed: {err}"),
        }
    }
}
