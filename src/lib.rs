//! Tilt Pool - a tilt-steered pocket billiards game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, tilt-sensor sampling, and device bootstrap live in the host;
//! the host samples the sensor and frame clock, calls [`sim::tick`] once per
//! frame, then reads ball positions, colors, score, and outcome back out.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Balls on the table, cue ball included
    pub const BALL_COUNT: usize = 7;
    /// Slot of the player-steered cue ball
    pub const CUE_BALL: usize = 0;
    /// Slot of the black ball
    pub const BLACK_BALL: usize = 6;
    /// Corner pockets
    pub const POCKET_COUNT: usize = 4;

    /// Cushion inset from the table edge
    pub const WALL_MARGIN: f32 = 1.0;
    /// Extra clearance when a ball is pushed back off a cushion
    pub const WALL_PUSH_OUT: f32 = 0.01;
    /// Capture triggers within `pocket_radius * CAPTURE_SLOP` of a pocket
    pub const CAPTURE_SLOP: f32 = 1.1;

    /// Shortest length `normalize_or_min` will divide by
    pub const MIN_NORM_LENGTH: f32 = 1e-4;

    /// Seconds the title overlay stays up after a level restart
    pub const TITLE_SECS: f32 = 8.0;
}

/// Normalize `v`, dividing by at least [`consts::MIN_NORM_LENGTH`] so a
/// near-zero vector stays finite instead of going NaN.
#[inline]
pub fn normalize_or_min(v: Vec2) -> Vec2 {
    v / v.length().max(consts::MIN_NORM_LENGTH)
}

/// Rotate `v` by `theta` radians (counterclockwise)
#[inline]
pub fn rotate_vec(v: Vec2, theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
