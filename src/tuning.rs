//! Data-driven game balance
//!
//! Everything a designer tweaks between play-test rounds, kept away from the
//! physics code. `GameState` owns one of these and reads it every tick.

use serde::{Deserialize, Serialize};

use crate::consts::CAPTURE_SLOP;

/// Gameplay balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Per-frame multiplicative velocity decay (felt friction)
    pub damping: f32,
    /// Ball radius, applied to every ball at construction
    pub ball_radius: f32,
    /// Pocket radius shared by all four corner pockets
    pub pocket_radius: f32,
    /// Score a fresh level starts with
    pub max_score: f32,
    /// Score drained per second while the level runs
    pub score_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            damping: 0.99,
            ball_radius: 12.0,
            pocket_radius: 25.0,
            max_score: 1000.0,
            score_decay: 4.0,
        }
    }
}

impl Tuning {
    /// Distance from a pocket center at which a ball drops in
    #[inline]
    pub fn capture_radius(&self) -> f32 {
        self.pocket_radius * CAPTURE_SLOP
    }
}
