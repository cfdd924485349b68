//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, synchronous, single-threaded
//! - Fixed ball slots 0-6, stable iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{elastic_pair_response, reflect_velocity};
pub use state::{BALL_COLORS, Ball, BallColor, GameEvent, GameState, Outcome};
pub use tick::{TiltInput, tick};
