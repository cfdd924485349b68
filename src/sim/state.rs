//! Game state and core simulation types
//!
//! Everything the host reads back after a tick lives here, along with the
//! level lifecycle and the win/loss evaluation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::normalize_or_min;
use crate::tuning::Tuning;

/// Level outcome. Terminal states only leave via [`GameState::restart_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Outcome {
    #[default]
    Running,
    Over,
    Won,
}

/// Display colors for one ball: RGB565 for palette displays plus full 24-bit.
/// Opaque to the physics, a rendering hint for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallColor {
    pub rgb565: u16,
    pub rgb888: u32,
}

/// Fixed per-slot colors: cue, five object balls, then the black
pub const BALL_COLORS: [BallColor; BALL_COUNT] = [
    BallColor { rgb565: 0xD69A, rgb888: 0x00D3_D3D3 }, // Light grey (cue)
    BallColor { rgb565: 0xF800, rgb888: 0x00FF_0000 }, // Red
    BallColor { rgb565: 0x001F, rgb888: 0x0000_00FF }, // Blue
    BallColor { rgb565: 0x07E0, rgb888: 0x0000_FF00 }, // Green
    BallColor { rgb565: 0xFFE0, rgb888: 0x00FF_FF00 }, // Yellow
    BallColor { rgb565: 0xFDA0, rgb888: 0x00FF_B400 }, // Orange
    BallColor { rgb565: 0x0000, rgb888: 0x0000_0000 }, // Black
];

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant after construction; the rack spacing follows it
    pub radius: f32,
    /// Cleared when the ball drops into a pocket, restored on level restart
    pub active: bool,
    pub color: BallColor,
}

/// Events emitted during a tick, for host sound/FX hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BallsCollided { first: usize, second: usize },
    CushionHit { ball: usize },
    Pocketed { ball: usize },
}

/// Cue ball start, as a fraction of table width (centered vertically)
const CUE_START_X_FRAC: f32 = 0.8;
/// Rack apex, as a fraction of table width
const RACK_APEX_X_FRAC: f32 = 0.4;
/// Rack spacing in ball radii
const RACK_GAP_RADII: f32 = 1.5;

/// Pyramid rack behind the apex ball, apex pointing at the cue ball.
/// Entries are (slot, rows back from the apex, vertical offset), both in
/// units of the rack gap. The black ball sits at the heart of the back row.
const RACK_LAYOUT: [(usize, f32, f32); 6] = [
    (1, 0.0, 0.0),
    (2, 1.5, -1.0),
    (3, 1.5, 1.0),
    (4, 3.0, -1.5),
    (6, 3.0, 0.0),
    (5, 3.0, 1.5),
];

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance knobs, read every tick
    pub tuning: Tuning,
    /// Fixed slots: 0 = cue, 1-5 = object balls, 6 = black
    pub balls: [Ball; BALL_COUNT],
    /// Corner pockets, repositioned on every restart
    pub pockets: [Vec2; POCKET_COUNT],
    /// Light position driving the per-ball specular highlight hint
    pub light: Vec2,
    pub width: f32,
    pub height: f32,
    /// Seconds since the level restarted
    pub timer: f32,
    /// Remaining score; drains while the level runs, floors at zero
    pub score: f32,
    pub outcome: Outcome,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game. Call [`set_table_size`](Self::set_table_size) and
    /// [`restart_level`](Self::restart_level) once the host knows its display
    /// dimensions.
    pub fn new(tuning: Tuning) -> Self {
        let balls = BALL_COLORS.map(|color| Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
            active: true,
            color,
        });

        let mut state = Self {
            tuning,
            balls,
            pockets: [Vec2::ZERO; POCKET_COUNT],
            light: Vec2::ZERO,
            width: 0.0,
            height: 0.0,
            timer: 0.0,
            score: 0.0,
            outcome: Outcome::Running,
            events: Vec::new(),
        };
        state.restart_level();
        state
    }

    /// Set table dimensions and hang the light above the upper half
    pub fn set_table_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.light = Vec2::new(width * 0.5, height * 0.4);
    }

    /// Reset the level: rack the balls, re-seat the pockets, restore score
    /// and timer, back to [`Outcome::Running`].
    pub fn restart_level(&mut self) {
        self.timer = 0.0;
        self.score = self.tuning.max_score;
        self.outcome = Outcome::Running;
        self.events.clear();

        for ball in &mut self.balls {
            ball.vel = Vec2::ZERO;
            ball.active = true;
        }

        let mid_y = self.height * 0.5;
        self.balls[CUE_BALL].pos = Vec2::new(self.width * CUE_START_X_FRAC, mid_y);

        let apex_x = self.width * RACK_APEX_X_FRAC;
        let gap = self.balls[CUE_BALL].radius * RACK_GAP_RADII;
        for (slot, back, side) in RACK_LAYOUT {
            self.balls[slot].pos = Vec2::new(apex_x - back * gap, mid_y + side * gap);
        }

        self.pockets = [
            Vec2::new(0.0, 0.0),
            Vec2::new(self.width, 0.0),
            Vec2::new(self.width, self.height),
            Vec2::new(0.0, self.height),
        ];
    }

    /// Judge the level once per tick, before any motion. Decays the score,
    /// then applies the loss/win precedence: cue ball down, black ball down
    /// early, everything cleared.
    pub(crate) fn evaluate_outcome(&mut self, dt: f32) {
        if self.outcome != Outcome::Running {
            return;
        }

        self.score = (self.score - dt * self.tuning.score_decay).max(0.0);

        // Pocketing the cue ball always ends the level
        if !self.balls[CUE_BALL].active {
            self.outcome = Outcome::Over;
            return;
        }

        // Only object balls 1-4 hold the black ball on the table; slot 5
        // does not take part in this check
        if !self.balls[BLACK_BALL].active && self.balls[1..5].iter().any(|b| b.active) {
            self.outcome = Outcome::Over;
            return;
        }

        if self.balls[1..].iter().all(|b| !b.active) {
            self.outcome = Outcome::Won;
        }
    }

    pub fn game_over(&self) -> bool {
        self.outcome == Outcome::Over
    }

    pub fn game_won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    /// True for the first seconds of a level; display hint only
    pub fn show_title(&self) -> bool {
        self.timer < TITLE_SECS
    }

    /// Remaining score as a decimal integer string
    pub fn score_text(&self) -> String {
        format!("{}", self.score as i32)
    }

    /// Specular highlight position on a ball, pulled toward the light but
    /// never past 0.6 of the radius from the center. Rendering aid only.
    pub fn highlight_position(&self, ball: &Ball) -> Vec2 {
        let to_light = self.light - ball.pos;
        let len = to_light.length().min(ball.radius * 0.6);
        ball.pos + normalize_or_min(to_light) * len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_W: f32 = 240.0;
    const TABLE_H: f32 = 135.0;

    fn table_state() -> GameState {
        let mut state = GameState::new(Tuning::default());
        state.set_table_size(TABLE_W, TABLE_H);
        state.restart_level();
        state
    }

    #[test]
    fn test_restart_racks_the_level() {
        let state = table_state();

        assert_eq!(state.outcome, Outcome::Running);
        assert!((state.score - state.tuning.max_score).abs() < 1e-6);
        assert!(state.timer.abs() < 1e-6);
        for ball in &state.balls {
            assert!(ball.active);
            assert!(ball.vel.length() < 1e-6);
        }

        // Cue ball faces the rack apex across the table midline
        let cue = &state.balls[CUE_BALL];
        assert!((cue.pos.x - TABLE_W * 0.8).abs() < 1e-4);
        assert!((cue.pos.y - TABLE_H * 0.5).abs() < 1e-4);
        let apex = &state.balls[1];
        assert!((apex.pos.x - TABLE_W * 0.4).abs() < 1e-4);

        // Black ball centers the back row
        let black = &state.balls[BLACK_BALL];
        assert!((black.pos.y - TABLE_H * 0.5).abs() < 1e-4);
        assert!(black.pos.x < apex.pos.x);

        // One pocket per corner
        assert_eq!(state.pockets[0], Vec2::ZERO);
        assert_eq!(state.pockets[2], Vec2::new(TABLE_W, TABLE_H));
    }

    #[test]
    fn test_cue_ball_down_is_game_over() {
        let mut state = table_state();
        state.balls[CUE_BALL].active = false;

        state.evaluate_outcome(1.0 / 60.0);
        assert_eq!(state.outcome, Outcome::Over);
        assert!(state.game_over());
        assert!(!state.game_won());
    }

    #[test]
    fn test_game_over_is_terminal_and_stops_score_decay() {
        let mut state = table_state();
        state.balls[CUE_BALL].active = false;
        state.evaluate_outcome(1.0 / 60.0);
        let score = state.score;

        for _ in 0..10 {
            state.evaluate_outcome(1.0 / 60.0);
        }
        assert_eq!(state.outcome, Outcome::Over);
        assert!((state.score - score).abs() < 1e-6);
    }

    #[test]
    fn test_black_ball_down_early_is_game_over() {
        let mut state = table_state();
        state.balls[BLACK_BALL].active = false;
        // Slot 2 still on the table
        state.balls[1].active = false;
        state.balls[3].active = false;
        state.balls[4].active = false;
        state.balls[5].active = false;

        state.evaluate_outcome(1.0 / 60.0);
        assert_eq!(state.outcome, Outcome::Over);
    }

    #[test]
    fn test_black_ball_down_with_only_slot_5_left_keeps_running() {
        // Slot 5 is not part of the premature-black check; the level keeps
        // running with the black already gone
        let mut state = table_state();
        state.balls[BLACK_BALL].active = false;
        for slot in 1..5 {
            state.balls[slot].active = false;
        }

        state.evaluate_outcome(1.0 / 60.0);
        assert_eq!(state.outcome, Outcome::Running);
    }

    #[test]
    fn test_clearing_every_ball_wins() {
        let mut state = table_state();
        for slot in 1..BALL_COUNT {
            state.balls[slot].active = false;
        }

        state.evaluate_outcome(1.0 / 60.0);
        assert_eq!(state.outcome, Outcome::Won);
        assert!(state.game_won());

        // Terminal: further evaluation never leaves Won
        state.evaluate_outcome(1.0 / 60.0);
        assert_eq!(state.outcome, Outcome::Won);
    }

    #[test]
    fn test_cue_loss_outranks_win() {
        let mut state = table_state();
        for ball in &mut state.balls {
            ball.active = false;
        }

        state.evaluate_outcome(1.0 / 60.0);
        assert_eq!(state.outcome, Outcome::Over);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let mut state = table_state();
        state.score = 0.05;

        state.evaluate_outcome(1.0);
        assert_eq!(state.score, 0.0);
        state.evaluate_outcome(1.0);
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = table_state();
        state.balls[CUE_BALL].active = false;
        state.evaluate_outcome(1.0 / 60.0);
        assert_eq!(state.outcome, Outcome::Over);

        state.restart_level();
        assert_eq!(state.outcome, Outcome::Running);
        assert!(state.balls[CUE_BALL].active);
        assert!((state.score - state.tuning.max_score).abs() < 1e-6);
    }

    #[test]
    fn test_title_window() {
        let mut state = table_state();
        assert!(state.show_title());
        state.timer = TITLE_SECS - 0.1;
        assert!(state.show_title());
        state.timer = TITLE_SECS;
        assert!(!state.show_title());
    }

    #[test]
    fn test_score_text_truncates() {
        let mut state = table_state();
        state.score = 987.9;
        assert_eq!(state.score_text(), "987");
        state.score = 0.0;
        assert_eq!(state.score_text(), "0");
    }

    #[test]
    fn test_highlight_stays_on_the_ball() {
        let state = table_state();
        for ball in &state.balls {
            let hl = state.highlight_position(ball);
            assert!((hl - ball.pos).length() <= ball.radius * 0.6 + 1e-4);
        }
    }

    #[test]
    fn test_highlight_under_the_light_stays_put() {
        // Ball centered on the light: the highlight collapses to the center
        let mut state = table_state();
        state.balls[CUE_BALL].pos = state.light;
        let hl = state.highlight_position(&state.balls[CUE_BALL]);
        assert!((hl - state.light).length() < 1e-2);
    }
}
