//! Per-frame simulation step
//!
//! Core loop that advances the table deterministically: outcome judgment,
//! steering and integration, pair collisions, cushion bounces, pocket
//! capture - in that order.

use glam::Vec2;

use super::collision::{elastic_pair_response, reflect_velocity};
use super::state::{GameEvent, GameState, Outcome};
use crate::consts::*;

/// Tilt-sensor steering for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TiltInput {
    /// Forward/back tilt; accelerates the cue ball along +y
    pub pitch: f32,
    /// Left/right tilt; accelerates the cue ball along -x
    pub roll: f32,
}

/// Advance the game state by one frame of `dt` seconds.
///
/// The outcome is judged first, against the previous frame's ball states, so
/// the frame that pockets a deciding ball still finishes its own physics
/// pass; every frame after that is frozen until the host restarts the level.
pub fn tick(state: &mut GameState, input: TiltInput, dt: f32) {
    state.events.clear();

    state.evaluate_outcome(dt);
    if state.outcome != Outcome::Running {
        return;
    }

    state.timer += dt;

    integrate(state, input, dt);
    resolve_ball_collisions(state);
    resolve_cushion_bounces(state);
    capture_pocketed_balls(state);
}

/// Steering, damping, and explicit Euler integration
fn integrate(state: &mut GameState, input: TiltInput, dt: f32) {
    let damping = state.tuning.damping;
    for (i, ball) in state.balls.iter_mut().enumerate() {
        if !ball.active {
            continue;
        }

        if i == CUE_BALL {
            // Device axes: rolling right tips the table toward -x
            ball.vel.x -= input.roll * dt;
            ball.vel.y += input.pitch * dt;
        }

        // Felt friction: per-frame decay, independent of dt
        ball.vel *= damping;
        ball.pos += ball.vel * dt;
    }
}

/// Every ordered pair of active balls gets an overlap check. The mirrored
/// visit of a pair that already swapped fails the approach test, so each
/// overlap resolves exactly once per frame. 7 balls, 42 checks - fine.
fn resolve_ball_collisions(state: &mut GameState) {
    for i in 0..BALL_COUNT {
        for j in 0..BALL_COUNT {
            if i == j {
                continue;
            }
            if !state.balls[i].active || !state.balls[j].active {
                continue;
            }

            let dist = state.balls[i].pos.distance(state.balls[j].pos);
            if dist < state.balls[i].radius + state.balls[j].radius {
                if let Some((v1, v2)) = elastic_pair_response(&state.balls[i], &state.balls[j]) {
                    state.balls[i].vel = v1;
                    state.balls[j].vel = v2;
                    state.events.push(GameEvent::BallsCollided { first: i, second: j });
                }
            }
        }
    }
}

/// Reflect off the four cushions and push the ball back just inside
fn resolve_cushion_bounces(state: &mut GameState) {
    let width = state.width;
    let height = state.height;
    let GameState { balls, events, .. } = state;

    for (i, ball) in balls.iter_mut().enumerate() {
        if !ball.active {
            continue;
        }

        let inset = WALL_MARGIN + ball.radius;
        let mut bounced = false;

        if ball.pos.x < inset {
            ball.vel = reflect_velocity(ball.vel, Vec2::new(1.0, 0.0));
            ball.pos.x = inset + WALL_PUSH_OUT;
            bounced = true;
        }
        if ball.pos.x >= width - inset {
            ball.vel = reflect_velocity(ball.vel, Vec2::new(-1.0, 0.0));
            ball.pos.x = width - inset - WALL_PUSH_OUT;
            bounced = true;
        }
        if ball.pos.y < inset {
            ball.vel = reflect_velocity(ball.vel, Vec2::new(0.0, 1.0));
            ball.pos.y = inset + WALL_PUSH_OUT;
            bounced = true;
        }
        if ball.pos.y >= height - inset {
            ball.vel = reflect_velocity(ball.vel, Vec2::new(0.0, -1.0));
            ball.pos.y = height - inset - WALL_PUSH_OUT;
            bounced = true;
        }

        if bounced {
            events.push(GameEvent::CushionHit { ball: i });
        }
    }
}

/// Drop any ball whose center strays into a pocket's capture radius.
/// Runs last so a ball can still collide and bounce on the frame it drops.
fn capture_pocketed_balls(state: &mut GameState) {
    let capture = state.tuning.capture_radius();
    let GameState { balls, pockets, events, .. } = state;

    for (i, ball) in balls.iter_mut().enumerate() {
        if !ball.active {
            continue;
        }
        for pocket in pockets.iter() {
            if ball.pos.distance(*pocket) < capture {
                ball.active = false;
                events.push(GameEvent::Pocketed { ball: i });
                break;
            }
        }
    }
}
