//! Ball-ball collision response
//!
//! Equal-mass elastic impulse: rotate both velocities into the frame of the
//! line joining the centers, exchange the along-axis components, rotate back.

use glam::Vec2;

use super::state::Ball;
use crate::rotate_vec;

/// Post-impulse velocities for an overlapping pair, or `None` when the pair
/// fails the approach test along the line of centers.
///
/// The caller guarantees both balls are active and overlapping; this only
/// decides whether an impulse applies and computes it. The exchange negates
/// the along-axis relative velocity, so a pair that swapped this frame fails
/// the test on the mirrored ordered visit and is not kicked twice.
pub fn elastic_pair_response(ball: &Ball, other: &Ball) -> Option<(Vec2, Vec2)> {
    let delta = other.pos - ball.pos;
    let rel = ball.vel - other.vel;
    if rel.dot(delta) < 0.0 {
        return None;
    }

    // Rotate so the line of centers becomes the x axis
    let theta = -delta.y.atan2(delta.x);
    let u1 = rotate_vec(ball.vel, theta);
    let u2 = rotate_vec(other.vel, theta);

    // Equal masses: the along-axis components swap, tangential parts stay
    let v1 = rotate_vec(Vec2::new(u2.x, u1.y), -theta);
    let v2 = rotate_vec(Vec2::new(u1.x, u2.y), -theta);
    Some((v1, v2))
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n for a unit normal n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
