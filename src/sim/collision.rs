//! Collision detection and response against the boundary sphere
//!
//! Balls only ever touch the inside of the boundary wall, so a collision is a
//! distance test against the center followed by a mirror reflection.

use glam::Vec3;

use super::state::BoundarySphere;

/// Result of a wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    /// Whether the ball reached the wall
    pub hit: bool,
    /// Outward unit normal at the ball's bearing (zero at the exact center)
    pub normal: Vec3,
    /// How far the ball overlaps the wall (`<= 0` when not touching)
    pub penetration: f32,
}

/// Check whether a ball touches or crosses the boundary wall.
///
/// Touching counts: `distance + radius >= boundary.radius` is a hit.
pub fn wall_contact(position: Vec3, radius: f32, boundary: &BoundarySphere) -> WallContact {
    let offset = position - boundary.center;
    let penetration = offset.length() + radius - boundary.radius;
    WallContact {
        hit: penetration >= 0.0,
        normal: offset.normalize_or_zero(),
        penetration,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec3, normal: Vec3) -> Vec3 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Pull a ball back onto the allowed envelope if it has left it.
///
/// Returns the corrected position; direction from the center is preserved.
pub fn clamp_inside(position: Vec3, radius: f32, boundary: &BoundarySphere) -> Vec3 {
    let offset = position - boundary.center;
    let max_distance = boundary.max_center_distance(radius);
    if offset.length() > max_distance {
        boundary.center + offset.normalize_or_zero() * max_distance
    } else {
        position
    }
}
