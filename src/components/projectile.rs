use raylib::prelude::Vector2;

use crate::components::sprite::Sprite;

/// A spawned attack segment handed to the physics layer.
///
/// `start`..`end` is the straight spawn-to-reach segment, not a trajectory.
/// `trajectory` is the facing in degrees, present only for projectiles with a
/// positive velocity.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub start: Vector2,
    pub end: Vector2,
    pub ttl: u32,
    pub velocity: f32,
    pub trajectory: Option<f32>,
    pub sprite: Sprite,
}

impl Projectile {
    /// Rotation to draw the sprite with; sprites face up in the atlas.
    pub fn draw_rotation(&self) -> f32 {
        180.0 - self.trajectory.unwrap_or(0.0)
    }

    pub fn is_expired(&self) -> bool {
        self.ttl == 0
    }
}
