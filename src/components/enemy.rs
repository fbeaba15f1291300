//! Enemies: health, hurt flash and the fall-over death animation.

use bevy_ecs::prelude::Component;

use crate::components::sprite::Sprite;

/// Frames the hurt tint stays on after a hit.
pub const HURT_FRAMES: u32 = 16;
/// Frames the death rotation keeps advancing.
pub const DEATH_FRAMES: u32 = 32;
/// Degrees added to the death rotation per frame.
pub const DEATH_ROTATION_STEP: f32 = 8.0;
/// The death rotation never goes past this.
pub const DEATH_ROTATION_CAP: f32 = 90.0;

#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub sprite: Sprite,
    pub health: i32,
    pub max_health: i32,
    pub hurt_frames: u32,
    pub death_frames: u32,
    pub dead: bool,
}

impl Enemy {
    pub fn new(sprite: Sprite, max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            sprite,
            health: max_health,
            max_health,
            hurt_frames: 0,
            death_frames: 0,
            dead: false,
        }
    }

    /// Take one point of damage and flash; dies when health runs out.
    pub fn hurt(&mut self) {
        self.hurt_frames = HURT_FRAMES;
        self.health = (self.health - 1).max(0);
        if self.health == 0 && !self.dead {
            self.die();
        }
    }

    pub fn die(&mut self) {
        self.death_frames = DEATH_FRAMES;
        self.dead = true;
    }

    /// Health bar is only worth drawing for a wounded, living enemy.
    pub fn shows_health_bar(&self) -> bool {
        self.health != self.max_health && !self.dead
    }

    /// Fraction of health left, in `0.0..=1.0`.
    pub fn health_ratio(&self) -> f32 {
        self.health.clamp(0, self.max_health) as f32 / self.max_health as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Rectangle;

    fn enemy(max_health: i32) -> Enemy {
        let sprite = Sprite::new(
            "atlas",
            Rectangle::new(368.0, 0.0, 16.0, 16.0),
            Rectangle::new(0.0, 0.0, 16.0, 16.0),
        );
        Enemy::new(sprite, max_health)
    }

    #[test]
    fn test_hurt_sets_flash_and_damage() {
        let mut e = enemy(3);
        e.hurt();
        assert_eq!(e.hurt_frames, HURT_FRAMES);
        assert_eq!(e.health, 2);
        assert!(!e.dead);
        assert!(e.shows_health_bar());
    }

    #[test]
    fn test_last_hit_kills() {
        let mut e = enemy(1);
        e.hurt();
        assert!(e.dead);
        assert_eq!(e.death_frames, DEATH_FRAMES);
        assert!(!e.shows_health_bar());
    }

    #[test]
    fn test_health_never_negative() {
        let mut e = enemy(1);
        e.hurt();
        e.hurt();
        e.hurt();
        assert_eq!(e.health, 0);
        assert_eq!(e.health_ratio(), 0.0);
    }

    #[test]
    fn test_death_does_not_restart_once_dead() {
        let mut e = enemy(1);
        e.hurt();
        e.death_frames = 5;
        e.hurt();
        assert_eq!(e.death_frames, 5);
    }

    #[test]
    fn test_full_health_hides_bar() {
        let e = enemy(4);
        assert!(!e.shows_health_bar());
        assert_eq!(e.health_ratio(), 1.0);
    }
}
