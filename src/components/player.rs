//! The player-controlled character.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::body::Body;
use crate::components::sprite::Sprite;
use crate::components::weapon::Weapon;

/// Direction keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Movement {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Player state. Lives on the same entity as its [`Body`].
#[derive(Component, Debug, Clone)]
pub struct Player {
    pub sprite: Sprite,
    pub flipped: bool,
    pub weapon: Weapon,
    /// Where the weapon is held, relative to the body position.
    pub hand: Vector2,
    pub movement: Movement,
    pub speed: f32,
    /// Frames left before another attack is allowed.
    pub attack_cooldown: u32,
    /// Pending attack request for input layers that poll a held button.
    /// An [`AttackEvent`](crate::events::attack::AttackEvent) carries the
    /// trigger on its own; spawning an attack always clears this.
    pub attacking: bool,
}

impl Player {
    pub fn new(sprite: Sprite, weapon: Weapon, hand: Vector2, speed: f32) -> Self {
        Self {
            sprite,
            flipped: false,
            weapon,
            hand,
            movement: Movement::default(),
            speed,
            attack_cooldown: 0,
            attacking: false,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.movement.any()
    }

    /// Move the body and drag the sprite and weapon along with it.
    pub fn move_by(&mut self, body: &mut Body, dx: f32, dy: f32) {
        body.translate(dx, dy);
        self.sync_to_body(body);
    }

    /// Re-derive sprite and weapon placement from the body position.
    pub fn sync_to_body(&mut self, body: &Body) {
        let rect = body.rect();
        self.sprite.dest.x = rect.x;
        self.sprite.dest.y = rect.y;
        self.weapon
            .anchored_move(body.pos.x + self.hand.x, body.pos.y + self.hand.y);
    }

    /// Hold `weapon` at the hand anchor, discarding the previous one.
    pub fn equip_weapon(&mut self, mut weapon: Weapon, body: &Body) {
        weapon.anchored_move(body.pos.x + self.hand.x, body.pos.y + self.hand.y);
        self.weapon = weapon;
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown == 0
    }

    pub fn tick_cooldown(&mut self) {
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Rectangle;

    fn sprite(w: f32) -> Sprite {
        Sprite::new(
            "atlas",
            Rectangle::new(0.0, 0.0, w, w),
            Rectangle::new(0.0, 0.0, w, w),
        )
    }

    fn player() -> Player {
        let weapon = Weapon::new(sprite(16.0), sprite(8.0));
        Player::new(sprite(16.0), weapon, Vector2::new(6.0, 10.0), 2.0)
    }

    #[test]
    fn test_move_by_reanchors_weapon() {
        let mut p = player();
        let mut body = Body::new(100.0, 50.0, 16.0, 16.0);
        p.move_by(&mut body, 4.0, -2.0);
        assert_eq!(body.pos.x, 104.0);
        assert_eq!(p.sprite.dest.x, 104.0);
        assert_eq!(p.sprite.dest.y, 48.0);
        assert_eq!(p.weapon.sprite.dest.x, 110.0);
        assert_eq!(p.weapon.sprite.dest.y, 58.0);
        assert_eq!(p.weapon.anchor.x, 110.0);
    }

    #[test]
    fn test_equip_replaces_weapon_at_hand() {
        let mut p = player();
        let body = Body::new(20.0, 20.0, 16.0, 16.0);
        let new_weapon = Weapon::new(sprite(32.0), sprite(8.0)).with_reach(48.0);
        p.equip_weapon(new_weapon, &body);
        assert_eq!(p.weapon.reach, 48.0);
        assert_eq!(p.weapon.sprite.dest.width, 32.0);
        assert_eq!(p.weapon.sprite.dest.x, 26.0);
        assert_eq!(p.weapon.sprite.dest.y, 30.0);
    }

    #[test]
    fn test_is_moving() {
        let mut p = player();
        assert!(!p.is_moving());
        p.movement.left = true;
        assert!(p.is_moving());
    }

    #[test]
    fn test_cooldown_stops_at_zero() {
        let mut p = player();
        p.attack_cooldown = 2;
        assert!(!p.can_attack());
        p.tick_cooldown();
        p.tick_cooldown();
        p.tick_cooldown();
        assert_eq!(p.attack_cooldown, 0);
        assert!(p.can_attack());
    }
}
