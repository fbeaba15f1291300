//! Weapons held by the player.
//!
//! A [`Weapon`] carries its own sprite, the template sprite for every
//! projectile it spawns, swing timing and the parameters of its projectile
//! fan. The swing itself is an explicit [`AttackState`] and the rotation
//! over a swing is chosen per weapon through an [`AttackStyle`].

use log::warn;
use raylib::prelude::{Color, Vector2};

use crate::components::sprite::Sprite;

/// Swing progress of a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackState {
    #[default]
    Idle,
    /// Mid-swing; the value is the swing frame, counting up from 0.
    Swinging(u32),
}

/// How a weapon rotates while swinging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStyle {
    /// Held level at +90° for the whole swing.
    Stab,
    /// Arc from -45° to +135° around the idle rotation.
    Sweep,
    /// Jab out to +90° and back, peaking mid-swing.
    Thrust,
}

impl AttackStyle {
    /// Rotation in degrees for `frame` of a swing lasting `attack_speed` frames.
    pub fn rotation(self, idle_rotation: f32, frame: u32, attack_speed: u32) -> f32 {
        let progress = if attack_speed == 0 {
            1.0
        } else {
            (frame as f32 / attack_speed as f32).clamp(0.0, 1.0)
        };
        match self {
            AttackStyle::Stab => idle_rotation + 90.0,
            AttackStyle::Sweep => idle_rotation - 45.0 + 180.0 * progress,
            AttackStyle::Thrust => idle_rotation + 90.0 * (1.0 - (2.0 * progress - 1.0).abs()),
        }
    }
}

/// Shape of the projectile fan a weapon spawns on attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpec {
    pub count: u32,
    /// Distance from the attacker's center to each spawn endpoint.
    pub length: f32,
    /// Degrees between adjacent projectiles.
    pub spread_degrees: f32,
    pub ttl_frames: u32,
    /// Zero for hitboxes that do not travel.
    pub velocity: f32,
}

impl Default for ProjectileSpec {
    fn default() -> Self {
        Self {
            count: 1,
            length: 16.0,
            spread_degrees: 0.0,
            ttl_frames: 1,
            velocity: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Weapon {
    pub sprite: Sprite,
    pub flipped: bool,
    /// Copied into every spawned projectile.
    pub projectile_template: Sprite,
    /// Pivot used when drawing the weapon rotated.
    pub handle: Vector2,
    /// Position the weapon rests at, re-derived whenever its holder moves.
    pub anchor: Vector2,
    /// Melee reach of the weapon itself. Projectile fan endpoints use
    /// `projectiles.length` instead.
    pub reach: f32,
    /// Frames a swing lasts.
    pub attack_speed: u32,
    /// Frames before the holder may attack again.
    pub cooldown: u32,
    pub tint: Color,
    pub attack: AttackState,
    pub idle_rotation: f32,
    pub style: Option<AttackStyle>,
    pub projectiles: ProjectileSpec,
}

impl Weapon {
    pub fn new(sprite: Sprite, projectile_template: Sprite) -> Self {
        let anchor = Vector2::new(sprite.dest.x, sprite.dest.y);
        Self {
            sprite,
            flipped: false,
            projectile_template,
            handle: Vector2::zero(),
            anchor,
            reach: 0.0,
            attack_speed: 1,
            cooldown: 0,
            tint: Color::WHITE,
            attack: AttackState::Idle,
            idle_rotation: 0.0,
            style: None,
            projectiles: ProjectileSpec::default(),
        }
    }

    pub fn with_style(mut self, style: AttackStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_timing(mut self, attack_speed: u32, cooldown: u32) -> Self {
        self.attack_speed = attack_speed;
        self.cooldown = cooldown;
        self
    }

    pub fn with_handle(mut self, x: f32, y: f32) -> Self {
        self.handle = Vector2::new(x, y);
        self
    }

    pub fn with_reach(mut self, reach: f32) -> Self {
        self.reach = reach;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_idle_rotation(mut self, degrees: f32) -> Self {
        self.idle_rotation = degrees;
        self
    }

    pub fn with_projectiles(mut self, spec: ProjectileSpec) -> Self {
        self.projectiles = spec;
        self
    }

    /// Place the weapon at `(x, y)` and remember it as the resting anchor.
    pub fn anchored_move(&mut self, x: f32, y: f32) {
        self.anchor = Vector2::new(x, y);
        self.sprite.dest.x = x;
        self.sprite.dest.y = y;
    }

    /// Snap back to the anchor, dropping any idle bob offset.
    pub fn recenter(&mut self) {
        self.sprite.dest.x = self.anchor.x;
        self.sprite.dest.y = self.anchor.y;
    }

    pub fn start_swing(&mut self) {
        self.attack = AttackState::Swinging(0);
    }

    pub fn is_swinging(&self) -> bool {
        matches!(self.attack, AttackState::Swinging(_))
    }

    /// Advance an in-progress swing by one frame.
    ///
    /// Returns the rotation for the frame being drawn, or `None` when the
    /// weapon is idle. The swing ends (and the weapon recenters) on the frame
    /// the counter reaches `attack_speed`.
    pub fn step_swing(&mut self) -> Option<f32> {
        let AttackState::Swinging(frame) = self.attack else {
            return None;
        };
        let Some(style) = self.style else {
            warn!("weapon swing started without an attack style, holding idle rotation");
            self.attack = AttackState::Idle;
            return None;
        };

        let rotation = style.rotation(self.idle_rotation, frame, self.attack_speed);
        let next = frame + 1;
        if next >= self.attack_speed {
            self.attack = AttackState::Idle;
            self.recenter();
        } else {
            self.attack = AttackState::Swinging(next);
        }
        Some(rotation)
    }
}
