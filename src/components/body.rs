//! Collision body handle.
//!
//! The authoritative position of a [`Body`] belongs to the physics layer; the
//! gameplay components living on the same entity only read it, except for
//! [`Player::move_by`](crate::components::player::Player::move_by) which
//! applies a requested displacement.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Axis-aligned collision body: top-left position and size in world units.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vector2,
    pub size: Vector2,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Screen rectangle covered by the body.
    pub fn rect(&self) -> Rectangle {
        Rectangle::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            self.pos.x + self.size.x / 2.0,
            self.pos.y + self.size.y / 2.0,
        )
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size.y
    }
}
