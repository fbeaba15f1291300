//! Aim input published by the input layer once per frame.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    /// Player-to-cursor angle in on-screen degrees.
    pub degrees: f32,
    /// Cursor position in screen pixels.
    pub cursor: Vector2,
}

impl Default for Aim {
    fn default() -> Self {
        Self {
            degrees: 0.0,
            cursor: Vector2::zero(),
        }
    }
}
