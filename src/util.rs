//! Small geometry helpers shared by input handling, animation and combat.
//!
//! Angles in this crate are "on-screen degrees": 0° points down the +Y axis
//! and angles grow toward +X, so a point at `reach` distance along `θ` sits at
//! `(reach·sin θ, reach·cos θ)` from its origin.

use raylib::prelude::{Rectangle, Vector2};

/// Mirror a source rectangle so the texture is sampled right-to-left.
pub fn flip_left(src: &mut Rectangle) {
    src.width = -src.width.abs();
}

/// Restore a source rectangle to its natural left-to-right sampling.
pub fn flip_right(src: &mut Rectangle) {
    src.width = src.width.abs();
}

/// Angle in on-screen degrees from `from` toward `to`.
pub fn aim_angle_degrees(from: Vector2, to: Vector2) -> f32 {
    let rise = to.x - from.x;
    let run = to.y - from.y;
    rise.atan2(run).to_degrees()
}

/// Offset of a point `reach` units away along `degrees`.
pub fn offset_along(reach: f32, degrees: f32) -> Vector2 {
    let radians = degrees.to_radians();
    Vector2::new(reach * radians.sin(), reach * radians.cos())
}
