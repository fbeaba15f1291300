//! Attack trigger raised by the input layer.
//!
//! Whether to attack is an input decision; the combat observer only checks
//! the player's cooldown and then computes the projectile fan.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy)]
pub struct AttackEvent {}
