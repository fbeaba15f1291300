//! Gameplay components and value types.
//!
//! Submodules overview:
//! - [`body`] – collision body referenced by players and enemies
//! - [`enemy`] – health, hurt flash and death fall
//! - [`player`] – player state, movement flags and equipped weapon
//! - [`projectile`] – spawned attack segments handed to physics
//! - [`sprite`] – atlas region, placement and bounded animation frame
//! - [`weapon`] – swing state, attack styles and projectile fan parameters

pub mod body;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod sprite;
pub mod weapon;
