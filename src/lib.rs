//! Skirmish library.
//!
//! Presentation and combat-animation core of a top-down action game: tile
//! drawing with player occlusion, per-entity animation state machines,
//! attack fan geometry and the per-frame compositor that ties them together.

pub mod components;
pub mod events;
pub mod game;
pub mod render;
pub mod resources;
pub mod systems;
pub mod util;
