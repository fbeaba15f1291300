//! Frame pipeline.
//!
//! Submodules overview
//! - [`animation`] – player, weapon and enemy state machines plus their draws
//! - [`combat`] – attack fan geometry, attack observer and cooldowns
//! - [`debugoverlay`] – collision outlines, facing indicator, diagnostics text
//! - [`movement`] – stand-in physics for the demo binary
//! - [`scene`] – fixed-order frame composition
//! - [`tiles`] – tile map drawing with deferred foreground tiles

pub mod animation;
pub mod combat;
pub mod debugoverlay;
pub mod movement;
pub mod scene;
pub mod tiles;
