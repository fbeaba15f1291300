//! Scene resources.
//!
//! Overview
//! - `aim` – player-to-cursor angle from the input layer
//! - `collisiondebug` – static collidables drawn by the debug overlay
//! - `debugmode` – presence enables debug overlays
//! - `framecounter` – the wrapping tick every animation reads
//! - `gameconfig` – INI-backed settings
//! - `mapmodel` – current tile map and its atlas lookup table
//! - `projectiles` – live projectiles (physics-owned) and the spawn outbox
pub mod aim;
pub mod collisiondebug;
pub mod debugmode;
pub mod framecounter;
pub mod gameconfig;
pub mod mapmodel;
pub mod projectiles;
