//! Debug toggle resource.
//!
//! While present, the compositor draws collision outlines, projectile spawn
//! segments and the facing indicator, and the UI pass prints diagnostics.

use bevy_ecs::prelude::Resource;

/// Marker resource: presence enables the debug overlay.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
