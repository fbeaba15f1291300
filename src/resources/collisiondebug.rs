//! Static collidables of the current map, kept only for the debug overlay.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

#[derive(Resource, Debug, Clone, Default)]
pub struct CollisionDebug(pub Vec<Rectangle>);
