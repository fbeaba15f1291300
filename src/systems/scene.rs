//! Per-frame scene composition.
//!
//! [`compose_scene`] is the single call that drives a frame. Draw order is
//! fixed:
//!
//! 1. map background (tall tiles not covering the player included)
//! 2. player and its weapon
//! 3. enemies
//! 4. live projectiles
//! 5. deferred foreground tiles
//! 6. debug overlay, when [`DebugMode`] is present
//!
//! Each entity is animated right before it is drawn. The [`FrameCounter`]
//! advances once, after everything has been drawn.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::body::Body;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::render::command::{DrawList, Renderer};
use crate::resources::debugmode::DebugMode;
use crate::resources::framecounter::FrameCounter;
use crate::resources::mapmodel::{MapModel, TileAtlas};
use crate::resources::projectiles::LiveProjectiles;
use crate::systems::animation::{animate_enemy, animate_player, draw_projectile};
use crate::systems::debugoverlay::draw_debug_overlay;
use crate::systems::tiles::draw_map_background;

/// Compose one frame of the scene into `renderer`.
pub fn compose_scene(world: &mut World, renderer: &mut impl Renderer) {
    let frames = *world.get_resource_or_insert_with(FrameCounter::default);

    let player_y = {
        let mut players = world.query::<&Player>();
        players.iter(world).next().map(|p| p.sprite.dest.y)
    };

    let foreground = match (
        world.get_resource::<MapModel>(),
        world.get_resource::<TileAtlas>(),
    ) {
        (Some(map), Some(atlas)) => draw_map_background(map, atlas, player_y, renderer),
        _ => {
            trace!("no map loaded, skipping tiles");
            DrawList::new()
        }
    };

    {
        let mut players = world.query::<&mut Player>();
        if let Some(mut player) = players.iter_mut(world).next() {
            animate_player(&mut player, frames, renderer);
        }
    }

    {
        let mut enemies = world.query::<(&mut Enemy, &Body)>();
        for (mut enemy, body) in enemies.iter_mut(world) {
            animate_enemy(&mut enemy, body, frames, renderer);
        }
    }

    if let Some(live) = world.get_resource::<LiveProjectiles>() {
        for projectile in live.iter() {
            draw_projectile(projectile, renderer);
        }
    }

    foreground.replay(renderer);

    if world.contains_resource::<DebugMode>() {
        draw_debug_overlay(world, renderer);
    }

    world.resource_mut::<FrameCounter>().advance();
}
