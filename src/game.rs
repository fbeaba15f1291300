//! Scene lifecycle.
//!
//! A scene is a [`World`] holding the map, the frame counter, the projectile
//! lists and the player/enemy entities. Everything here is meant to run
//! between frames, never while [`compose_scene`](crate::systems::scene::compose_scene)
//! is drawing.
//!
//! - [`setup_scene`] inserts scene resources and registers observers
//! - [`load_map`] swaps in a new map, atlas and debug collidables
//! - [`spawn_player`] / [`spawn_enemy`] add entities
//! - [`teardown_scene`] clears entities and scene resources

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Rectangle;

use crate::components::body::Body;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::aim::Aim;
use crate::resources::collisiondebug::CollisionDebug;
use crate::resources::debugmode::DebugMode;
use crate::resources::framecounter::FrameCounter;
use crate::resources::mapmodel::{MapModel, TileAtlas};
use crate::resources::projectiles::{LiveProjectiles, SpawnedProjectiles};
use crate::systems::combat::attack_observer;

/// Insert the resources a scene needs and register its observers.
pub fn setup_scene(world: &mut World, debug: bool) {
    world.insert_resource(FrameCounter::default());
    world.insert_resource(Aim::default());
    world.insert_resource(CollisionDebug::default());
    world.insert_resource(LiveProjectiles::default());
    world.insert_resource(SpawnedProjectiles::default());
    if debug {
        world.insert_resource(DebugMode {});
    }
    world.add_observer(attack_observer);
    world.add_observer(switch_debug_observer);
    world.flush();
    info!("Scene set up (debug={})", debug);
}

/// Replace the current map wholesale.
pub fn load_map(world: &mut World, map: MapModel, atlas: TileAtlas, collidables: Vec<Rectangle>) {
    info!(
        "Loading map: {}x{} tiles, {} collidables",
        map.width,
        map.height(),
        collidables.len()
    );
    world.insert_resource(map);
    world.insert_resource(atlas);
    world.insert_resource(CollisionDebug(collidables));
}

/// Make `player` the active player, replacing any previous one.
pub fn spawn_player(world: &mut World, mut player: Player, body: Body) -> Entity {
    let previous: Vec<Entity> = {
        let mut q = world.query_filtered::<Entity, With<Player>>();
        q.iter(world).collect()
    };
    for entity in previous {
        world.despawn(entity);
    }
    player.sync_to_body(&body);
    world.spawn((player, body)).id()
}

pub fn spawn_enemy(world: &mut World, mut enemy: Enemy, body: Body) -> Entity {
    let rect = body.rect();
    enemy.sprite.dest.x = rect.x;
    enemy.sprite.dest.y = rect.y;
    world.spawn((enemy, body)).id()
}

/// Remove all scene entities and resources.
pub fn teardown_scene(world: &mut World) {
    let entities: Vec<Entity> = {
        let mut q = world.query_filtered::<Entity, Or<(With<Player>, With<Enemy>)>>();
        q.iter(world).collect()
    };
    for entity in entities {
        world.despawn(entity);
    }
    world.remove_resource::<MapModel>();
    world.remove_resource::<TileAtlas>();
    world.remove_resource::<CollisionDebug>();
    world.remove_resource::<LiveProjectiles>();
    world.remove_resource::<SpawnedProjectiles>();
    world.remove_resource::<FrameCounter>();
    world.remove_resource::<Aim>();
    info!("Scene torn down");
}
