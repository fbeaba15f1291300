//! Skirmish demo entry point.
//!
//! Opens a raylib window and runs the scene compositor over a built-in demo
//! scene (or a map loaded from the config), with a stand-in physics step.
//!
//! # Controls
//!
//! - WASD: move
//! - Left mouse: attack toward the cursor
//! - E: swap between sword and bow
//! - F11: toggle the debug overlay
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

mod demo;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

use skirmish::components::body::Body;
use skirmish::components::player::Player;
use skirmish::events::attack::AttackEvent;
use skirmish::events::switchdebug::SwitchDebugEvent;
use skirmish::game;
use skirmish::render::{RaylibRenderer, TextureStore};
use skirmish::resources::aim::Aim;
use skirmish::resources::gameconfig::GameConfig;
use skirmish::resources::mapmodel::{MapModel, TileAtlas};
use skirmish::systems::combat::attack_cooldown_system;
use skirmish::systems::debugoverlay::compose_debug_ui;
use skirmish::systems::movement::{
    player_movement_system, projectile_hit_system, projectile_motion_system,
};
use skirmish::systems::scene::compose_scene;
use skirmish::util::aim_angle_degrees;

const DEMO_ENEMIES: usize = 5;

/// Skirmish top-down combat demo
#[derive(Parser)]
#[command(version, about = "Top-down combat scene demo")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,
}

fn load_configured_map(config: &GameConfig) -> Result<Option<(MapModel, TileAtlas)>, String> {
    let (Some(map_path), Some(atlas_path)) = (&config.map_path, &config.atlas_path) else {
        return Ok(None);
    };
    let map = MapModel::load_from_file(map_path)?;
    let atlas = TileAtlas::load_from_file(atlas_path)?;
    Ok(Some((map, atlas)))
}

fn read_input(rl: &RaylibHandle, world: &mut World) {
    let mouse = rl.get_mouse_position();
    let mut players = world.query::<(&mut Player, &Body)>();
    let mut aim = None;
    if let Some((mut player, body)) = players.iter_mut(world).next() {
        player.movement.up = rl.is_key_down(KeyboardKey::KEY_W);
        player.movement.down = rl.is_key_down(KeyboardKey::KEY_S);
        player.movement.left = rl.is_key_down(KeyboardKey::KEY_A);
        player.movement.right = rl.is_key_down(KeyboardKey::KEY_D);
        if rl.is_key_pressed(KeyboardKey::KEY_E) {
            let next = if player.weapon.projectiles.velocity > 0.0 {
                demo::sword()
            } else {
                demo::bow()
            };
            player.equip_weapon(next, body);
        }
        aim = Some(aim_angle_degrees(body.center(), mouse));
    }
    if let Some(degrees) = aim {
        *world.resource_mut::<Aim>() = Aim {
            degrees,
            cursor: mouse,
        };
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        world.trigger(AttackEvent {});
    }
    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        world.trigger(SwitchDebugEvent {});
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title("Skirmish");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    if let Err(e) = textures.load(&mut rl, &thread, demo::SHEET, &config.texture_path) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    let mut world = World::new();
    game::setup_scene(&mut world, cli.debug || config.debug);

    match load_configured_map(&config) {
        Ok(Some((map, atlas))) => game::load_map(&mut world, map, atlas, Vec::new()),
        Ok(None) => {
            let (map, atlas, collidables) = demo::map();
            game::load_map(&mut world, map, atlas, collidables);
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }

    let (player, body) = demo::player();
    game::spawn_player(&mut world, player, body);
    for (enemy, body) in demo::enemies(DEMO_ENEMIES) {
        game::spawn_enemy(&mut world, enemy, body);
    }
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems(attack_cooldown_system);
    update.add_systems(player_movement_system);
    update.add_systems(projectile_motion_system);
    update.add_systems(projectile_hit_system.after(projectile_motion_system));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!("Entering main loop");
    while !rl.window_should_close() {
        read_input(&rl, &mut world);
        update.run(&mut world);

        let fps = rl.get_fps();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(24, 20, 28, 255));
        let mut renderer = RaylibRenderer::new(&mut d, &textures);
        compose_scene(&mut world, &mut renderer);
        compose_debug_ui(&mut world, &mut renderer, fps);
    }

    game::teardown_scene(&mut world);
}
