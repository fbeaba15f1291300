//! Built-in demo content: a small meadow map, a player with two weapons and
//! a handful of enemies, all cut from one sprite sheet.

use std::sync::Arc;

use raylib::prelude::{Color, Rectangle, Vector2};

use skirmish::components::body::Body;
use skirmish::components::enemy::Enemy;
use skirmish::components::player::Player;
use skirmish::components::sprite::Sprite;
use skirmish::components::weapon::{AttackStyle, ProjectileSpec, Weapon};
use skirmish::resources::mapmodel::{MapModel, TileAtlas, TileSize};
use skirmish::systems::animation::{ENEMY_IDLE_SRC_X, PLAYER_IDLE_SRC_X};

pub const SHEET: &str = "sheet";

const MAP_WIDTH: usize = 30;
const MAP_HEIGHT: usize = 20;
const SRC_TILE: f32 = 16.0;
const DEST_TILE: f32 = 32.0;
const TREE_COUNT: usize = 18;

pub fn map() -> (MapModel, TileAtlas, Vec<Rectangle>) {
    let mut tiles = vec![1u32; MAP_WIDTH * MAP_HEIGHT];
    let mut layers = vec!["g".to_string(); MAP_WIDTH * MAP_HEIGHT];
    let mut collidables = Vec::new();

    for i in 0..tiles.len() {
        let (col, row) = (i % MAP_WIDTH, i / MAP_WIDTH);
        if col == 0 || row == 0 || col == MAP_WIDTH - 1 || row == MAP_HEIGHT - 1 {
            layers[i] = "W".to_string();
            collidables.push(cell_rect(col, row));
        }
    }

    let mut placed = 0;
    while placed < TREE_COUNT {
        let col = fastrand::usize(2..MAP_WIDTH - 2);
        let row = fastrand::usize(2..MAP_HEIGHT - 2);
        let i = row * MAP_WIDTH + col;
        if layers[i] != "g" {
            continue;
        }
        layers[i] = "T".to_string();
        tiles[i] = fastrand::u32(1..=2);
        collidables.push(cell_rect(col, row));
        placed += 1;
    }

    let mut atlas = TileAtlas::new();
    atlas.insert("g", 1, 16.0, 64.0);
    atlas.insert("t", 1, 0.0, 96.0);
    atlas.insert("t", 2, 16.0, 96.0);
    atlas.insert("w", 1, 0.0, 112.0);

    let map = MapModel {
        tiles,
        width: MAP_WIDTH,
        layers,
        src_tile: TileSize { width: SRC_TILE, height: SRC_TILE },
        dest_tile: TileSize { width: DEST_TILE, height: DEST_TILE },
        tex_key: Arc::from(SHEET),
    };
    (map, atlas, collidables)
}

// tiles are drawn anchored at their bottom-right corner
fn cell_rect(col: usize, row: usize) -> Rectangle {
    Rectangle::new(
        col as f32 * DEST_TILE - DEST_TILE,
        row as f32 * DEST_TILE - DEST_TILE,
        DEST_TILE,
        DEST_TILE,
    )
}

pub fn sword() -> Weapon {
    Weapon::new(
        Sprite::new(SHEET, Rectangle::new(320.0, 80.0, 10.0, 21.0), Rectangle::new(0.0, 0.0, 20.0, 42.0)),
        Sprite::new(SHEET, Rectangle::new(336.0, 80.0, 8.0, 16.0), Rectangle::new(0.0, 0.0, 16.0, 32.0)),
    )
    .with_style(AttackStyle::Sweep)
    .with_timing(12, 20)
    .with_handle(10.0, 36.0)
    .with_reach(40.0)
    .with_projectiles(ProjectileSpec {
        count: 3,
        length: 40.0,
        spread_degrees: 30.0,
        ttl_frames: 6,
        velocity: 0.0,
    })
}

pub fn bow() -> Weapon {
    Weapon::new(
        Sprite::new(SHEET, Rectangle::new(352.0, 80.0, 10.0, 21.0), Rectangle::new(0.0, 0.0, 20.0, 42.0)),
        Sprite::new(SHEET, Rectangle::new(368.0, 80.0, 8.0, 16.0), Rectangle::new(0.0, 0.0, 16.0, 32.0)),
    )
    .with_style(AttackStyle::Thrust)
    .with_timing(8, 30)
    .with_handle(10.0, 30.0)
    .with_reach(24.0)
    .with_tint(Color::new(230, 220, 255, 255))
    .with_projectiles(ProjectileSpec {
        count: 1,
        length: 24.0,
        spread_degrees: 0.0,
        ttl_frames: 60,
        velocity: 6.0,
    })
}

pub fn player() -> (Player, Body) {
    let sprite = Sprite::new(
        SHEET,
        Rectangle::new(PLAYER_IDLE_SRC_X, 0.0, 16.0, 28.0),
        Rectangle::new(0.0, 0.0, 32.0, 56.0),
    );
    let player = Player::new(sprite, sword(), Vector2::new(14.0, 12.0), 2.5);
    (player, Body::new(200.0, 200.0, 24.0, 28.0))
}

pub fn enemies(count: usize) -> Vec<(Enemy, Body)> {
    (0..count)
        .map(|_| {
            let x = fastrand::f32() * (MAP_WIDTH as f32 - 6.0) * DEST_TILE + 3.0 * DEST_TILE;
            let y = fastrand::f32() * (MAP_HEIGHT as f32 - 6.0) * DEST_TILE + 3.0 * DEST_TILE;
            let sprite = Sprite::new(
                SHEET,
                Rectangle::new(ENEMY_IDLE_SRC_X, 16.0, 16.0, 16.0),
                Rectangle::new(0.0, 0.0, 32.0, 32.0),
            );
            (Enemy::new(sprite, 3), Body::new(x, y, 28.0, 28.0))
        })
        .collect()
}
