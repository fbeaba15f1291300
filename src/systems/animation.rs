//! Per-entity animation state machines.
//!
//! Each function steps one entity's animation for the current frame and
//! immediately emits its draw commands, so a draw never sees a frame index
//! that is stale relative to the [`FrameCounter`] that drove it.
//!
//! # Cadence
//!
//! Sprite frames step on phase 1 of every 8-frame cycle; the idle weapon bob
//! runs on phase 0. Hurt and death counters tick every frame.

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::body::Body;
use crate::components::enemy::{DEATH_ROTATION_CAP, DEATH_ROTATION_STEP, Enemy};
use crate::components::player::Player;
use crate::components::projectile::Projectile;
use crate::components::sprite::{AnimFrame, Sprite};
use crate::components::weapon::Weapon;
use crate::render::command::{DrawCommand, Renderer};
use crate::resources::framecounter::FrameCounter;
use crate::util::{flip_left, flip_right};

/// Atlas X where the player's idle strip starts.
pub const PLAYER_IDLE_SRC_X: f32 = 128.0;
/// Atlas X where the player's run strip starts.
pub const PLAYER_RUN_SRC_X: f32 = 192.0;
/// Atlas X where the enemy idle strip starts.
pub const ENEMY_IDLE_SRC_X: f32 = 368.0;
/// Vertical nudge of the weapon while running.
pub const RUN_WEAPON_OFFSET: f32 = -4.0;
pub const HURT_TINT: Color = Color::RED;

const FRAME_STEP_PHASE: u8 = 1;
const WEAPON_BOB_PHASE: u8 = 0;

const HEALTH_BAR_HEIGHT: f32 = 4.0;
const HEALTH_BAR_GAP: f32 = 10.0;

fn bottom_right_origin(dest: Rectangle) -> Vector2 {
    Vector2::new(dest.width, dest.height)
}

fn sprite_command(sprite: &Sprite, origin: Vector2, tint: Color) -> DrawCommand {
    DrawCommand::Texture {
        tex_key: sprite.tex_key.clone(),
        src: sprite.src,
        dest: sprite.dest,
        origin,
        rotation: sprite.rotation,
        tint,
    }
}

/// Step the player's run/idle strip, then draw the player and its weapon.
pub fn animate_player(player: &mut Player, frames: FrameCounter, out: &mut impl Renderer) {
    if frames.at_phase(FRAME_STEP_PHASE) {
        player.sprite.frame.advance();
    }

    let mut weapon_offset = 0.0;
    if player.is_moving() {
        player.sprite.select_column(PLAYER_RUN_SRC_X);
        weapon_offset = RUN_WEAPON_OFFSET;
    } else {
        // facing is only re-applied while standing still
        if player.flipped {
            flip_left(&mut player.sprite.src);
        } else {
            flip_right(&mut player.sprite.src);
        }
        player.sprite.select_column(PLAYER_IDLE_SRC_X);
    }
    player.weapon.flipped = player.flipped;

    let origin = bottom_right_origin(player.sprite.dest);
    out.submit(sprite_command(&player.sprite, origin, Color::WHITE));

    let frame = player.sprite.frame;
    animate_weapon(
        &mut player.weapon,
        frame,
        frames.at_phase(WEAPON_BOB_PHASE),
        weapon_offset,
        out,
    );
}

/// Advance a swing (or bob while idle) and draw the weapon around its handle.
pub fn animate_weapon(
    weapon: &mut Weapon,
    holder_frame: AnimFrame,
    bob_tick: bool,
    offset: f32,
    out: &mut impl Renderer,
) {
    let mut rotation = match weapon.step_swing() {
        Some(rotation) => rotation,
        None => {
            if bob_tick {
                weapon.sprite.dest.y += if holder_frame.index() <= 1 { 1.0 } else { -1.0 };
            }
            weapon.idle_rotation
        }
    };
    weapon.sprite.rotation = rotation;

    if weapon.flipped {
        flip_left(&mut weapon.sprite.src);
        rotation = -rotation;
    } else {
        flip_right(&mut weapon.sprite.src);
    }

    let mut dest = weapon.sprite.dest;
    dest.y += offset;

    out.submit(DrawCommand::Texture {
        tex_key: weapon.sprite.tex_key.clone(),
        src: weapon.sprite.src,
        dest,
        origin: weapon.handle,
        rotation,
        tint: weapon.tint,
    });
}

/// Step an enemy's idle strip, hurt flash and death fall, then draw it.
pub fn animate_enemy(enemy: &mut Enemy, body: &Body, frames: FrameCounter, out: &mut impl Renderer) {
    if frames.at_phase(FRAME_STEP_PHASE) && !enemy.dead {
        enemy.sprite.frame.advance();
    }

    let tint = if enemy.hurt_frames > 0 {
        enemy.hurt_frames -= 1;
        HURT_TINT
    } else {
        Color::WHITE
    };

    if enemy.death_frames > 0 {
        if enemy.sprite.rotation < DEATH_ROTATION_CAP {
            enemy.sprite.rotation =
                (enemy.sprite.rotation + DEATH_ROTATION_STEP).min(DEATH_ROTATION_CAP);
        }
        enemy.death_frames -= 1;
    }

    enemy.sprite.select_column(ENEMY_IDLE_SRC_X);
    let origin = bottom_right_origin(enemy.sprite.dest);
    out.submit(sprite_command(&enemy.sprite, origin, tint));

    if enemy.shows_health_bar() {
        let bar = Rectangle::new(
            body.pos.x,
            body.pos.y - HEALTH_BAR_GAP,
            body.size.x,
            HEALTH_BAR_HEIGHT,
        );
        out.submit(DrawCommand::Rectangle {
            rect: bar,
            color: Color::RED,
        });
        out.submit(DrawCommand::Rectangle {
            rect: Rectangle {
                width: (body.size.x * enemy.health_ratio()).floor(),
                ..bar
            },
            color: Color::GREEN,
        });
    }
}

/// Draw a live projectile at its spawn point, facing its trajectory.
pub fn draw_projectile(projectile: &Projectile, out: &mut impl Renderer) {
    let w = projectile.sprite.dest.width;
    let h = projectile.sprite.dest.height;
    out.submit(DrawCommand::Texture {
        tex_key: projectile.sprite.tex_key.clone(),
        src: projectile.sprite.src,
        dest: Rectangle::new(projectile.start.x, projectile.start.y, w, h),
        origin: Vector2::new(w / 2.0, h),
        rotation: projectile.draw_rotation(),
        tint: Color::WHITE,
    });
}
