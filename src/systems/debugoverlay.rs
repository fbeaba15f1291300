//! Debug overlays.
//!
//! [`draw_debug_overlay`] draws in world space on top of the scene:
//! static collidables, projectile spawn segments, player and enemy collision
//! outlines and a facing indicator around the player. [`compose_debug_ui`]
//! draws screen-space diagnostics text. Both skip whatever refers to a player
//! when there is none.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::body::Body;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::render::command::{DrawCommand, Renderer};
use crate::resources::aim::Aim;
use crate::resources::collisiondebug::CollisionDebug;
use crate::resources::debugmode::DebugMode;
use crate::resources::projectiles::LiveProjectiles;

/// Radius of the facing indicator circle.
pub const FACING_RADIUS: f32 = 32.0;
/// Width of each facing sector on either side of the aim.
pub const FACING_SECTOR_DEGREES: f32 = 45.0;
const FACING_SEGMENTS: i32 = 5;

const UI_FONT_SIZE: i32 = 16;

pub fn draw_debug_overlay(world: &mut World, out: &mut impl Renderer) {
    if let Some(collidables) = world.get_resource::<CollisionDebug>() {
        for rect in collidables.0.iter() {
            out.submit(DrawCommand::RectangleLines {
                rect: *rect,
                color: Color::WHITE,
            });
        }
    }

    if let Some(live) = world.get_resource::<LiveProjectiles>() {
        for p in live.iter() {
            out.submit(DrawCommand::Line {
                start: p.start,
                end: p.end,
                color: Color::PINK,
            });
        }
    }

    let player_body = {
        let mut players = world.query_filtered::<&Body, With<Player>>();
        players.iter(world).next().copied()
    };
    if let Some(body) = player_body {
        out.submit(DrawCommand::RectangleLines {
            rect: body.rect(),
            color: Color::ORANGE,
        });
    }

    {
        let mut enemies = world.query_filtered::<&Body, With<Enemy>>();
        for body in enemies.iter(world) {
            out.submit(DrawCommand::RectangleLines {
                rect: body.rect(),
                color: Color::WHITE,
            });
        }
    }

    if let Some(body) = player_body {
        let aim = world.get_resource::<Aim>().map(|a| a.degrees).unwrap_or_default();
        draw_facing_indicator(body.center(), aim, out);
    }
}

/// Circle around `center` plus two sectors straddling `aim`.
pub fn draw_facing_indicator(center: Vector2, aim: f32, out: &mut impl Renderer) {
    out.submit(DrawCommand::CircleLines {
        center,
        radius: FACING_RADIUS,
        color: Color::GREEN,
    });
    for end_angle in [aim - FACING_SECTOR_DEGREES, aim + FACING_SECTOR_DEGREES] {
        out.submit(DrawCommand::CircleSectorLines {
            center,
            radius: FACING_RADIUS,
            start_angle: aim,
            end_angle,
            segments: FACING_SEGMENTS,
            color: Color::WHITE,
        });
    }
}

/// Screen-space diagnostics panel, drawn only in debug mode.
pub fn compose_debug_ui(world: &mut World, out: &mut impl Renderer, fps: u32) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }

    out.submit(DrawCommand::Rectangle {
        rect: Rectangle::new(3.0, 3.0, 500.0, 90.0),
        color: Color::DARKGRAY,
    });
    out.submit(DrawCommand::RectangleLines {
        rect: Rectangle::new(3.0, 3.0, 500.0, 90.0),
        color: Color::WHITE,
    });

    let mut lines = vec![(10, 10, format!("FPS: {}", fps))];

    let player_body = {
        let mut players = world.query_filtered::<&Body, With<Player>>();
        players.iter(world).next().copied()
    };
    if let Some(body) = player_body {
        lines.push((
            10,
            30,
            format!("player {{X: {:.1}, Y: {:.1}}}", body.pos.x, body.pos.y),
        ));
    }

    if let Some(aim) = world.get_resource::<Aim>() {
        lines.push((
            10,
            50,
            format!("mouse  {{X: {:.0}, Y: {:.0}}}", aim.cursor.x, aim.cursor.y),
        ));
        lines.push((250, 10, format!("aim = {} degrees", aim.degrees as i32)));
    }

    let live = world
        .get_resource::<LiveProjectiles>()
        .map(|l| l.len())
        .unwrap_or(0);
    lines.push((250, 30, format!("Live Projectiles: {}", live)));

    for (x, y, text) in lines {
        out.submit(DrawCommand::Text {
            text,
            x,
            y,
            font_size: UI_FONT_SIZE,
            color: Color::WHITE,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::command::DrawList;

    #[test]
    fn test_facing_indicator_straddles_aim() {
        let mut out = DrawList::new();
        draw_facing_indicator(Vector2::new(0.0, 0.0), 30.0, &mut out);
        let kinds: Vec<&str> = out.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec!["circle_lines", "circle_sector_lines", "circle_sector_lines"]
        );
        let ends: Vec<(f32, f32)> = out
            .iter()
            .filter_map(|c| match c {
                DrawCommand::CircleSectorLines {
                    start_angle,
                    end_angle,
                    ..
                } => Some((*start_angle, *end_angle)),
                _ => None,
            })
            .collect();
        assert_eq!(ends, vec![(30.0, -15.0), (30.0, 75.0)]);
    }

    #[test]
    fn test_overlay_without_player_does_not_draw_facing() {
        let mut world = World::new();
        world.insert_resource(CollisionDebug(vec![Rectangle::new(0.0, 0.0, 8.0, 8.0)]));
        let mut out = DrawList::new();
        draw_debug_overlay(&mut world, &mut out);
        let kinds: Vec<&str> = out.iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec!["rectangle_lines"]);
    }

    #[test]
    fn test_ui_hidden_outside_debug_mode() {
        let mut world = World::new();
        let mut out = DrawList::new();
        compose_debug_ui(&mut world, &mut out, 60);
        assert!(out.is_empty());
    }

    #[test]
    fn test_ui_without_player_still_draws() {
        let mut world = World::new();
        world.insert_resource(DebugMode {});
        let mut out = DrawList::new();
        compose_debug_ui(&mut world, &mut out, 60);
        let texts: Vec<String> = out
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["FPS: 60".to_string(), "Live Projectiles: 0".to_string()]);
    }
}
