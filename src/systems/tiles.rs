//! Tile map drawing with player occlusion.
//!
//! Cells are walked in row-major order. Ordinary tiles are drawn straight
//! away. Tall tiles (uppercase layer id) first get a filler square drawn
//! under them, then either draw straight away or are deferred so they land on
//! top of the player:
//!
//! - walls always draw straight away;
//! - other tall tiles below the player (larger destination Y) are deferred;
//! - with no player in the scene nothing is deferred.

use log::trace;
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::render::command::{DrawCommand, DrawList, Renderer};
use crate::resources::mapmodel::{EMPTY_TILE, MapModel, TileAtlas, is_tall_layer, is_wall_layer};

/// Atlas origin of the ground square drawn beneath tall tiles.
pub const FILLER_SRC: Vector2 = Vector2 { x: 16.0, y: 64.0 };

/// Whether a tall tile at `tile_y` must be drawn after the player.
pub fn defers_behind_player(layer: &str, tile_y: f32, player_y: Option<f32>) -> bool {
    if is_wall_layer(layer) {
        return false;
    }
    player_y.is_some_and(|py| tile_y > py)
}

/// Draw the map background into `out` and return the deferred foreground tiles.
pub fn draw_map_background(
    map: &MapModel,
    atlas: &TileAtlas,
    player_y: Option<f32>,
    out: &mut impl Renderer,
) -> DrawList {
    let mut foreground = DrawList::new();

    for (i, &tile) in map.tiles.iter().enumerate() {
        if tile == EMPTY_TILE {
            continue;
        }
        let Some(layer) = map.layers.get(i) else {
            continue;
        };
        let Some(origin) = atlas.lookup(layer, tile) else {
            trace!("no atlas entry for tile {} on layer '{}'", tile, layer);
            continue;
        };

        let dest = map.tile_dest(i);
        let src = Rectangle::new(
            origin.x,
            origin.y,
            map.src_tile.width,
            map.src_tile.height,
        );
        let tile_cmd = tile_command(map, src, dest);

        if !is_tall_layer(layer) {
            out.submit(tile_cmd);
            continue;
        }

        let filler = Rectangle::new(FILLER_SRC.x, FILLER_SRC.y, src.width, src.height);
        out.submit(tile_command(map, filler, dest));

        if defers_behind_player(layer, dest.y, player_y) {
            foreground.submit(tile_cmd);
        } else {
            out.submit(tile_cmd);
        }
    }

    foreground
}

fn tile_command(map: &MapModel, src: Rectangle, dest: Rectangle) -> DrawCommand {
    DrawCommand::Texture {
        tex_key: map.tex_key.clone(),
        src,
        dest,
        origin: Vector2::new(dest.width, dest.height),
        rotation: 0.0,
        tint: Color::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::mapmodel::TileSize;
    use std::sync::Arc;

    fn map(tiles: Vec<u32>, layers: &[&str], width: usize) -> MapModel {
        MapModel {
            tiles,
            width,
            layers: layers.iter().map(|s| s.to_string()).collect(),
            src_tile: TileSize { width: 16.0, height: 16.0 },
            dest_tile: TileSize { width: 32.0, height: 32.0 },
            tex_key: Arc::from("tiles"),
        }
    }

    fn atlas() -> TileAtlas {
        let mut a = TileAtlas::new();
        a.insert("g", 1, 0.0, 0.0);
        a.insert("t", 1, 32.0, 0.0);
        a.insert("w", 1, 48.0, 0.0);
        a
    }

    fn src_x(cmd: &DrawCommand) -> f32 {
        match cmd {
            DrawCommand::Texture { src, .. } => src.x,
            _ => panic!("expected texture command"),
        }
    }

    #[test]
    fn test_empty_tiles_are_skipped() {
        let m = map(vec![0, 1, 0], &["g", "g", "g"], 3);
        let mut out = DrawList::new();
        let fg = draw_map_background(&m, &atlas(), None, &mut out);
        assert_eq!(out.len(), 1);
        assert!(fg.is_empty());
    }

    #[test]
    fn test_wall_never_deferred() {
        // wall on the second row, player far above it
        let m = map(vec![0, 0, 1, 0], &["g", "g", "W", "g"], 2);
        let mut out = DrawList::new();
        let fg = draw_map_background(&m, &atlas(), Some(-1000.0), &mut out);
        assert!(fg.is_empty());
        // filler then the wall itself
        assert_eq!(out.len(), 2);
        assert_eq!(src_x(&out.commands[0]), FILLER_SRC.x);
        assert_eq!(src_x(&out.commands[1]), 48.0);
    }

    #[test]
    fn test_tall_tile_below_player_is_deferred() {
        let m = map(vec![0, 0, 1, 0], &["g", "g", "T", "g"], 2);
        let mut out = DrawList::new();
        let fg = draw_map_background(&m, &atlas(), Some(10.0), &mut out);
        assert_eq!(fg.len(), 1);
        assert_eq!(src_x(&fg.commands[0]), 32.0);
        // only the filler was drawn right away
        assert_eq!(out.len(), 1);
        assert_eq!(src_x(&out.commands[0]), FILLER_SRC.x);
    }

    #[test]
    fn test_tall_tile_level_with_player_draws_now() {
        let m = map(vec![0, 0, 1, 0], &["g", "g", "T", "g"], 2);
        let mut out = DrawList::new();
        let fg = draw_map_background(&m, &atlas(), Some(32.0), &mut out);
        assert!(fg.is_empty());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_no_player_never_defers() {
        let m = map(vec![0, 0, 1, 1], &["g", "g", "T", "T"], 2);
        let mut out = DrawList::new();
        let fg = draw_map_background(&m, &atlas(), None, &mut out);
        assert!(fg.is_empty());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_destination_is_pure_function_of_index() {
        let m = map(vec![1, 0, 0, 0, 0, 1], &["g"; 6], 5);
        let mut out = DrawList::new();
        draw_map_background(&m, &atlas(), None, &mut out);
        let dests: Vec<(f32, f32)> = out
            .iter()
            .map(|c| match c {
                DrawCommand::Texture { dest, .. } => (dest.x, dest.y),
                _ => (-1.0, -1.0),
            })
            .collect();
        assert_eq!(dests, vec![(0.0, 0.0), (0.0, 32.0)]);
    }

    #[test]
    fn test_missing_atlas_entry_is_skipped() {
        let m = map(vec![2, 1], &["g", "g"], 2);
        let mut out = DrawList::new();
        draw_map_background(&m, &atlas(), None, &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_defer_rule() {
        assert!(defers_behind_player("T", 64.0, Some(32.0)));
        assert!(!defers_behind_player("T", 32.0, Some(32.0)));
        assert!(!defers_behind_player("W", 64.0, Some(32.0)));
        assert!(!defers_behind_player("T", 64.0, None));
    }
}
