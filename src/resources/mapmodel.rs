//! Current map and the tile lookup table it is drawn with.
//!
//! Both are produced by the map loader and replaced wholesale when a new map
//! loads; nothing in the frame pipeline mutates them.
//!
//! # JSON format
//!
//! ```json
//! { "tiles": [0, 1, 1], "width": 3, "layers": ["g", "g", "T"],
//!   "src_tile": { "width": 16, "height": 16 },
//!   "dest_tile": { "width": 32, "height": 32 },
//!   "tex_key": "tiles" }
//! ```
//!
//! The atlas maps a lowercase layer id to tile index → source origin:
//!
//! ```json
//! { "layers": { "g": { "1": { "x": 0, "y": 0 } } } }
//! ```

use std::path::Path;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::{Rectangle, Vector2};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Tile index meaning "nothing here".
pub const EMPTY_TILE: u32 = 0;
/// Layer id of walls; their uppercase form never occludes the player.
pub const WALL_LAYER: &str = "w";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TileSize {
    pub width: f32,
    pub height: f32,
}

/// Tile grid of the current map.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct MapModel {
    /// Row-major tile indices; [`EMPTY_TILE`] cells are skipped.
    pub tiles: Vec<u32>,
    /// Map width in tiles.
    pub width: usize,
    /// Source layer per cell. A fully uppercase id marks a tall tile.
    pub layers: Vec<String>,
    pub src_tile: TileSize,
    pub dest_tile: TileSize,
    pub tex_key: Arc<str>,
}

impl MapModel {
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let map: MapModel =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse map: {}", e))?;
        map.validate()?;
        Ok(map)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read map {}: {}", path.display(), e))?;
        let map = Self::from_json_str(&json)?;
        info!(
            "Loaded map {}: {}x{} tiles",
            path.display(),
            map.width,
            map.height()
        );
        Ok(map)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 {
            return Err("Map width must be positive".to_string());
        }
        if self.layers.len() != self.tiles.len() {
            return Err(format!(
                "Map has {} tiles but {} layer ids",
                self.tiles.len(),
                self.layers.len()
            ));
        }
        Ok(())
    }

    /// Map height in tiles (a partial last row counts).
    pub fn height(&self) -> usize {
        self.tiles.len().div_ceil(self.width.max(1))
    }

    /// On-screen rectangle of the cell at `index`.
    pub fn tile_dest(&self, index: usize) -> Rectangle {
        let width = self.width.max(1);
        Rectangle::new(
            self.dest_tile.width * (index % width) as f32,
            self.dest_tile.height * (index / width) as f32,
            self.dest_tile.width,
            self.dest_tile.height,
        )
    }
}

/// Whether a layer id marks a tall tile (fully uppercase).
pub fn is_tall_layer(layer: &str) -> bool {
    layer.chars().any(char::is_alphabetic) && !layer.chars().any(char::is_lowercase)
}

pub fn is_wall_layer(layer: &str) -> bool {
    layer.eq_ignore_ascii_case(WALL_LAYER)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TileSource {
    pub x: f32,
    pub y: f32,
}

/// Per-layer lookup from tile index to atlas source origin.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
pub struct TileAtlas {
    pub layers: FxHashMap<String, FxHashMap<u32, TileSource>>,
}

impl TileAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse tile atlas: {}", e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read tile atlas {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }

    pub fn insert(&mut self, layer: &str, index: u32, x: f32, y: f32) {
        self.layers
            .entry(layer.to_lowercase())
            .or_default()
            .insert(index, TileSource { x, y });
    }

    /// Source origin of `index` in `layer`; the layer id is matched lowercase.
    pub fn lookup(&self, layer: &str, index: u32) -> Option<Vector2> {
        self.layers
            .get(layer.to_lowercase().as_str())
            .and_then(|tiles| tiles.get(&index))
            .map(|s| Vector2::new(s.x, s.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_layer_detection() {
        assert!(is_tall_layer("T"));
        assert!(is_tall_layer("W"));
        assert!(!is_tall_layer("t"));
        assert!(!is_tall_layer("Tr"));
        assert!(!is_tall_layer(""));
        // ids without letters have no case, so they never count as tall
        assert!(!is_tall_layer("12"));
        assert!(is_tall_layer("T2"));
    }

    #[test]
    fn test_tile_dest_is_row_major() {
        let map = MapModel {
            tiles: vec![1; 12],
            width: 5,
            layers: vec!["g".to_string(); 12],
            src_tile: TileSize { width: 16.0, height: 16.0 },
            dest_tile: TileSize { width: 32.0, height: 24.0 },
            tex_key: Arc::from("tiles"),
        };
        let r = map.tile_dest(6);
        assert_eq!((r.x, r.y), (32.0, 24.0));
        assert_eq!(map.height(), 3);
    }

    #[test]
    fn test_parse_and_validate() {
        let json = r#"{ "tiles": [0, 1], "width": 2, "layers": ["g", "T"],
            "src_tile": { "width": 16, "height": 16 },
            "dest_tile": { "width": 32, "height": 32 }, "tex_key": "tiles" }"#;
        let map = MapModel::from_json_str(json).unwrap();
        assert_eq!(map.tiles, vec![0, 1]);
        assert_eq!(&*map.tex_key, "tiles");

        let bad = r#"{ "tiles": [0, 1], "width": 2, "layers": ["g"],
            "src_tile": { "width": 16, "height": 16 },
            "dest_tile": { "width": 32, "height": 32 }, "tex_key": "tiles" }"#;
        assert!(MapModel::from_json_str(bad).is_err());
    }

    #[test]
    fn test_atlas_lookup_is_case_insensitive() {
        let atlas =
            TileAtlas::from_json_str(r#"{ "layers": { "t": { "3": { "x": 48, "y": 16 } } } }"#)
                .unwrap();
        let src = atlas.lookup("T", 3).unwrap();
        assert_eq!((src.x, src.y), (48.0, 16.0));
        assert!(atlas.lookup("t", 4).is_none());
        assert!(atlas.lookup("g", 3).is_none());
    }
}
