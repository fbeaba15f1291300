//! Game configuration resource.
//!
//! Settings loaded from an INI file. Defaults are safe to start with, and
//! any key missing from the file keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 640
//! target_fps = 60
//! vsync = true
//!
//! [debug]
//! enabled = false
//!
//! [assets]
//! texture = ./assets/sheet.png
//! map = ./assets/maps/meadow.json
//! atlas = ./assets/maps/atlas.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 640;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_DEBUG: bool = false;
const DEFAULT_TEXTURE_PATH: &str = "./assets/sheet.png";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Start with the debug overlay on.
    pub debug: bool,
    /// Sprite sheet shared by the map, player, weapons and enemies.
    pub texture_path: PathBuf,
    /// Map JSON; the built-in demo map is used when unset.
    pub map_path: Option<PathBuf>,
    /// Tile atlas JSON matching `map_path`.
    pub atlas_path: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            debug: DEFAULT_DEBUG,
            texture_path: PathBuf::from(DEFAULT_TEXTURE_PATH),
            map_path: None,
            atlas_path: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, debug={}",
            self.window_width, self.window_height, self.target_fps, self.vsync, self.debug
        );
        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [debug] section
        if let Some(enabled) = config.getbool("debug", "enabled").ok().flatten() {
            self.debug = enabled;
        }

        // [assets] section
        if let Some(texture) = config.get("assets", "texture") {
            self.texture_path = PathBuf::from(texture);
        }
        if let Some(map) = config.get("assets", "map") {
            self.map_path = Some(PathBuf::from(map));
        }
        if let Some(atlas) = config.get("assets", "atlas") {
            self.atlas_path = Some(PathBuf::from(atlas));
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
        assert!(!c.debug);
        assert!(c.map_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut c = GameConfig::new();
        c.load_from_str("[window]\nwidth = 800\n\n[debug]\nenabled = true\n")
            .unwrap();
        assert_eq!(c.window_width, 800);
        assert_eq!(c.window_height, DEFAULT_WINDOW_HEIGHT);
        assert!(c.debug);
    }

    #[test]
    fn test_assets_section() {
        let mut c = GameConfig::new();
        c.load_from_str("[assets]\ntexture = sheet.png\nmap = maps/a.json\n")
            .unwrap();
        assert_eq!(c.texture_path, PathBuf::from("sheet.png"));
        assert_eq!(c.map_path, Some(PathBuf::from("maps/a.json")));
        assert!(c.atlas_path.is_none());
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut c = GameConfig::with_path("./definitely/not/here.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.window_width, DEFAULT_WINDOW_WIDTH);
    }
}
