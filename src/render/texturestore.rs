//! Textures loaded from disk, keyed by the same strings sprites carry.

use std::path::Path;
use std::sync::Arc;

use log::info;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<Arc<str>, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the image at `path` as a texture registered under `key`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<Arc<str>>,
        path: impl AsRef<Path>,
    ) -> Result<(), String> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Texture path is not valid UTF-8: {}", path.display()))?;
        let texture = rl
            .load_texture(thread, path_str)
            .map_err(|e| format!("Failed to load texture {}: {:?}", path.display(), e))?;
        let key = key.into();
        info!("Loaded texture '{}' from {}", key, path.display());
        self.map.insert(key, texture);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
