//! Renderer boundary.
//!
//! The frame pipeline never draws directly: it emits [`DrawCommand`]s into a
//! [`Renderer`]. [`DrawList`] records them (tests, deferred tiles) and
//! [`RaylibRenderer`] plays them onto a raylib draw handle.
//!
//! - [`command`] – draw command values, the `Renderer` trait and `DrawList`
//! - [`raylib_renderer`] – raylib-backed renderer
//! - [`texturestore`] – textures loaded by key

pub mod command;
pub mod raylib_renderer;
pub mod texturestore;

pub use command::{DrawCommand, DrawList, Renderer};
pub use raylib_renderer::RaylibRenderer;
pub use texturestore::TextureStore;
