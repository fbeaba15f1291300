use log::trace;
use raylib::prelude::*;

use crate::render::command::{DrawCommand, Renderer};
use crate::render::texturestore::TextureStore;

/// Plays draw commands onto any raylib drawing scope.
pub struct RaylibRenderer<'a, D: RaylibDraw> {
    d: &'a mut D,
    textures: &'a TextureStore,
}

impl<'a, D: RaylibDraw> RaylibRenderer<'a, D> {
    pub fn new(d: &'a mut D, textures: &'a TextureStore) -> Self {
        Self { d, textures }
    }
}

impl<D: RaylibDraw> Renderer for RaylibRenderer<'_, D> {
    fn submit(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Texture {
                tex_key,
                src,
                dest,
                origin,
                rotation,
                tint,
            } => {
                if let Some(tex) = self.textures.get(&tex_key) {
                    self.d.draw_texture_pro(tex, src, dest, origin, rotation, tint);
                } else {
                    trace!("skipping draw of unknown texture '{}'", tex_key);
                }
            }
            DrawCommand::Line { start, end, color } => {
                self.d.draw_line_v(start, end, color);
            }
            DrawCommand::Rectangle { rect, color } => {
                self.d.draw_rectangle_rec(rect, color);
            }
            DrawCommand::RectangleLines { rect, color } => {
                self.d.draw_rectangle_lines(
                    rect.x as i32,
                    rect.y as i32,
                    rect.width as i32,
                    rect.height as i32,
                    color,
                );
            }
            DrawCommand::CircleLines {
                center,
                radius,
                color,
            } => {
                self.d
                    .draw_circle_lines(center.x as i32, center.y as i32, radius, color);
            }
            DrawCommand::CircleSectorLines {
                center,
                radius,
                start_angle,
                end_angle,
                segments,
                color,
            } => {
                self.d.draw_circle_sector_lines(
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    segments,
                    color,
                );
            }
            DrawCommand::Text {
                text,
                x,
                y,
                font_size,
                color,
            } => {
                self.d.draw_text(&text, x, y, font_size, color);
            }
        }
    }
}
