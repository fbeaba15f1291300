use std::sync::Arc;

use raylib::prelude::{Color, Rectangle, Vector2};

/// One request to the renderer.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Textured quad: `src` region of `tex_key` into `dest`, rotated by
    /// `rotation` degrees around `origin` (relative to `dest`).
    Texture {
        tex_key: Arc<str>,
        src: Rectangle,
        dest: Rectangle,
        origin: Vector2,
        rotation: f32,
        tint: Color,
    },
    Line {
        start: Vector2,
        end: Vector2,
        color: Color,
    },
    Rectangle {
        rect: Rectangle,
        color: Color,
    },
    RectangleLines {
        rect: Rectangle,
        color: Color,
    },
    CircleLines {
        center: Vector2,
        radius: f32,
        color: Color,
    },
    CircleSectorLines {
        center: Vector2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: i32,
        color: Color,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        font_size: i32,
        color: Color,
    },
}

impl DrawCommand {
    /// Short tag for logs and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Texture { .. } => "texture",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Rectangle { .. } => "rectangle",
            DrawCommand::RectangleLines { .. } => "rectangle_lines",
            DrawCommand::CircleLines { .. } => "circle_lines",
            DrawCommand::CircleSectorLines { .. } => "circle_sector_lines",
            DrawCommand::Text { .. } => "text",
        }
    }
}

/// Sink for draw commands.
pub trait Renderer {
    fn submit(&mut self, command: DrawCommand);
}

/// Recorded, replayable sequence of draw commands.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Submit every recorded command, in order, to `renderer`.
    pub fn replay(self, renderer: &mut impl Renderer) {
        for command in self.commands {
            renderer.submit(command);
        }
    }
}

impl Renderer for DrawList {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x: f32) -> DrawCommand {
        DrawCommand::Line {
            start: Vector2::new(x, 0.0),
            end: Vector2::new(x, 1.0),
            color: Color::WHITE,
        }
    }

    #[test]
    fn test_replay_preserves_order() {
        let mut deferred = DrawList::new();
        deferred.submit(line(1.0));
        deferred.submit(line(2.0));

        let mut out = DrawList::new();
        out.submit(line(0.0));
        deferred.replay(&mut out);

        let xs: Vec<f32> = out
            .iter()
            .map(|c| match c {
                DrawCommand::Line { start, .. } => start.x,
                _ => -1.0,
            })
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }
}
