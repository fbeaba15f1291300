use std::sync::Arc;

use raylib::prelude::Rectangle;

/// Highest animation frame index; stepping past it wraps back to 0.
pub const MAX_FRAME: u8 = 3;

/// Animation frame index, always within `0..=MAX_FRAME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimFrame(u8);

impl AnimFrame {
    /// Build a frame index, clamping out-of-range values to [`MAX_FRAME`].
    pub fn new(index: u8) -> Self {
        Self(index.min(MAX_FRAME))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Step to the next frame, wrapping to 0 after [`MAX_FRAME`].
    pub fn advance(&mut self) {
        self.0 = if self.0 >= MAX_FRAME { 0 } else { self.0 + 1 };
    }
}

/// A region of a shared texture atlas placed somewhere on screen.
///
/// `src` selects the frame from the atlas (a negative width mirrors it),
/// `dest` is the on-screen placement and size. The texture is referenced by
/// key and never owned by the sprite.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub tex_key: Arc<str>,
    pub src: Rectangle,
    pub dest: Rectangle,
    pub frame: AnimFrame,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<Arc<str>>, src: Rectangle, dest: Rectangle) -> Self {
        Self {
            tex_key: tex_key.into(),
            src,
            dest,
            frame: AnimFrame::default(),
            rotation: 0.0,
        }
    }

    /// Point `src.x` at the current frame of a horizontal strip starting at `base_x`.
    pub fn select_column(&mut self, base_x: f32) {
        self.src.x = base_x + self.frame.index() as f32 * self.src.width.abs();
    }

    /// A fresh copy of this sprite: same atlas region and placement, animation reset.
    pub fn instantiate(&self) -> Self {
        Self::new(self.tex_key.clone(), self.src, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite() -> Sprite {
        Sprite::new(
            "atlas",
            Rectangle::new(0.0, 0.0, 16.0, 16.0),
            Rectangle::new(0.0, 0.0, 32.0, 32.0),
        )
    }

    #[test]
    fn test_frame_wraps_after_max() {
        let mut f = AnimFrame::default();
        let mut seen = Vec::new();
        for _ in 0..6 {
            f.advance();
            seen.push(f.index());
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2]);
    }

    #[test]
    fn test_frame_new_clamps() {
        assert_eq!(AnimFrame::new(2).index(), 2);
        assert_eq!(AnimFrame::new(9).index(), MAX_FRAME);
    }

    #[test]
    fn test_select_column_uses_absolute_width() {
        let mut s = sprite();
        s.src.width = -16.0;
        s.frame = AnimFrame::new(2);
        s.select_column(128.0);
        assert_eq!(s.src.x, 160.0);
    }

    #[test]
    fn test_instantiate_resets_animation_and_shares_texture() {
        let mut s = sprite();
        s.frame = AnimFrame::new(3);
        s.rotation = 45.0;
        let copy = s.instantiate();
        assert_eq!(copy.frame.index(), 0);
        assert_eq!(copy.rotation, 0.0);
        assert!(Arc::ptr_eq(&copy.tex_key, &s.tex_key));
    }
}
