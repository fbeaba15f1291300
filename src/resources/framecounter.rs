//! Scene-wide frame counter.
//!
//! Every animation state machine reads this single tick source. It advances
//! exactly once per composed frame, after all drawing, and wraps at 256.

use bevy_ecs::prelude::Resource;

/// Frames between animation steps.
pub const ANIMATION_CADENCE: u8 = 8;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounter(pub u8);

impl FrameCounter {
    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// True on the frame of each animation cycle that matches `phase`.
    pub fn at_phase(&self, phase: u8) -> bool {
        self.0 % ANIMATION_CADENCE == phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_at_256() {
        let mut fc = FrameCounter(255);
        fc.advance();
        assert_eq!(fc.get(), 0);
    }

    #[test]
    fn test_phase_every_eighth_frame() {
        let hits: Vec<u8> = (0..32u8).filter(|f| FrameCounter(*f).at_phase(1)).collect();
        assert_eq!(hits, vec![1, 9, 17, 25]);
    }
}
