//! Fixed-rate frame clock
//!
//! Ball velocities are in units per frame, tuned for 60 Hz. Hosts whose frame
//! deltas vary feed real time in here and run as many steps as it hands back.

use crate::consts::{FRAME_DT, MAX_FRAME_DELTA, MAX_FRAMES_PER_ADVANCE};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    /// Frames dropped because a single advance asked for too many
    pub dropped: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds of wall time; returns how many steps to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DELTA) } else { 0.0 };
        self.accumulator += dt;

        let mut frames = 0;
        while self.accumulator >= FRAME_DT && frames < MAX_FRAMES_PER_ADVANCE {
            self.accumulator -= FRAME_DT;
            frames += 1;
        }

        // Drop backlog we could not catch up on
        let mut behind = 0u64;
        while self.accumulator >= FRAME_DT {
            self.accumulator -= FRAME_DT;
            behind += 1;
        }
        if behind > 0 {
            self.dropped += behind;
            log::debug!("Frame clock fell behind, dropped {behind} frames");
        }

        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frame_per_frame_dt() {
        let mut clock = FrameClock::new();
        let mut total = 0;
        for _ in 0..60 {
            total += clock.advance(FRAME_DT + 1e-6);
        }
        assert_eq!(total, 60);
    }

    #[test]
    fn test_small_deltas_accumulate() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(FRAME_DT * 0.4), 0);
        assert_eq!(clock.advance(FRAME_DT * 0.4), 0);
        assert_eq!(clock.advance(FRAME_DT * 0.4), 1);
        assert_eq!(clock.dropped, 0);
    }

    #[test]
    fn test_large_delta_is_capped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(10.0), MAX_FRAMES_PER_ADVANCE);
        assert!(clock.dropped > 0);
        let dropped = clock.dropped;
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.dropped, dropped);
    }

    #[test]
    fn test_bad_delta_ignored() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(-1.0), 0);
    }
}
