//! Frame driver
//!
//! Ties the host's per-refresh callback to the simulation: computes elapsed
//! time from monotonically increasing timestamps, runs exactly one tick and
//! one draw pass per callback, and tells the host when to stop scheduling.
//! Fully sequential; the next frame is requested only after update and
//! render both completed.

use crate::render::{DrawSurface, draw_frame};
use crate::sim::{GameState, TickInput, tick};

/// Per-session frame scheduler glue
#[derive(Debug, Default)]
pub struct FrameDriver {
    last_timestamp: Option<f64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one host callback at `timestamp_ms`.
    ///
    /// The first invocation runs with elapsed = 0. Returns true while the
    /// host should schedule another frame; false once the terminal state has
    /// been drawn, which is the only cancellation point.
    pub fn frame(
        &mut self,
        timestamp_ms: f64,
        state: &mut GameState,
        input: &TickInput,
        surface: &mut impl DrawSurface,
    ) -> bool {
        let elapsed_ms = match self.last_timestamp {
            Some(previous) => (timestamp_ms - previous) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        tick(state, input, elapsed_ms);
        draw_frame(state, surface);

        if state.is_over() {
            log::debug!("terminal state drawn, stopping frame scheduling");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::render::NullSurface;
    use crate::sim::Enemy;
    use glam::Vec2;

    fn input() -> TickInput {
        TickInput {
            pointer: Vec2::new(480.0, 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_frame_elapsed_is_zero() {
        let mut driver = FrameDriver::new();
        let mut state = GameState::new(Config::default(), 3);
        let mut surface = NullSurface;

        // A huge first timestamp must not flush the spawn accumulator
        driver.frame(1_000_000.0, &mut state, &input(), &mut surface);
        assert!(state.enemies.is_empty());
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_elapsed_between_frames_drives_spawning() {
        let mut driver = FrameDriver::new();
        let mut state = GameState::new(Config::default(), 3);
        let mut surface = NullSurface;

        driver.frame(0.0, &mut state, &input(), &mut surface);
        driver.frame(1001.0, &mut state, &input(), &mut surface);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_stops_scheduling_after_terminal_frame() {
        let mut driver = FrameDriver::new();
        let mut state = GameState::new(Config::default(), 3);
        let mut surface = NullSurface;

        state.player.lives = 1;
        state.enemies.push(Enemy::new(state.player.pos, 1));

        assert!(!driver.frame(0.0, &mut state, &input(), &mut surface));

        // Once terminal, further callbacks keep declining without stepping
        let frame = state.frame;
        assert!(!driver.frame(16.0, &mut state, &input(), &mut surface));
        assert_eq!(state.frame, frame);
    }
}
