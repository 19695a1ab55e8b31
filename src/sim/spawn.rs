//! Enemy spawn scheduling
//!
//! Fixed-rate, non-bursting: one enemy per interval overflow at a random
//! perimeter point, with a random strength tier.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Enemy;
use crate::consts::MAX_STRENGTH;

/// Elapsed-time accumulator with reset-on-overflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cadence {
    accumulator: f32,
    interval_ms: f32,
}

impl Cadence {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            accumulator: 0.0,
            interval_ms,
        }
    }

    /// Accumulate elapsed time. Returns true at most once per call, when the
    /// interval overflows; excess time is discarded, not carried over, so a
    /// long frame never produces a burst.
    pub fn overflowed(&mut self, elapsed_ms: f32) -> bool {
        self.accumulator += elapsed_ms;
        if self.accumulator > self.interval_ms {
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }
}

/// A side of the canvas perimeter; closed enumeration, all four equally likely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

const SIDES: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

/// Periodic enemy creation driven by the per-frame elapsed time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnScheduler {
    cadence: Cadence,
}

impl SpawnScheduler {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            cadence: Cadence::new(interval_ms),
        }
    }

    /// Advance the accumulator; on overflow, create exactly one enemy.
    pub fn advance(&mut self, elapsed_ms: f32, canvas: Vec2, rng: &mut Pcg32) -> Option<Enemy> {
        if !self.cadence.overflowed(elapsed_ms) {
            return None;
        }
        Some(spawn_at_perimeter(canvas, rng))
    }
}

/// One enemy at a uniformly random point on a uniformly chosen canvas side,
/// with strength drawn uniformly from the tier range.
pub fn spawn_at_perimeter(canvas: Vec2, rng: &mut Pcg32) -> Enemy {
    let side = SIDES[rng.random_range(0..SIDES.len())];
    let pos = match side {
        Side::Top => Vec2::new(rng.random_range(0.0..canvas.x), 0.0),
        Side::Bottom => Vec2::new(rng.random_range(0.0..canvas.x), canvas.y),
        Side::Left => Vec2::new(0.0, rng.random_range(0.0..canvas.y)),
        Side::Right => Vec2::new(canvas.x, rng.random_range(0.0..canvas.y)),
    };
    let strength = rng.random_range(1..=MAX_STRENGTH);
    Enemy::new(pos, strength)
}
