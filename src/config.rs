//! Session configuration
//!
//! Fixed for the lifetime of a session; `Default` gives the reference tuning.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::MovementMode;

/// Projectile out-of-bounds removal policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundsPolicy {
    /// Remove once x exceeds 80% of canvas width (one-directional shooter)
    OneSided,
    /// Remove on any of the four boundary crossings
    #[default]
    FourSided,
}

impl BoundsPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundsPolicy::OneSided => "one-sided",
            BoundsPolicy::FourSided => "four-sided",
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Canvas dimensions (pixels), immutable for the session
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    /// Movement mode at session start (toggleable at runtime)
    pub start_mode: MovementMode,
    /// Starting lives
    pub start_lives: i32,

    // === Projectiles ===
    /// Out-of-bounds removal policy, fixed at construction
    pub bounds_policy: BoundsPolicy,
    /// Ammo cap; sessions start with a full clip
    pub max_ammo: u32,

    // === Cadence ===
    /// Milliseconds between automatic enemy spawns
    pub spawn_interval_ms: f32,
    /// Milliseconds between ammo regeneration ticks
    pub ammo_interval_ms: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 960.0,
            canvas_height: 540.0,

            start_mode: MovementMode::Absolute,
            start_lives: START_LIVES,

            bounds_policy: BoundsPolicy::default(),
            max_ammo: MAX_AMMO,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            ammo_interval_ms: AMMO_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Config with explicit canvas dimensions, reference tuning otherwise
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }
}
