//! Swarm Arena - a 2D arena shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `render`: Draw-surface abstraction and per-frame draw pass
//! - `ui`: Score/lives/ammo overlay projection
//! - `driver`: Frame driver tying host timestamps to simulation steps
//! - `config`: Data-driven session configuration

pub mod config;
pub mod driver;
pub mod render;
pub mod sim;
pub mod ui;

pub use config::{BoundsPolicy, Config};
pub use driver::FrameDriver;

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Player body size (square, pixels)
    pub const PLAYER_SIZE: f32 = 25.0;
    /// Per-frame change applied to a movement accumulator while a key is held
    pub const SPEED_INCREMENT: f32 = 0.1;
    /// Movement accumulator bounds
    pub const MIN_SPEED: f32 = -5.0;
    pub const MAX_SPEED: f32 = 5.0;
    /// Fixed per-frame speed in relative movement mode
    pub const RELATIVE_SPEED: f32 = 3.0;

    /// Projectile body (pixels)
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 3.0;
    /// Projectile travel per frame
    pub const PROJECTILE_SPEED: f32 = 3.0;
    /// One-sided removal threshold as a fraction of canvas width
    pub const ONE_SIDED_CUTOFF: f32 = 0.8;

    /// Enemy body size (square, pixels)
    pub const ENEMY_SIZE: f32 = 20.0;
    /// Strongest enemy tier; strength is drawn from 1..=MAX_STRENGTH
    pub const MAX_STRENGTH: u8 = 3;

    /// Starting player lives
    pub const START_LIVES: i32 = 3;
    /// Ammo cap; sessions start with a full clip
    pub const MAX_AMMO: u32 = 20;

    /// Time between automatic enemy spawns (milliseconds)
    pub const SPAWN_INTERVAL_MS: f32 = 1000.0;
    /// Time between ammo regeneration ticks (milliseconds)
    pub const AMMO_INTERVAL_MS: f32 = 500.0;
}

/// Angle from `from` to `to` in radians
///
/// Always defined: `atan2` handles the degenerate zero-offset case.
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit vector pointing along `theta`
#[inline]
pub fn heading(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
