//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - One step per frame, driven entirely by the input snapshot and elapsed time
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Bounded, collides, overlaps};
pub use spawn::{Cadence, SpawnScheduler, spawn_at_perimeter};
pub use state::{Enemy, GamePhase, GameState, MovementMode, Player, Projectile};
pub use tick::{TickInput, tick};
