//! Axis-aligned collision detection
//!
//! Every entity occupies an axis-aligned rectangle; the only operation the
//! simulation needs is a pairwise overlap test. Pairs are retested every
//! frame with no spatial partitioning; entity counts stay in the tens.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Enemy, Player, Projectile};

/// An axis-aligned bounding box (top-left position + extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

/// Anything with a rectangular footprint
pub trait Bounded {
    fn aabb(&self) -> Aabb;
}

impl Bounded for Player {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

impl Bounded for Enemy {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

impl Bounded for Projectile {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// True iff the two rectangles intersect.
///
/// Strict inequality on all four half-plane tests: rectangles sharing only a
/// boundary edge do not overlap.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// Overlap test directly on two bounded entities
pub fn collides(a: &impl Bounded, b: &impl Bounded) -> bool {
    overlaps(&a.aabb(), &b.aabb())
}
