//! Draw-surface abstraction and per-frame draw pass
//!
//! The simulation never talks to a concrete backend; it issues primitive
//! draw calls against the `DrawSurface` trait, one per live entity plus the
//! HUD overlay, once per frame. The render path is a read-only projection of
//! the state and consumes no return values.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;
use crate::ui;

/// An RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const PLAYER: Color = Color::rgb(0, 0, 0);
    pub const PROJECTILE: Color = Color::rgb(0, 102, 0);
    pub const HUD: Color = Color::rgb(255, 255, 255);

    /// Enemy tint by strength tier: tougher reads darker
    pub fn enemy(strength: u8) -> Color {
        match strength {
            3 => Color::rgb(128, 0, 0),
            2 => Color::rgb(192, 32, 32),
            _ => Color::rgb(255, 64, 64),
        }
    }
}

/// A 2D drawing surface accepting primitive draw calls
///
/// Implemented by the host's rendering backend; positions and sizes are in
/// canvas pixels.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color);
}

/// A surface that discards every primitive; for headless runs and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _color: Color) {}
    fn fill_circle(&mut self, _cx: f32, _cy: f32, _radius: f32, _color: Color) {}
    fn draw_text(&mut self, _x: f32, _y: f32, _text: &str, _color: Color) {}
}

/// Issue one frame's draw calls: projectiles, player, enemies, HUD overlay.
pub fn draw_frame(state: &GameState, surface: &mut impl DrawSurface) {
    for projectile in &state.player.projectiles {
        surface.fill_rect(
            projectile.pos.x,
            projectile.pos.y,
            projectile.size.x,
            projectile.size.y,
            Color::PROJECTILE,
        );
    }

    let player = &state.player;
    surface.fill_circle(player.pos.x, player.pos.y, player.size.x, Color::PLAYER);

    for enemy in &state.enemies {
        surface.fill_rect(
            enemy.pos.x,
            enemy.pos.y,
            enemy.size.x,
            enemy.size.y,
            Color::enemy(enemy.strength),
        );
    }

    for (i, line) in ui::overlay_lines(state).iter().enumerate() {
        surface.draw_text(10.0, 20.0 + i as f32 * 18.0, line, Color::HUD);
    }
}
