//! Score overlay
//!
//! Read-only projection of simulation state into HUD display text. No
//! gameplay logic belongs here.

use crate::sim::GameState;

/// HUD lines for the current frame, top to bottom.
///
/// Lives display clamps at zero; the simulation may track a deficit after a
/// multi-point hit but the overlay never shows negative lives.
pub fn overlay_lines(state: &GameState) -> Vec<String> {
    let mut lines = vec![
        format!("Score: {}", state.player.score),
        format!("Lives: {}", state.player.lives.max(0)),
        format!("Ammo: {}", state.player.ammo),
    ];
    if state.is_over() {
        lines.push("GAME OVER".to_string());
    }
    lines
}
