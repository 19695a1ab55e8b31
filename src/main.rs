//! Swarm Arena demo entry point
//!
//! Headless scripted session: drives the real frame driver with synthetic
//! 60 Hz timestamps and a scripted input stream against a discarding
//! surface, logging the HUD once per simulated second. Useful for smoke
//! runs and tuning without a display backend.

use glam::Vec2;

use swarm_arena::FrameDriver;
use swarm_arena::config::Config;
use swarm_arena::render::NullSurface;
use swarm_arena::sim::{GameState, TickInput};
use swarm_arena::ui;

const FRAME_MS: f64 = 1000.0 / 60.0;
/// Two simulated minutes, should the pilot survive that long
const MAX_FRAMES: u64 = 60 * 120;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let config = Config::default();
    log::info!(
        "starting session: seed={seed}, canvas {}x{}, {} projectile bounds",
        config.canvas_width,
        config.canvas_height,
        config.bounds_policy.as_str()
    );

    let mut state = GameState::new(config, seed);
    let mut driver = FrameDriver::new();
    let mut surface = NullSurface;

    let mut timestamp = 0.0_f64;
    for frame in 0..MAX_FRAMES {
        let input = scripted_input(&state, frame);
        if !driver.frame(timestamp, &mut state, &input, &mut surface) {
            break;
        }
        if frame % 60 == 0 {
            log::info!("t={:>4.0}s {}", timestamp / 1000.0, ui::overlay_lines(&state).join(" | "));
        }
        timestamp += FRAME_MS;
    }

    log::info!(
        "session ended after {} frames: score {}, lives {}",
        state.frame,
        state.player.score,
        state.player.lives.max(0)
    );
}

/// Stand-in pilot: strafes on a fixed cycle and fires at the nearest enemy.
fn scripted_input(state: &GameState, frame: u64) -> TickInput {
    let player = &state.player;

    // Point at the nearest enemy; straight ahead when the arena is clear
    let pointer = state
        .enemies
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .total_cmp(&b.pos.distance_squared(player.pos))
        })
        .map(|enemy| enemy.pos)
        .unwrap_or(Vec2::new(state.config.canvas_width, player.pos.y));

    let cycle = frame % 240;
    TickInput {
        up: cycle < 60,
        right: cycle < 120,
        down: (120..180).contains(&cycle),
        left: cycle >= 120,
        fire: frame % 20 == 0 && !state.enemies.is_empty(),
        toggle_mode: false,
        pointer,
    }
}
