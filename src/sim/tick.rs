//! Per-frame simulation step
//!
//! `tick` advances the whole session by one frame: spawn scheduling, player
//! and projectile kinematics, enemy pursuit, collision resolution, deferred
//! removal sweeps, and ammo regeneration. Entity motion is per-frame; the
//! elapsed time only drives the spawn and ammo accumulators.

use glam::Vec2;

use super::collision::collides;
use super::state::{GamePhase, GameState};

/// Input snapshot for a single frame
///
/// Produced by the host's input capture, consumed once at the start of the
/// player update. Movement flags are level-triggered (held keys); `fire` and
/// `toggle_mode` are edge events the host must clear after each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held movement keys (absolute: axis directions; relative: forward,
    /// back, strafe left, strafe right)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire requested this frame
    pub fire: bool,
    /// Switch between absolute and relative movement
    pub toggle_mode: bool,
    /// Current pointer position in canvas coordinates
    pub pointer: Vec2,
}

/// Advance the session by one frame.
///
/// Player-vs-enemy contact is resolved before projectile-vs-enemy hits, and
/// removal is deferred to the end-of-frame sweep, so a single frame can both
/// damage the player and still award the kill for the enemy that caused it.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) {
    // Terminal state is absorbing
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frame += 1;
    let canvas = state.canvas();

    // 1. Spawn scheduling: at most one new enemy per frame
    if let Some(enemy) = state.spawner.advance(elapsed_ms, canvas, &mut state.rng) {
        log::debug!(
            "frame {}: spawned strength-{} enemy at ({:.0}, {:.0})",
            state.frame,
            enemy.strength,
            enemy.pos.x,
            enemy.pos.y
        );
        state.enemies.push(enemy);
    }

    // 2. Player: movement, clamping, owned projectiles, fire
    state
        .player
        .update(input, canvas, state.config.bounds_policy);

    // 3. Enemy pursuit and player contact
    for enemy in &mut state.enemies {
        enemy.update(state.player.pos);

        if collides(enemy, &state.player) {
            enemy.marked_for_removal = true;
            state.player.lives -= enemy.score as i32;
            if state.player.lives <= 0 && state.phase != GamePhase::GameOver {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "game over at frame {} with score {}",
                    state.frame,
                    state.player.score
                );
            }
        }
    }

    // 4. Projectile hits. Marked enemies are still hittable (marked is not
    // removed); enemies already at zero strength stop consuming projectiles.
    for enemy in &mut state.enemies {
        if enemy.strength == 0 {
            continue;
        }
        for projectile in &mut state.player.projectiles {
            if projectile.marked_for_removal {
                continue;
            }
            if collides(enemy, projectile) {
                projectile.marked_for_removal = true;
                enemy.strength -= 1;
                if enemy.strength == 0 {
                    enemy.marked_for_removal = true;
                    state.player.score += enemy.score;
                    state.player.ammo = (state.player.ammo + enemy.score).min(state.config.max_ammo);
                }
            }
        }
    }

    // 5. End-of-frame sweep
    state.enemies.retain(|e| !e.marked_for_removal);
    state.player.projectiles.retain(|p| !p.marked_for_removal);

    // 6. Ammo regeneration: at most one point per frame
    if state.ammo_cadence.overflowed(elapsed_ms) {
        state.player.ammo = (state.player.ammo + 1).min(state.config.max_ammo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::Enemy;

    fn new_state() -> GameState {
        GameState::new(Config::default(), 12345)
    }

    /// Pointer far to the right so the aim angle is ~0
    fn idle_input() -> TickInput {
        TickInput {
            pointer: Vec2::new(10_000.0, 270.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_advances_frame_counter() {
        let mut state = new_state();
        tick(&mut state, &idle_input(), 16.0);
        tick(&mut state, &idle_input(), 16.0);
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn test_spawn_through_tick() {
        let mut state = new_state();
        tick(&mut state, &idle_input(), 1001.0);
        assert_eq!(state.enemies.len(), 1);

        // A single long frame still spawns only one enemy
        tick(&mut state, &idle_input(), 60_000.0);
        assert_eq!(state.enemies.len(), 2);
    }

    #[test]
    fn test_player_contact_damages_and_marks() {
        let mut state = new_state();
        state.enemies.push(Enemy::new(state.player.pos, 2));

        let lives_before = state.player.lives;
        tick(&mut state, &idle_input(), 0.0);

        assert_eq!(state.player.lives, lives_before - 2);
        assert!(state.enemies.is_empty(), "contact enemy swept at end of frame");
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_lethal_contact_sets_terminal_flag() {
        let mut state = new_state();
        state.player.lives = 1;
        state.enemies.push(Enemy::new(state.player.pos, 1));

        tick(&mut state, &idle_input(), 0.0);
        assert_eq!(state.player.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Terminal state is absorbing: further ticks change nothing
        let frame = state.frame;
        tick(&mut state, &idle_input(), 1000.0);
        assert_eq!(state.frame, frame);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_projectile_kill_awards_score_and_ammo() {
        let mut state = new_state();
        state.player.ammo = 5;

        // Strength-1 enemy well clear of the player, with a projectile
        // mid-flight in its path
        let enemy_pos = state.player.pos + Vec2::new(120.0, -5.0);
        state.enemies.push(Enemy::new(enemy_pos, 1));
        state.player.shoot();
        assert_eq!(state.player.ammo, 4);
        state.player.projectiles[0].pos = state.player.pos + Vec2::new(120.0, 0.0);

        tick(&mut state, &idle_input(), 0.0);

        assert!(state.enemies.is_empty());
        assert!(state.player.projectiles.is_empty());
        assert_eq!(state.player.score, 1);
        assert_eq!(state.player.ammo, 5); // kill refunds the enemy's score
    }

    #[test]
    fn test_strength_two_enemy_survives_first_hit() {
        let mut state = new_state();
        state.player.ammo = 10;

        let enemy_pos = state.player.pos + Vec2::new(120.0, -5.0);
        state.enemies.push(Enemy::new(enemy_pos, 2));
        state.player.shoot();
        state.player.projectiles[0].pos = state.player.pos + Vec2::new(120.0, 0.0);

        tick(&mut state, &idle_input(), 0.0);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].strength, 1);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.ammo, 9);
        assert!(state.player.projectiles.is_empty(), "hit consumed the projectile");

        // Second hit destroys it and pays out the full initial strength
        state.enemies[0].pos = state.player.pos + Vec2::new(120.0, -5.0);
        state.player.shoot();
        state.player.projectiles[0].pos = state.player.pos + Vec2::new(120.0, 0.0);
        tick(&mut state, &idle_input(), 0.0);

        assert!(state.enemies.is_empty());
        assert_eq!(state.player.score, 2);
        assert_eq!(state.player.ammo, 10);
    }

    #[test]
    fn test_same_frame_contact_and_kill_both_apply() {
        // An enemy that touches the player the same frame a projectile
        // finishes it: the player takes damage and still gets the award.
        let mut state = new_state();
        state.player.ammo = 5;

        let mut enemy = Enemy::new(state.player.pos, 1);
        enemy.pos = state.player.pos; // overlapping the player
        state.enemies.push(enemy);
        // Projectile overlapping the enemy as well
        state.player.shoot();
        state.player.projectiles[0].pos = state.player.pos;

        let lives_before = state.player.lives;
        tick(&mut state, &idle_input(), 0.0);

        assert_eq!(state.player.lives, lives_before - 1);
        assert_eq!(state.player.score, 1);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_ammo_regeneration_caps_at_max() {
        let mut state = new_state();
        state.player.ammo = 0;

        tick(&mut state, &idle_input(), 501.0);
        assert_eq!(state.player.ammo, 1);

        // One long frame grants at most one point
        tick(&mut state, &idle_input(), 10_000.0);
        assert_eq!(state.player.ammo, 2);

        state.player.ammo = state.config.max_ammo;
        tick(&mut state, &idle_input(), 501.0);
        assert_eq!(state.player.ammo, state.config.max_ammo);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(Config::default(), 99999);
        let mut b = GameState::new(Config::default(), 99999);

        let inputs = [
            TickInput {
                right: true,
                ..idle_input()
            },
            TickInput {
                fire: true,
                ..idle_input()
            },
            TickInput {
                up: true,
                right: true,
                ..idle_input()
            },
            idle_input(),
        ];

        for _ in 0..600 {
            for input in &inputs {
                tick(&mut a, input, 16.0);
                tick(&mut b, input, 16.0);
            }
        }

        assert_eq!(a.frame, b.frame);
        assert_eq!(a.enemies.len(), b.enemies.len());
        assert_eq!(a.player.score, b.player.score);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_mode_toggle_is_edge_triggered() {
        use crate::sim::state::MovementMode;

        let mut state = new_state();
        assert_eq!(state.player.mode, MovementMode::Absolute);

        let toggle = TickInput {
            toggle_mode: true,
            ..idle_input()
        };
        tick(&mut state, &toggle, 16.0);
        assert_eq!(state.player.mode, MovementMode::Relative);

        tick(&mut state, &idle_input(), 16.0);
        assert_eq!(state.player.mode, MovementMode::Relative);

        tick(&mut state, &toggle, 16.0);
        assert_eq!(state.player.mode, MovementMode::Absolute);
    }
}
