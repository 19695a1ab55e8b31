//! Game state and core simulation types
//!
//! Everything a deterministic session needs lives here: entity structs with
//! their per-frame kinematics, and the `GameState` that owns them. Ownership
//! is strict: the state owns the player and the enemy list, the player owns
//! its projectiles. Nothing is shared.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::{Cadence, SpawnScheduler};
use super::tick::TickInput;
use crate::config::{BoundsPolicy, Config};
use crate::consts::*;
use crate::{angle_between, heading};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Terminal; set once, never cleared
    GameOver,
}

/// Player control scheme, toggleable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MovementMode {
    /// Four directional keys drive independent per-axis accumulators with
    /// momentum that decays toward zero on release
    #[default]
    Absolute,
    /// Forward/back along the aim angle, strafe perpendicular; no momentum
    Relative,
}

/// A fired projectile
///
/// Angle and speed are fixed at creation; the body only translates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub marked_for_removal: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            angle,
            speed: PROJECTILE_SPEED,
            marked_for_removal: false,
        }
    }

    /// Advance one frame and mark for removal once out of bounds
    pub fn update(&mut self, canvas: Vec2, policy: BoundsPolicy) {
        self.pos += heading(self.angle) * self.speed;

        let out = match policy {
            BoundsPolicy::OneSided => self.pos.x > canvas.x * ONE_SIDED_CUTOFF,
            BoundsPolicy::FourSided => {
                self.pos.x < 0.0 || self.pos.x > canvas.x || self.pos.y < 0.0 || self.pos.y > canvas.y
            }
        };
        if out {
            self.marked_for_removal = true;
        }
    }
}

/// A homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Remaining hits before destruction
    pub strength: u8,
    /// Travel per frame, derived from the initial strength tier
    pub speed: f32,
    /// Award on kill and damage on player contact; equals initial strength
    pub score: u32,
    pub marked_for_removal: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, strength: u8) -> Self {
        Self {
            pos,
            size: Vec2::splat(ENEMY_SIZE),
            strength,
            speed: Self::speed_for(strength),
            score: strength as u32,
            marked_for_removal: false,
        }
    }

    /// Inverse strength-to-speed map: tougher enemies move slower
    pub fn speed_for(strength: u8) -> f32 {
        (MAX_STRENGTH + 1 - strength) as f32
    }

    /// Pure pursuit: re-aim at the player every frame, no leading
    pub fn update(&mut self, player_pos: Vec2) {
        let theta = angle_between(self.pos, player_pos);
        self.pos += heading(theta) * self.speed;
    }
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Per-axis movement accumulators (absolute mode)
    pub speed_x: f32,
    pub speed_y: f32,
    /// Aim angle in radians, recomputed from the pointer each frame
    pub aim: f32,
    pub lives: i32,
    pub score: u32,
    pub ammo: u32,
    pub mode: MovementMode,
    pub projectiles: Vec<Projectile>,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0),
            size: Vec2::splat(PLAYER_SIZE),
            speed_x: 0.0,
            speed_y: 0.0,
            aim: 0.0,
            lives: config.start_lives,
            score: 0,
            ammo: config.max_ammo,
            mode: config.start_mode,
            projectiles: Vec::new(),
        }
    }

    /// Per-frame player step: read the input snapshot, integrate movement,
    /// clamp to the canvas, advance owned projectiles, then handle fire.
    ///
    /// Fire is handled last so a fresh projectile is observable at its
    /// creation position for one frame before it starts moving.
    pub fn update(&mut self, input: &TickInput, canvas: Vec2, policy: BoundsPolicy) {
        self.aim = angle_between(self.pos, input.pointer);

        if input.toggle_mode {
            self.toggle_mode();
        }

        match self.mode {
            MovementMode::Absolute => self.integrate_absolute(input),
            MovementMode::Relative => self.move_relative(input),
        }

        let half = self.size * 0.5;
        self.pos.x = self.pos.x.clamp(-half.x, canvas.x - half.x);
        self.pos.y = self.pos.y.clamp(-half.y, canvas.y - half.y);

        for projectile in &mut self.projectiles {
            projectile.update(canvas, policy);
        }
        self.projectiles.retain(|p| !p.marked_for_removal);

        if input.fire {
            self.shoot();
        }
    }

    /// Switch control scheme; accumulators reset so stale momentum cannot
    /// resurface after a round-trip through relative mode.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            MovementMode::Absolute => MovementMode::Relative,
            MovementMode::Relative => MovementMode::Absolute,
        };
        self.speed_x = 0.0;
        self.speed_y = 0.0;
    }

    /// Absolute mode: held keys push the per-axis accumulators by the fixed
    /// increment; released axes decay toward zero at the same rate, snapping
    /// at the boundary so the accumulator never crosses it.
    fn integrate_absolute(&mut self, input: &TickInput) {
        // vertical axis
        if input.up {
            self.speed_y -= SPEED_INCREMENT;
        } else if !input.down && self.speed_y < 0.0 {
            self.speed_y += SPEED_INCREMENT;
            if self.speed_y > -SPEED_INCREMENT {
                self.speed_y = 0.0;
            }
        }
        if input.down {
            self.speed_y += SPEED_INCREMENT;
        } else if !input.up && self.speed_y > 0.0 {
            self.speed_y -= SPEED_INCREMENT;
            if self.speed_y < SPEED_INCREMENT {
                self.speed_y = 0.0;
            }
        }
        self.speed_y = self.speed_y.clamp(MIN_SPEED, MAX_SPEED);
        self.pos.y += self.speed_y;

        // horizontal axis
        if input.left {
            self.speed_x -= SPEED_INCREMENT;
        } else if !input.right && self.speed_x < 0.0 {
            self.speed_x += SPEED_INCREMENT;
            if self.speed_x > -SPEED_INCREMENT {
                self.speed_x = 0.0;
            }
        }
        if input.right {
            self.speed_x += SPEED_INCREMENT;
        } else if !input.left && self.speed_x > 0.0 {
            self.speed_x -= SPEED_INCREMENT;
            if self.speed_x < SPEED_INCREMENT {
                self.speed_x = 0.0;
            }
        }
        self.speed_x = self.speed_x.clamp(MIN_SPEED, MAX_SPEED);
        self.pos.x += self.speed_x;
    }

    /// Relative mode: motion only while a key is held, along or across the
    /// current aim angle.
    fn move_relative(&mut self, input: &TickInput) {
        use std::f32::consts::FRAC_PI_2;

        let mut dir = Vec2::ZERO;
        if input.up {
            dir += heading(self.aim);
        }
        if input.down {
            dir -= heading(self.aim);
        }
        if input.left {
            dir += heading(self.aim - FRAC_PI_2);
        }
        if input.right {
            dir += heading(self.aim + FRAC_PI_2);
        }
        self.pos += dir * RELATIVE_SPEED;
    }

    /// Fire one projectile at the current position and aim.
    ///
    /// Check-then-decrement: with no ammo this is a silent no-op, so the
    /// count can never go negative.
    pub fn shoot(&mut self) {
        if self.ammo >= 1 {
            self.ammo -= 1;
            self.projectiles.push(Projectile::new(self.pos, self.aim));
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Frames simulated so far
    pub frame: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub spawner: SpawnScheduler,
    /// Ammo regeneration accumulator
    pub ammo_cadence: Cadence,
}

impl GameState {
    pub fn new(config: Config, seed: u64) -> Self {
        let player = Player::new(&config);
        let spawner = SpawnScheduler::new(config.spawn_interval_ms);
        let ammo_cadence = Cadence::new(config.ammo_interval_ms);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            frame: 0,
            player,
            enemies: Vec::new(),
            spawner,
            ammo_cadence,
        }
    }

    /// Canvas dimensions as a vector
    pub fn canvas(&self) -> Vec2 {
        Vec2::new(self.config.canvas_width, self.config.canvas_height)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
