//! Tuning constants for the simulation.
//!
//! All values assume one tick per display frame at roughly 60 Hz; there is no
//! delta-time scaling anywhere in the simulation.

// ── World ─────────────────────────────────────────────────────────────────────

pub const WORLD_WIDTH: f32 = 3200.0;
pub const WORLD_HEIGHT: f32 = 576.0;

pub const GRAVITY: f32 = 0.8;
pub const FRICTION: f32 = 0.85;

pub const TICKS_PER_SECOND: f32 = 60.0;

// ── Session ───────────────────────────────────────────────────────────────────

pub const START_LIVES: i32 = 3;
pub const START_TIME: f32 = 300.0;

/// Reaching a multiple of this many coins grants an extra life.
pub const COINS_PER_LIFE: u32 = 100;

pub const VICTORY_MIN_X: f32 = 2900.0;
pub const VICTORY_MAX_Y: f32 = 250.0;
/// Points per whole second left on the clock at victory.
pub const TIME_BONUS_PER_SECOND: u32 = 10;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SPAWN_X: f32 = 50.0;
pub const PLAYER_SPAWN_Y: f32 = 400.0;
pub const PLAYER_WIDTH: f32 = 32.0;
pub const PLAYER_SMALL_HEIGHT: f32 = 32.0;
pub const PLAYER_BIG_HEIGHT: f32 = 48.0;

pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_JUMP_POWER: f32 = 15.0;
pub const PLAYER_MAX_SPEED: f32 = 8.0;

pub const ACCEL_FACTOR: f32 = 0.1;
pub const RUN_MULTIPLIER: f32 = 1.5;
pub const DOUBLE_JUMP_FACTOR: f32 = 0.8;
pub const STOMP_BOUNCE: f32 = -8.0;

pub const STAR_INVINCIBILITY: i32 = 600;
pub const HIT_INVINCIBILITY: i32 = 120;
pub const RESPAWN_INVINCIBILITY: i32 = 180;

// ── Enemies ───────────────────────────────────────────────────────────────────

/// How far below a platform's bottom edge a goomba's feet may sit and still
/// count as standing on it.
pub const GOOMBA_FOOT_TOLERANCE: f32 = 10.0;

pub const FLY_HOVER_STEP: f32 = 0.1;

pub const BOSS_ATTACK_INTERVAL: u32 = 120;
pub const BOSS_CHARGE_SPEED: f32 = 2.0;
pub const BOSS_DRAG: f32 = 0.95;
pub const BOSS_MIN_X: f32 = 2200.0;
pub const BOSS_MAX_X: f32 = 2750.0;

pub const ENEMY_SCORE: u32 = 200;
pub const BOSS_SCORE: u32 = 1000;

// ── Collectibles ──────────────────────────────────────────────────────────────

pub const COIN_SIZE: f32 = 24.0;
pub const POWER_UP_SIZE: f32 = 32.0;
pub const COIN_SCORE: u32 = 100;
pub const POWER_UP_SCORE: u32 = 1000;

// ── Particles ─────────────────────────────────────────────────────────────────

pub const PARTICLE_LIFE: u32 = 30;
pub const PARTICLE_GRAVITY: f32 = 0.2;
pub const PARTICLE_SPREAD: f32 = 8.0;
pub const PARTICLE_LIFT: f32 = 2.0;

// ── Camera ────────────────────────────────────────────────────────────────────

pub const CAMERA_SMOOTHING: f32 = 0.1;

// ── Runtime defaults (overridable via platformer.toml) ────────────────────────

pub const DEFAULT_FRAME_MS: u64 = 16;
/// World units covered by one terminal column.
pub const DEFAULT_CELL_WIDTH: f32 = 8.0;
/// World units covered by one terminal row (cells are roughly twice as tall
/// as they are wide).
pub const DEFAULT_CELL_HEIGHT: f32 = 16.0;
pub const DEFAULT_LOG_FILE: &str = "platformer.log";
pub const CONFIG_FILE: &str = "platformer.toml";
pub const CONFIG_ENV: &str = "PLATFORMER_CONFIG";
