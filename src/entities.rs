//! All game entity types: plain data plus a few bookkeeping helpers.
//!
//! Coordinates are world units with the origin at the top-left corner and
//! `y` growing downward.

use crate::audio::SoundCue;
use crate::constants::*;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// ── Level geometry ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlatformKind {
    Ground,
    Platform,
    /// The goal ledge at the far end of the level.
    Victory,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Upgrade tier.  Stored as a number so "step down one level" is plain
/// arithmetic; always within `0..=2`.
pub const POWER_SMALL: u8 = 0;
pub const POWER_BIG: u8 = 1;
pub const POWER_FIRE: u8 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    /// Platform support was reasserted this tick.
    pub grounded: bool,
    /// -1 facing left, 1 facing right.
    pub direction: i8,

    // Abilities
    /// Never enabled by the current level; kept as a capability switch.
    pub can_double_jump: bool,
    pub has_double_jump: bool,
    pub can_shoot_fire: bool,
    pub is_invincible: bool,
    pub invincible_timer: i32,

    // Animation (cosmetic)
    pub anim_frame: u8,
    pub anim_timer: f32,

    pub power_level: u8,
    pub health: u8,

    // Movement tuning
    pub speed: f32,
    pub jump_power: f32,
    pub max_speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PLAYER_WIDTH,
            height: PLAYER_SMALL_HEIGHT,
            vx: 0.0,
            vy: 0.0,
            grounded: false,
            direction: 1,
            can_double_jump: false,
            has_double_jump: false,
            can_shoot_fire: false,
            is_invincible: false,
            invincible_timer: 0,
            anim_frame: 0,
            anim_timer: 0.0,
            power_level: POWER_SMALL,
            health: 1,
            speed: PLAYER_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            max_speed: PLAYER_MAX_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Variant tag plus the fields only that variant uses.
#[derive(Clone, Debug, PartialEq)]
pub enum EnemyKind {
    /// Walks back and forth, turning at platform edges.
    Goomba,
    /// Flies horizontally while hovering on a sine wave.
    Fly {
        hover_y: f32,
        hover_range: f32,
        hover_timer: f32,
    },
    /// Periodically charges toward the player inside its arena.
    Boss { attack_timer: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub health: i32,
    pub max_health: i32,
    pub direction: i8,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EnemyKind::Boss { .. })
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            EnemyKind::Goomba => "goomba",
            EnemyKind::Fly { .. } => "fly",
            EnemyKind::Boss { .. } => "boss",
        }
    }
}

// ── Collectibles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub collected: bool,
    pub bob_timer: f32,
    /// Accumulated cosmetic displacement; never part of the hit box.
    pub bob_offset: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, bob_timer: f32) -> Self {
        Self {
            x,
            y,
            collected: false,
            bob_timer,
            bob_offset: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, COIN_SIZE, COIN_SIZE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PowerUpKind {
    /// Small → big.
    Mushroom,
    /// Any level → fire.
    Fire,
    /// Temporary invincibility.
    Star,
    /// One extra life.
    Life,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
    pub collected: bool,
    pub bob_timer: f32,
    pub bob_offset: f32,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self {
            x,
            y,
            kind,
            collected: false,
            bob_timer: 0.0,
            bob_offset: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, POWER_UP_SIZE, POWER_UP_SIZE)
    }
}

// ── Particles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleColor {
    /// Deaths and defeated enemies.
    Red,
    /// Stomps.
    Yellow,
    /// Coins.
    Gold,
    /// Power-ups.
    Green,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: ParticleColor,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    /// Remaining fraction of the particle's lifetime, 1.0 when fresh.
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

// ── Camera ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub smoothing: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            smoothing: CAMERA_SMOOTHING,
            viewport_width,
            viewport_height,
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Victory)
    }
}

/// Something the outside world should react to.  Produced by a tick and
/// drained by the frame loop; the simulation never reads them back.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Sound(SoundCue),
    ScoreChanged {
        score: u32,
        coins: u32,
        lives: i32,
        time: f32,
    },
    ShowPanel {
        title: String,
        message: String,
    },
    HidePanel,
}

/// The entire game state.  Cloneable so the update functions can return a
/// fresh copy without mutating the caller's value.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub camera: Camera,
    pub status: GameStatus,
    pub score: u32,
    pub coins_collected: u32,
    pub lives: i32,
    /// Seconds left on the level clock.
    pub time: f32,
    pub frame: u64,
    /// Events raised by the most recent update.
    pub events: Vec<GameEvent>,
}

impl GameSession {
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.events.push(GameEvent::Sound(cue));
    }

    /// Snapshot of the HUD numbers.
    pub fn score_changed(&self) -> GameEvent {
        GameEvent::ScoreChanged {
            score: self.score,
            coins: self.coins_collected,
            lives: self.lives,
            time: self.time,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
        let event = self.score_changed();
        self.emit(event);
    }

    pub fn sounds(&self) -> impl Iterator<Item = &SoundCue> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Sound(cue) => Some(cue),
            _ => None,
        })
    }
}
