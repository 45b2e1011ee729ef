//! Game loop and session state machine.
//!
//! Every public function takes an immutable reference to the current
//! `GameSession` and returns a brand-new one.  Side effects are limited to
//! the injected RNG; sounds and HUD updates come back as `GameEvent`s in the
//! returned session.

use rand::Rng;
use tracing::{debug, info};

use crate::audio::SoundCue;
use crate::camera::update_camera;
use crate::collectibles::{collect_coins, collect_power_ups, update_coins, update_power_ups};
use crate::constants::*;
use crate::enemy::update_enemies;
use crate::entities::*;
use crate::input::InputState;
use crate::level;
use crate::particles::{spawn_burst, update_particles};
use crate::physics::overlaps;
use crate::player::{player_hit, update_player};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session: full lives and clock, the level as authored, and a
/// camera whose viewport measures `viewport_width × viewport_height` world
/// units.
pub fn init_state(viewport_width: f32, viewport_height: f32) -> GameSession {
    GameSession {
        player: Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
        platforms: level::create_platforms(),
        enemies: level::create_enemies(),
        coins: level::create_coins(),
        power_ups: level::create_power_ups(),
        particles: Vec::new(),
        camera: Camera::new(viewport_width, viewport_height),
        status: GameStatus::Playing,
        score: 0,
        coins_collected: 0,
        lives: START_LIVES,
        time: START_TIME,
        frame: 0,
        events: Vec::new(),
    }
}

// ── Commands (pure) ──────────────────────────────────────────────────────────

/// Playing ↔ Paused.  Terminal states ignore the toggle.
pub fn toggle_pause(state: &GameSession) -> GameSession {
    let status = match state.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        ref other => other.clone(),
    };
    if status != state.status {
        info!(?status, "pause toggled");
    }
    GameSession {
        status,
        events: Vec::new(),
        ..state.clone()
    }
}

/// Start over: score, lives, clock, player and level are all rebuilt.  Only
/// the viewport survives.
pub fn restart(state: &GameSession) -> GameSession {
    info!(previous_score = state.score, "restarting session");
    let mut fresh = init_state(state.camera.viewport_width, state.camera.viewport_height);
    fresh.emit(GameEvent::HidePanel);
    let event = fresh.score_changed();
    fresh.emit(event);
    fresh
}

/// Enter a terminal state and raise the end-of-game panel.
pub(crate) fn end_game(state: &mut GameSession, status: GameStatus, title: &str) {
    info!(?status, score = state.score, "session ended: {title}");
    state.status = status;
    let message = match state.status {
        GameStatus::Victory => format!("Final Score: {}", state.score),
        _ => format!("Score: {}", state.score),
    };
    state.emit(GameEvent::ShowPanel {
        title: title.to_string(),
        message,
    });
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
///
/// Only a `Playing` session moves; any other state is returned unchanged
/// (apart from clearing last tick's events).  Steps run in a fixed order and
/// the tick stops as soon as one of them ends the game, so time-up, a final
/// death and victory can never stack within one tick.
pub fn tick(state: &GameSession, input: &InputState, rng: &mut impl Rng) -> GameSession {
    let mut next = GameSession {
        events: Vec::new(),
        ..state.clone()
    };
    if next.status != GameStatus::Playing {
        return next;
    }
    next.frame += 1;

    // ── 1. Clock ─────────────────────────────────────────────────────────────
    update_timer(&mut next);
    if next.status != GameStatus::Playing {
        return next;
    }

    // ── 2. Player ────────────────────────────────────────────────────────────
    update_player(&mut next, input, rng);
    if next.status != GameStatus::Playing {
        return next;
    }

    // ── 3. Enemies, collectibles, particles, camera ──────────────────────────
    update_enemies(&mut next, rng);
    update_coins(&mut next.coins);
    update_power_ups(&mut next.power_ups);
    update_particles(&mut next.particles);
    let (target_x, target_y) = (next.player.x, next.player.y);
    update_camera(&mut next.camera, target_x, target_y);

    // ── 4. Collisions ────────────────────────────────────────────────────────
    check_collisions(&mut next, rng);
    if next.status != GameStatus::Playing {
        return next;
    }

    // ── 5. Goal ──────────────────────────────────────────────────────────────
    check_victory(&mut next);

    next
}

fn update_timer(state: &mut GameSession) {
    state.time -= 1.0 / TICKS_PER_SECOND;
    if state.time <= 0.0 {
        state.time = 0.0;
        end_game(state, GameStatus::GameOver, "Time Up!");
    }
}

/// Player against enemies, then coins, then power-ups.
fn check_collisions(state: &mut GameSession, rng: &mut impl Rng) {
    check_enemy_contacts(state, rng);
    if state.status != GameStatus::Playing {
        return;
    }
    collect_coins(state, rng);
    collect_power_ups(state, rng);
}

/// Falling onto an enemy from above is a stomp; any other touch hurts.  An
/// invincible player passes through enemies without either.
fn check_enemy_contacts(state: &mut GameSession, rng: &mut impl Rng) {
    for i in 0..state.enemies.len() {
        if state.player.is_invincible {
            continue;
        }
        if !overlaps(&state.player.rect(), &state.enemies[i].rect()) {
            continue;
        }

        let enemy = &state.enemies[i];
        if state.player.vy > 0.0 && state.player.y < enemy.y {
            let (cx, top) = (enemy.x + enemy.width / 2.0, enemy.y);
            debug!(kind = enemy.name(), "stomp");
            state.enemies[i].health -= 1;
            state.player.vy = STOMP_BOUNCE;
            state.play(SoundCue::STOMP);
            spawn_burst(&mut state.particles, cx, top, ParticleColor::Yellow, 5, rng);
        } else {
            debug!(kind = enemy.name(), "player hit");
            player_hit(state, rng);
            if state.status != GameStatus::Playing {
                return;
            }
        }
    }
}

fn check_victory(state: &mut GameSession) {
    if state.player.x > VICTORY_MIN_X && state.player.y < VICTORY_MAX_Y {
        state.add_score(state.time.floor() as u32 * TIME_BONUS_PER_SECOND);
        for cue in SoundCue::VICTORY {
            state.play(cue);
        }
        end_game(state, GameStatus::Victory, "VICTORY!");
    }
}
