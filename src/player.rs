//! Player controller: movement, jumping, power levels, damage and respawn.

use rand::Rng;
use tracing::{debug, info};

use crate::audio::SoundCue;
use crate::compute::end_game;
use crate::constants::*;
use crate::entities::*;
use crate::input::InputState;
use crate::particles::spawn_burst;
use crate::physics::resolve_platforms;

// ── Per-tick update ───────────────────────────────────────────────────────────

/// Advance the player by one tick.
///
/// Falling out of the world kills the player here; the platform pass still
/// runs afterwards on whatever position the death left behind (spawn point
/// after a respawn).
pub fn update_player(state: &mut GameSession, input: &InputState, rng: &mut impl Rng) {
    let p = &mut state.player;

    // Horizontal movement
    if input.left {
        p.vx -= p.speed * ACCEL_FACTOR;
        p.direction = -1;
    }
    if input.right {
        p.vx += p.speed * ACCEL_FACTOR;
        p.direction = 1;
    }
    p.vx *= FRICTION;

    let max_speed = if input.run {
        p.max_speed * RUN_MULTIPLIER
    } else {
        p.max_speed
    };
    p.vx = p.vx.clamp(-max_speed, max_speed);

    // Jumping
    let mut cue = None;
    if input.jump && p.grounded {
        p.vy = -p.jump_power;
        p.grounded = false;
        cue = Some(SoundCue::JUMP);
    } else if input.jump && p.can_double_jump && p.has_double_jump {
        p.vy = -p.jump_power * DOUBLE_JUMP_FACTOR;
        p.has_double_jump = false;
        cue = Some(SoundCue::DOUBLE_JUMP);
    }

    if !p.grounded {
        p.vy += GRAVITY;
    }

    p.x += p.vx;
    p.y += p.vy;
    p.x = p.x.clamp(0.0, WORLD_WIDTH - p.width);
    let fell_out = p.y > WORLD_HEIGHT;

    if let Some(cue) = cue {
        state.play(cue);
    }
    if fell_out {
        debug!(x = state.player.x, "player fell out of the world");
        player_death(state, rng);
    }

    let p = &mut state.player;
    resolve_platforms(p, &state.platforms);

    if p.is_invincible {
        p.invincible_timer -= 1;
        if p.invincible_timer <= 0 {
            p.is_invincible = false;
        }
    }

    p.anim_timer += 0.1;
    p.anim_frame = if p.vx.abs() > 0.1 {
        ((p.anim_timer * 10.0).floor() as u32 % 3) as u8
    } else {
        0
    };
}

// ── Power levels ──────────────────────────────────────────────────────────────

/// Apply a collected power-up's effect.  Every kind is worth the same bonus.
pub fn apply_power_up(state: &mut GameSession, kind: PowerUpKind) {
    let p = &mut state.player;

    match kind {
        PowerUpKind::Mushroom => {
            if p.power_level == POWER_SMALL {
                p.power_level = POWER_BIG;
                p.height = PLAYER_BIG_HEIGHT;
                p.health = 2;
            }
        }
        PowerUpKind::Fire => {
            p.power_level = POWER_FIRE;
            p.can_shoot_fire = true;
            p.health = 2;
        }
        PowerUpKind::Star => {
            p.is_invincible = true;
            p.invincible_timer = STAR_INVINCIBILITY;
        }
        PowerUpKind::Life => {
            state.lives += 1;
        }
    }
    debug!(?kind, power_level = state.player.power_level, "power-up applied");

    state.add_score(POWER_UP_SCORE);
}

/// The player touched an enemy without stomping it.
///
/// Powered-up players drop one level and get a short grace period; a small
/// player dies.  Invincibility is checked by the caller.
pub fn player_hit(state: &mut GameSession, rng: &mut impl Rng) {
    let p = &mut state.player;

    if p.power_level > POWER_SMALL {
        p.power_level -= 1;
        if p.power_level == POWER_SMALL {
            p.height = PLAYER_SMALL_HEIGHT;
            p.health = 1;
            p.can_shoot_fire = false;
        }
        p.is_invincible = true;
        p.invincible_timer = HIT_INVINCIBILITY;
        debug!(power_level = p.power_level, "player powered down");
        state.play(SoundCue::HIT);
    } else {
        player_death(state, rng);
    }
}

/// Lose a life; either respawn or end the session on the spot.
pub fn player_death(state: &mut GameSession, rng: &mut impl Rng) {
    state.lives -= 1;
    state.play(SoundCue::DEATH);
    let event = state.score_changed();
    state.emit(event);

    let (x, y) = (state.player.x + 16.0, state.player.y + 16.0);
    spawn_burst(&mut state.particles, x, y, ParticleColor::Red, 12, rng);

    if state.lives <= 0 {
        end_game(state, GameStatus::GameOver, "Game Over!");
    } else {
        info!(lives = state.lives, "player died, respawning");
        respawn_player(&mut state.player);
    }
}

/// Back to the start with no power-ups and a few seconds of invincibility.
pub fn respawn_player(p: &mut Player) {
    p.x = PLAYER_SPAWN_X;
    p.y = PLAYER_SPAWN_Y;
    p.vx = 0.0;
    p.vy = 0.0;
    p.power_level = POWER_SMALL;
    p.height = PLAYER_SMALL_HEIGHT;
    p.health = 1;
    p.can_shoot_fire = false;
    p.is_invincible = true;
    p.invincible_timer = RESPAWN_INVINCIBILITY;
}
