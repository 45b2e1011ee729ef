//! Enemy behavior, one rule per variant.

use rand::Rng;
use tracing::debug;

use crate::constants::*;
use crate::entities::{Enemy, EnemyKind, GameSession, ParticleColor, Platform};
use crate::particles::spawn_burst;

/// Remove defeated enemies (scoring and bursting each), then step the
/// survivors.  A removed enemy gets no behavior update this tick.
pub fn update_enemies(state: &mut GameSession, rng: &mut impl Rng) {
    let (defeated, alive): (Vec<Enemy>, Vec<Enemy>) =
        std::mem::take(&mut state.enemies).into_iter().partition(|e| e.health <= 0);
    state.enemies = alive;

    for enemy in &defeated {
        debug!(kind = enemy.name(), x = enemy.x, "enemy defeated");
        state.add_score(if enemy.is_boss() { BOSS_SCORE } else { ENEMY_SCORE });
        let (cx, cy) = enemy.rect().center();
        spawn_burst(&mut state.particles, cx, cy, ParticleColor::Red, 8, rng);
    }

    let player_x = state.player.x;
    for enemy in &mut state.enemies {
        match enemy.kind {
            EnemyKind::Goomba => update_goomba(enemy, &state.platforms),
            EnemyKind::Fly { .. } => update_fly(enemy),
            EnemyKind::Boss { .. } => update_boss(enemy, player_x),
        }
    }
}

/// Walk, stick to whatever platform is underfoot, and turn around at edges
/// and world bounds.  Goombas never fall.
pub fn update_goomba(enemy: &mut Enemy, platforms: &[Platform]) {
    enemy.x += enemy.vx;

    let mut on_platform = false;
    for p in platforms {
        let feet = enemy.y + enemy.height;
        if enemy.x + enemy.width > p.x
            && enemy.x < p.x + p.width
            && feet >= p.y
            && feet <= p.y + p.height + GOOMBA_FOOT_TOLERANCE
        {
            on_platform = true;
            enemy.y = p.y - enemy.height;
        }
    }

    if !on_platform || enemy.x <= 0.0 || enemy.x >= WORLD_WIDTH - enemy.width {
        enemy.vx = -enemy.vx;
        enemy.direction = -enemy.direction;
    }
}

pub fn update_fly(enemy: &mut Enemy) {
    enemy.x += enemy.vx;

    if let EnemyKind::Fly {
        hover_y,
        hover_range,
        ref mut hover_timer,
    } = enemy.kind
    {
        *hover_timer += FLY_HOVER_STEP;
        enemy.y = hover_y + hover_timer.sin() * hover_range;
    }

    if enemy.x <= 0.0 || enemy.x >= WORLD_WIDTH - enemy.width {
        enemy.vx = -enemy.vx;
    }
}

/// Charge toward the player every couple of seconds, coasting in between,
/// and never leave the castle floor.
pub fn update_boss(enemy: &mut Enemy, player_x: f32) {
    if let EnemyKind::Boss {
        ref mut attack_timer,
    } = enemy.kind
    {
        *attack_timer += 1;
        if *attack_timer > BOSS_ATTACK_INTERVAL {
            *attack_timer = 0;
            if player_x < enemy.x {
                enemy.vx = -BOSS_CHARGE_SPEED;
                enemy.direction = -1;
            } else {
                enemy.vx = BOSS_CHARGE_SPEED;
                enemy.direction = 1;
            }
        }
    }

    enemy.x += enemy.vx;
    enemy.vx *= BOSS_DRAG;

    enemy.x = enemy.x.clamp(BOSS_MIN_X, BOSS_MAX_X);
}
