//! Coins and power-ups: idle bobbing and pickup.

use rand::Rng;
use tracing::debug;

use crate::audio::SoundCue;
use crate::constants::*;
use crate::entities::{Coin, GameSession, ParticleColor, PowerUp};
use crate::particles::spawn_burst;
use crate::physics::overlaps;
use crate::player::apply_power_up;

pub fn update_coins(coins: &mut [Coin]) {
    for coin in coins.iter_mut().filter(|c| !c.collected) {
        coin.bob_timer += 0.1;
        coin.bob_offset += (coin.bob_timer * 3.0).sin() * 0.5;
    }
}

pub fn update_power_ups(power_ups: &mut [PowerUp]) {
    for power_up in power_ups.iter_mut().filter(|p| !p.collected) {
        power_up.bob_timer += 0.05;
        power_up.bob_offset += (power_up.bob_timer * 2.0).sin() * 0.3;
    }
}

/// Collect every uncollected coin the player touches.
pub fn collect_coins(state: &mut GameSession, rng: &mut impl Rng) {
    let player = state.player.rect();

    for i in 0..state.coins.len() {
        let coin = &mut state.coins[i];
        if coin.collected || !overlaps(&player, &coin.rect()) {
            continue;
        }
        coin.collected = true;
        let (cx, cy) = coin.rect().center();

        state.coins_collected += 1;
        state.add_score(COIN_SCORE);
        state.play(SoundCue::COLLECT);
        spawn_burst(&mut state.particles, cx, cy, ParticleColor::Gold, 6, rng);

        if state.coins_collected % COINS_PER_LIFE == 0 {
            state.lives += 1;
            state.play(SoundCue::EXTRA_LIFE);
            let event = state.score_changed();
            state.emit(event);
            debug!(coins = state.coins_collected, lives = state.lives, "coin extra life");
        }
    }
}

/// Collect every uncollected power-up the player touches and apply it.
pub fn collect_power_ups(state: &mut GameSession, rng: &mut impl Rng) {
    for i in 0..state.power_ups.len() {
        // A mushroom picked up earlier in this pass changes the player's height.
        let player = state.player.rect();
        let power_up = &mut state.power_ups[i];
        if power_up.collected || !overlaps(&player, &power_up.rect()) {
            continue;
        }
        power_up.collected = true;
        let kind = power_up.kind;
        let (cx, cy) = power_up.rect().center();

        apply_power_up(state, kind);
        state.play(SoundCue::POWER_UP);
        spawn_burst(&mut state.particles, cx, cy, ParticleColor::Green, 8, rng);
    }
}
