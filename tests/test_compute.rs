use platformer::audio::SoundCue;
use platformer::compute::*;
use platformer::constants::*;
use platformer::entities::*;
use platformer::input::InputState;
use platformer::level;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The level geometry with every enemy and collectible removed.
fn make_state() -> GameSession {
    let mut s = init_state(960.0, 576.0);
    s.enemies.clear();
    s.coins.clear();
    s.power_ups.clear();
    s
}

/// Player standing on the starting ground at x=100.
fn standing_state() -> GameSession {
    let mut s = make_state();
    s.player.x = 100.0;
    s.player.y = 468.0;
    s.player.grounded = true;
    s
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn idle() -> InputState {
    InputState::default()
}

fn panel_title(s: &GameSession) -> Option<&str> {
    s.events.iter().find_map(|e| match e {
        GameEvent::ShowPanel { title, .. } => Some(title.as_str()),
        _ => None,
    })
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_builds_the_level() {
    let s = init_state(960.0, 576.0);
    assert_eq!(s.platforms.len(), 15);
    assert_eq!(s.enemies.len(), 7);
    assert_eq!(s.coins.len(), 17);
    assert_eq!(s.power_ups.len(), 4);
    assert!(s.particles.is_empty());
}

#[test]
fn init_state_counters() {
    let s = init_state(960.0, 576.0);
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.score, 0);
    assert_eq!(s.coins_collected, 0);
    assert_eq!(s.lives, START_LIVES);
    assert_eq!(s.time, START_TIME);
    assert_eq!(s.frame, 0);
    assert_eq!((s.player.x, s.player.y), (PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    assert!(s.events.is_empty());
}

#[test]
fn init_state_sizes_the_camera() {
    let s = init_state(640.0, 320.0);
    assert_eq!(s.camera.viewport_width, 640.0);
    assert_eq!(s.camera.viewport_height, 320.0);
    assert_eq!((s.camera.x, s.camera.y), (0.0, 0.0));
}

// ── tick basics ───────────────────────────────────────────────────────────────

#[test]
fn tick_does_not_mutate_input() {
    let s = init_state(960.0, 576.0);
    let _ = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s.frame, 0);
    assert_eq!(s.time, START_TIME);
}

#[test]
fn tick_advances_frame_and_clock() {
    let s = init_state(960.0, 576.0);
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s2.frame, 1);
    assert!((s2.time - (START_TIME - 1.0 / 60.0)).abs() < 1e-4);
}

#[test]
fn tick_clears_previous_events() {
    let mut s = standing_state();
    s.play(SoundCue::JUMP);
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert!(s2.sounds().next().is_none());
}

#[test]
fn seeded_ticks_are_deterministic() {
    let run = || {
        let mut s = init_state(960.0, 576.0);
        let mut rng = StdRng::seed_from_u64(9);
        let right = InputState {
            right: true,
            ..InputState::default()
        };
        for _ in 0..300 {
            s = tick(&s, &right, &mut rng);
        }
        s
    };
    let a = run();
    let b = run();
    assert_eq!(a.player, b.player);
    assert_eq!(a.enemies, b.enemies);
    assert_eq!(a.particles, b.particles);
    assert_eq!(a.score, b.score);
    assert_eq!(a.lives, b.lives);
}

#[test]
fn camera_follows_the_player() {
    let mut s = make_state();
    s.player.x = 2000.0;
    s.player.y = 400.0;
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert!(s2.camera.x > 0.0);
}

// ── Pause ─────────────────────────────────────────────────────────────────────

#[test]
fn pause_round_trip() {
    let s = init_state(960.0, 576.0);
    let paused = toggle_pause(&s);
    assert_eq!(paused.status, GameStatus::Paused);
    assert_eq!(toggle_pause(&paused).status, GameStatus::Playing);
}

#[test]
fn paused_session_does_not_move() {
    let s = toggle_pause(&init_state(960.0, 576.0));
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s2.frame, s.frame);
    assert_eq!(s2.time, s.time);
    assert_eq!(s2.player, s.player);
    assert_eq!(s2.enemies, s.enemies);
}

#[test]
fn pause_is_ignored_after_the_game_ends() {
    let mut s = init_state(960.0, 576.0);
    s.status = GameStatus::GameOver;
    assert_eq!(toggle_pause(&s).status, GameStatus::GameOver);
    s.status = GameStatus::Victory;
    assert_eq!(toggle_pause(&s).status, GameStatus::Victory);
}

// ── Restart ───────────────────────────────────────────────────────────────────

#[test]
fn restart_rebuilds_everything_but_the_viewport() {
    let mut s = init_state(640.0, 320.0);
    s.status = GameStatus::GameOver;
    s.score = 5000;
    s.lives = 0;
    s.time = 12.0;
    s.coins[0].collected = true;
    s.enemies.clear();
    s.player.power_level = POWER_FIRE;

    let r = restart(&s);
    assert_eq!(r.status, GameStatus::Playing);
    assert_eq!(r.score, 0);
    assert_eq!(r.lives, START_LIVES);
    assert_eq!(r.time, START_TIME);
    assert!(!r.coins[0].collected);
    assert_eq!(r.enemies.len(), 7);
    assert_eq!(r.player.power_level, POWER_SMALL);
    assert_eq!(r.camera.viewport_width, 640.0);
    assert_eq!(r.camera.viewport_height, 320.0);
}

#[test]
fn restart_hides_the_panel_and_resets_the_hud() {
    let r = restart(&init_state(960.0, 576.0));
    assert!(r.events.contains(&GameEvent::HidePanel));
    assert!(r.events.contains(&GameEvent::ScoreChanged {
        score: 0,
        coins: 0,
        lives: START_LIVES,
        time: START_TIME,
    }));
}

// ── Time up ───────────────────────────────────────────────────────────────────

#[test]
fn running_out_of_time_ends_the_game() {
    let mut s = standing_state();
    s.time = 0.01;
    let right = InputState {
        right: true,
        ..InputState::default()
    };
    let s2 = tick(&s, &right, &mut seeded_rng());

    assert_eq!(s2.status, GameStatus::GameOver);
    assert_eq!(s2.time, 0.0);
    assert_eq!(panel_title(&s2), Some("Time Up!"));
    // Nothing else ran this tick
    assert_eq!(s2.player.x, 100.0);
}

// ── Victory ───────────────────────────────────────────────────────────────────

#[test]
fn reaching_the_goal_wins_with_time_bonus() {
    let mut s = make_state();
    s.player.x = 2950.0;
    s.player.y = 200.0;
    let s2 = tick(&s, &idle(), &mut seeded_rng());

    assert_eq!(s2.status, GameStatus::Victory);
    let bonus = s2.time.floor() as u32 * TIME_BONUS_PER_SECOND;
    assert_eq!(bonus, 2990);
    assert_eq!(s2.score, bonus);
    assert_eq!(panel_title(&s2), Some("VICTORY!"));
    assert!(s2.events.contains(&GameEvent::ShowPanel {
        title: "VICTORY!".to_string(),
        message: "Final Score: 2990".to_string(),
    }));

    let jingle: Vec<SoundCue> = s2.sounds().copied().collect();
    assert_eq!(jingle, SoundCue::VICTORY.to_vec());
}

#[test]
fn victory_only_triggers_once() {
    let mut s = make_state();
    s.player.x = 2950.0;
    s.player.y = 200.0;
    let mut rng = seeded_rng();
    let won = tick(&s, &idle(), &mut rng);
    let later = tick(&won, &idle(), &mut rng);
    let much_later = tick(&later, &idle(), &mut rng);

    assert_eq!(much_later.status, GameStatus::Victory);
    assert_eq!(much_later.score, won.score);
    assert!(later.events.is_empty());
    assert!(much_later.events.is_empty());
}

#[test]
fn goal_needs_both_coordinates() {
    let mut s = make_state();
    s.player.x = 2950.0;
    s.player.y = 300.0;
    assert_eq!(tick(&s, &idle(), &mut seeded_rng()).status, GameStatus::Playing);

    let mut s = make_state();
    s.player.x = 2850.0;
    s.player.y = 100.0;
    assert_eq!(tick(&s, &idle(), &mut seeded_rng()).status, GameStatus::Playing);
}

// ── Enemy contact ─────────────────────────────────────────────────────────────

/// Player falling onto the first ledge goomba from just above.
fn stomp_state() -> GameSession {
    let mut s = make_state();
    s.enemies.push(level::goomba(450.0, 418.0, -1.0));
    s.player.x = 450.0;
    s.player.y = 400.0;
    s.player.vy = 5.0;
    s
}

#[test]
fn stomping_a_goomba() {
    let mut rng = seeded_rng();
    let s = tick(&stomp_state(), &idle(), &mut rng);

    assert_eq!(s.player.vy, STOMP_BOUNCE);
    assert_eq!(s.enemies[0].health, 0);
    assert!(s.sounds().any(|c| *c == SoundCue::STOMP));
    assert_eq!(s.lives, START_LIVES);
    assert_eq!(
        s.particles
            .iter()
            .filter(|p| p.color == ParticleColor::Yellow)
            .count(),
        5
    );

    // The defeated goomba is cleared out at the start of the next update
    let s = tick(&s, &idle(), &mut rng);
    assert!(s.enemies.is_empty());
    assert_eq!(s.score, ENEMY_SCORE);
}

#[test]
fn invincible_player_falls_through_enemies() {
    let mut s = stomp_state();
    s.player.is_invincible = true;
    s.player.invincible_timer = 100;
    let mut rng = seeded_rng();
    let s = tick(&s, &idle(), &mut rng);

    assert_eq!(s.enemies[0].health, 1);
    assert!(s.player.vy > 0.0);
    assert_ne!(s.player.vy, STOMP_BOUNCE);
    assert!(s.sounds().all(|c| *c != SoundCue::STOMP));

    let s = tick(&s, &idle(), &mut rng);
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.score, 0);
}

#[test]
fn respawn_grace_blocks_stomps() {
    let mut s = stomp_state();
    s.player.is_invincible = true;
    s.player.invincible_timer = RESPAWN_INVINCIBILITY;
    let s = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s.enemies[0].health, 1);
    assert_eq!(s.lives, START_LIVES);
}

#[test]
fn boss_takes_three_stomps() {
    let mut s = make_state();
    s.enemies.push(level::boss(2400.0, 452.0));
    let mut rng = seeded_rng();

    for hits in 1..=3 {
        s.player.x = 2405.0;
        s.player.y = 430.0;
        s.player.vy = 5.0;
        s.enemies[0].x = 2400.0;
        s = tick(&s, &idle(), &mut rng);
        assert_eq!(s.enemies[0].health, 3 - hits);
    }
    s = tick(&s, &idle(), &mut rng);
    assert!(s.enemies.is_empty());
    assert_eq!(s.score, BOSS_SCORE);
}

/// A small player standing next to a goomba walking into them.
fn side_hit_state() -> GameSession {
    let mut s = standing_state();
    s.enemies.push(level::goomba(110.0, 468.0, -1.0));
    s
}

#[test]
fn small_player_hit_from_the_side_dies_and_respawns() {
    let s = tick(&side_hit_state(), &idle(), &mut seeded_rng());

    assert_eq!(s.lives, START_LIVES - 1);
    assert_eq!(s.status, GameStatus::Playing);
    assert!(s.player.is_invincible);
    assert_eq!(s.player.invincible_timer, RESPAWN_INVINCIBILITY);
    assert_eq!((s.player.x, s.player.y), (PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    assert_eq!(s.player.power_level, POWER_SMALL);
    assert!(s.sounds().any(|c| *c == SoundCue::DEATH));
    assert!(s.events.contains(&GameEvent::ScoreChanged {
        score: 0,
        coins: 0,
        lives: START_LIVES - 1,
        time: s.time,
    }));
}

#[test]
fn big_player_hit_shrinks_instead() {
    let mut s = side_hit_state();
    s.player.power_level = POWER_BIG;
    s.player.height = PLAYER_BIG_HEIGHT;
    s.player.y = 452.0;
    s.player.health = 2;
    let s = tick(&s, &idle(), &mut seeded_rng());

    assert_eq!(s.lives, START_LIVES);
    assert_eq!(s.player.power_level, POWER_SMALL);
    assert_eq!(s.player.invincible_timer, HIT_INVINCIBILITY);
    assert!(s.sounds().any(|c| *c == SoundCue::HIT));
}

#[test]
fn invincible_player_ignores_side_contact() {
    let mut s = side_hit_state();
    s.player.is_invincible = true;
    s.player.invincible_timer = 50;
    let s = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s.lives, START_LIVES);
    assert_eq!(s.player.x, 100.0);
}

#[test]
fn last_life_lost_is_game_over_on_the_same_tick() {
    let mut s = side_hit_state();
    s.lives = 1;
    let s = tick(&s, &idle(), &mut seeded_rng());

    assert_eq!(s.lives, 0);
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(panel_title(&s), Some("Game Over!"));
    assert!(s.events.contains(&GameEvent::ShowPanel {
        title: "Game Over!".to_string(),
        message: "Score: 0".to_string(),
    }));
}

#[test]
fn falling_into_a_pit_on_last_life_is_game_over() {
    let mut s = make_state();
    s.lives = 1;
    s.player.x = 350.0;
    s.player.y = WORLD_HEIGHT;
    let s = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(panel_title(&s), Some("Game Over!"));
}

// ── Collectibles through tick ─────────────────────────────────────────────────

#[test]
fn hundredth_coin_adds_a_life_on_the_same_tick() {
    let mut s = standing_state();
    s.coins_collected = 99;
    s.coins.push(Coin::new(105.0, 470.0, 0.0));
    let s = tick(&s, &idle(), &mut seeded_rng());

    assert_eq!(s.coins_collected, 100);
    assert_eq!(s.lives, START_LIVES + 1);
    assert_eq!(s.score, COIN_SCORE);
}

#[test]
fn collected_items_stay_collected() {
    let mut s = standing_state();
    s.coins.push(Coin::new(105.0, 470.0, 0.0));
    s.power_ups.push(PowerUp::new(100.0, 470.0, PowerUpKind::Star));
    let mut rng = seeded_rng();
    let s = tick(&s, &idle(), &mut rng);
    assert_eq!(s.score, COIN_SCORE + POWER_UP_SCORE);

    let mut later = s.clone();
    for _ in 0..30 {
        later = tick(&later, &idle(), &mut rng);
        assert!(later.coins[0].collected);
        assert!(later.power_ups[0].collected);
    }
    assert_eq!(later.coins_collected, 1);
    assert_eq!(later.score, COIN_SCORE + POWER_UP_SCORE);
}
