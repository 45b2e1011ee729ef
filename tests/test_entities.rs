use platformer::audio::SoundCue;
use platformer::compute::init_state;
use platformer::entities::*;
use platformer::level;

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center(), (25.0, 40.0));
}

#[test]
fn entity_enums_compare() {
    assert_eq!(PowerUpKind::Star, PowerUpKind::Star);
    assert_ne!(PowerUpKind::Star, PowerUpKind::Life);
    assert_ne!(PlatformKind::Ground, PlatformKind::Victory);
    assert_eq!(EnemyKind::Boss { attack_timer: 3 }, EnemyKind::Boss { attack_timer: 3 });
    assert_ne!(EnemyKind::Boss { attack_timer: 3 }, EnemyKind::Boss { attack_timer: 4 });
}

#[test]
fn only_game_over_and_victory_are_terminal() {
    assert!(!GameStatus::Playing.is_terminal());
    assert!(!GameStatus::Paused.is_terminal());
    assert!(GameStatus::GameOver.is_terminal());
    assert!(GameStatus::Victory.is_terminal());
}

#[test]
fn new_player_is_small_and_vulnerable() {
    let p = Player::new(50.0, 400.0);
    assert_eq!(p.power_level, POWER_SMALL);
    assert_eq!(p.health, 1);
    assert_eq!((p.width, p.height), (32.0, 32.0));
    assert!(!p.is_invincible);
    assert!(!p.can_double_jump);
    assert!(!p.can_shoot_fire);
    assert_eq!(p.direction, 1);
}

#[test]
fn enemy_names_follow_kind() {
    assert_eq!(level::goomba(0.0, 0.0, 1.0).name(), "goomba");
    assert_eq!(level::fly(0.0, 0.0, 1.0, 10.0, 0.0).name(), "fly");
    let boss = level::boss(0.0, 0.0);
    assert_eq!(boss.name(), "boss");
    assert!(boss.is_boss());
    assert_eq!(boss.health, 3);
    assert_eq!(boss.rect().width, 48.0);
}

#[test]
fn collectible_hit_boxes_ignore_bob() {
    let mut coin = Coin::new(100.0, 200.0, 0.0);
    coin.bob_offset = 7.5;
    assert_eq!(coin.rect(), Rect::new(100.0, 200.0, 24.0, 24.0));

    let mut power_up = PowerUp::new(10.0, 20.0, PowerUpKind::Fire);
    power_up.bob_offset = -3.0;
    assert_eq!(power_up.rect(), Rect::new(10.0, 20.0, 32.0, 32.0));
}

#[test]
fn particle_alpha_fades_with_life() {
    let mut p = Particle {
        x: 0.0,
        y: 0.0,
        vx: 0.0,
        vy: 0.0,
        color: ParticleColor::Gold,
        life: 30,
        max_life: 30,
    };
    assert_eq!(p.alpha(), 1.0);
    p.life = 15;
    assert_eq!(p.alpha(), 0.5);
    p.max_life = 0;
    assert_eq!(p.alpha(), 0.0);
}

#[test]
fn add_score_raises_score_changed() {
    let mut s = init_state(960.0, 576.0);
    s.add_score(250);
    assert_eq!(s.score, 250);
    assert_eq!(
        s.events,
        vec![GameEvent::ScoreChanged {
            score: 250,
            coins: 0,
            lives: 3,
            time: 300.0
        }]
    );
}

#[test]
fn sounds_filters_cues_from_events() {
    let mut s = init_state(960.0, 576.0);
    s.play(SoundCue::JUMP);
    s.emit(GameEvent::HidePanel);
    s.play(SoundCue::STOMP);
    let cues: Vec<SoundCue> = s.sounds().copied().collect();
    assert_eq!(cues, vec![SoundCue::JUMP, SoundCue::STOMP]);
}

#[test]
fn game_session_clone_is_independent() {
    let original = init_state(960.0, 576.0);
    let mut cloned = original.clone();

    cloned.player.x = 999.0;
    cloned.enemies.clear();
    cloned.coins[0].collected = true;
    cloned.score = 1234;

    assert_eq!(original.player.x, 50.0);
    assert_eq!(original.enemies.len(), 7);
    assert!(!original.coins[0].collected);
    assert_eq!(original.score, 0);
}
