//! The one hand-authored level.
//!
//! Everything here is rebuilt from scratch on every restart; nothing in the
//! layout is ever mutated except through the session that owns the copies.

use std::f32::consts::PI;

use crate::entities::*;

fn platform(x: f32, y: f32, width: f32, height: f32, kind: PlatformKind) -> Platform {
    Platform {
        x,
        y,
        width,
        height,
        kind,
    }
}

pub fn create_platforms() -> Vec<Platform> {
    use PlatformKind::*;
    vec![
        // Starting area
        platform(0.0, 500.0, 300.0, 76.0, Ground),
        platform(400.0, 450.0, 128.0, 32.0, Platform),
        platform(600.0, 400.0, 96.0, 32.0, Platform),
        // Gaps
        platform(800.0, 500.0, 200.0, 76.0, Ground),
        platform(1100.0, 400.0, 128.0, 32.0, Platform),
        platform(1300.0, 350.0, 96.0, 32.0, Platform),
        platform(1500.0, 300.0, 128.0, 32.0, Platform),
        // Underground
        platform(1700.0, 500.0, 400.0, 76.0, Ground),
        platform(1800.0, 400.0, 64.0, 32.0, Platform),
        platform(1950.0, 350.0, 64.0, 32.0, Platform),
        // Castle
        platform(2200.0, 500.0, 600.0, 76.0, Ground),
        platform(2300.0, 400.0, 96.0, 32.0, Platform),
        platform(2500.0, 350.0, 128.0, 32.0, Platform),
        platform(2700.0, 300.0, 96.0, 32.0, Platform),
        // Goal
        platform(2900.0, 200.0, 200.0, 32.0, Victory),
    ]
}

pub fn goomba(x: f32, y: f32, vx: f32) -> Enemy {
    Enemy {
        x,
        y,
        width: 32.0,
        height: 32.0,
        vx,
        vy: 0.0,
        health: 1,
        max_health: 1,
        direction: if vx < 0.0 { -1 } else { 1 },
        kind: EnemyKind::Goomba,
    }
}

pub fn fly(x: f32, y: f32, vx: f32, hover_range: f32, hover_timer: f32) -> Enemy {
    Enemy {
        x,
        y,
        width: 32.0,
        height: 32.0,
        vx,
        vy: 0.0,
        health: 1,
        max_health: 1,
        direction: if vx < 0.0 { -1 } else { 1 },
        kind: EnemyKind::Fly {
            hover_y: y,
            hover_range,
            hover_timer,
        },
    }
}

pub fn boss(x: f32, y: f32) -> Enemy {
    Enemy {
        x,
        y,
        width: 48.0,
        height: 48.0,
        vx: 0.0,
        vy: 0.0,
        health: 3,
        max_health: 3,
        direction: 1,
        kind: EnemyKind::Boss { attack_timer: 0 },
    }
}

pub fn create_enemies() -> Vec<Enemy> {
    vec![
        goomba(450.0, 418.0, -1.0),
        goomba(650.0, 368.0, -1.0),
        goomba(850.0, 468.0, 1.0),
        goomba(1150.0, 368.0, -1.0),
        fly(1400.0, 200.0, -2.0, 50.0, 0.0),
        fly(1600.0, 150.0, 2.0, 40.0, PI),
        boss(2400.0, 368.0),
    ]
}

pub fn create_coins() -> Vec<Coin> {
    [
        // Trail over the first ledges
        (420.0, 400.0, 0.0),
        (450.0, 380.0, 0.5),
        (480.0, 400.0, 1.0),
        (620.0, 350.0, 0.0),
        (650.0, 330.0, 0.3),
        (680.0, 350.0, 0.6),
        (1120.0, 350.0, 0.0),
        (1150.0, 330.0, 0.2),
        (1180.0, 350.0, 0.4),
        (1320.0, 300.0, 0.0),
        (1520.0, 250.0, 0.1),
        (2320.0, 350.0, 0.0),
        (2520.0, 300.0, 0.3),
        (2720.0, 250.0, 0.6),
        // Goal ledge
        (2950.0, 150.0, 0.0),
        (2980.0, 130.0, 0.2),
        (3010.0, 150.0, 0.4),
    ]
    .into_iter()
    .map(|(x, y, bob)| Coin::new(x, y, bob))
    .collect()
}

pub fn create_power_ups() -> Vec<PowerUp> {
    vec![
        PowerUp::new(500.0, 400.0, PowerUpKind::Mushroom),
        PowerUp::new(1200.0, 350.0, PowerUpKind::Fire),
        PowerUp::new(1800.0, 450.0, PowerUpKind::Star),
        PowerUp::new(2600.0, 300.0, PowerUpKind::Life),
    ]
}
