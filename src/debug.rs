//! Optional inspection layered over the simulation.
//!
//! Nothing here feeds back into the game: inspectors only see the session
//! after each tick, and the overlay helpers only read it.

use rand::Rng;
use tracing::debug;

use crate::entities::{GameSession, Rect};
use crate::physics::overlaps;

/// Observer called by the frame loop after every tick.
pub trait TickInspector {
    fn inspect(&mut self, state: &GameSession);
}

/// Logs a random sample of the player's current overlaps so collision
/// behavior can be followed in the log without flooding it.
pub struct CollisionSampler<R: Rng> {
    rng: R,
    /// Probability that any single overlap is logged.
    rate: f64,
    pub logged: usize,
}

impl<R: Rng> CollisionSampler<R> {
    pub fn new(rng: R, rate: f64) -> Self {
        Self {
            rng,
            rate: rate.clamp(0.0, 1.0),
            logged: 0,
        }
    }
}

impl<R: Rng> TickInspector for CollisionSampler<R> {
    fn inspect(&mut self, state: &GameSession) {
        let player = state.player.rect();

        let touching = state
            .enemies
            .iter()
            .filter(|e| overlaps(&player, &e.rect()))
            .map(|e| (e.name(), e.rect()))
            .chain(
                state
                    .coins
                    .iter()
                    .filter(|c| !c.collected && overlaps(&player, &c.rect()))
                    .map(|c| ("coin", c.rect())),
            )
            .chain(
                state
                    .power_ups
                    .iter()
                    .filter(|p| !p.collected && overlaps(&player, &p.rect()))
                    .map(|p| ("power-up", p.rect())),
            );

        for (what, rect) in touching {
            if self.rng.gen_bool(self.rate) {
                self.logged += 1;
                debug!(frame = state.frame, ?player, with = what, ?rect, "collision detected");
            }
        }
    }
}

/// Text for the debug info panel.
pub fn debug_lines(state: &GameSession) -> Vec<String> {
    let p = &state.player;
    vec![
        format!("Player: {}, {}", p.x.round(), p.y.round()),
        format!("Velocity: {}, {}", p.vx.round(), p.vy.round()),
        format!("Grounded: {}", p.grounded),
        format!("Power Level: {}", p.power_level),
        format!("Coins: {}", state.coins_collected),
        format!("Score: {}", state.score),
        format!("Lives: {}", state.lives),
        format!("Time: {}", state.time.ceil()),
        format!("Enemies: {}", state.enemies.len()),
        format!("Particles: {}", state.particles.len()),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoxKind {
    Player,
    Coin,
    Enemy,
}

/// Hit boxes worth outlining: the player, uncollected coins, and enemies.
pub fn collision_boxes(state: &GameSession) -> Vec<(BoxKind, Rect)> {
    let mut boxes = vec![(BoxKind::Player, state.player.rect())];
    boxes.extend(
        state
            .coins
            .iter()
            .filter(|c| !c.collected)
            .map(|c| (BoxKind::Coin, c.rect())),
    );
    boxes.extend(state.enemies.iter().map(|e| (BoxKind::Enemy, e.rect())));
    boxes
}
