//! Short-lived visual debris.
//!
//! Particles have no effect on gameplay.  Spawning takes an injected RNG so
//! tests can seed it.

use rand::Rng;

use crate::constants::*;
use crate::entities::{Particle, ParticleColor};

/// Push `count` particles bursting out of `(x, y)`, biased slightly upward.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    color: ParticleColor,
    count: usize,
    rng: &mut impl Rng,
) {
    for _ in 0..count {
        particles.push(Particle {
            x,
            y,
            vx: (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
            vy: (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD - PARTICLE_LIFT,
            color,
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
        });
    }
}

/// Move, apply gravity, age, and drop particles whose life ran out.
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.x += p.vx;
        p.y += p.vy;
        p.vy += PARTICLE_GRAVITY;
        p.life = p.life.saturating_sub(1);
        p.life > 0
    });
}
