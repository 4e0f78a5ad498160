//! Drifting-dot simulation behind the hero banner.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random(bounds: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
                (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            ),
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
        }
    }

    /// Canvas fill style in the accent color at this particle's opacity.
    pub fn fill_style(&self) -> String {
        let [r, g, b] = PARTICLE_RGB;
        format!("rgba({}, {}, {}, {})", r, g, b, self.opacity)
    }
}

/// Crossing one edge re-enters at the opposite edge.
#[inline]
fn wrap(v: f32, bound: f32) -> f32 {
    if v < 0.0 {
        bound
    } else if v > bound {
        0.0
    } else {
        v
    }
}

/// Fixed set of particles living inside `[0, bounds]`.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub fn new(count: usize, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let bounds = bounds.max(Vec2::ZERO);
        let particles = (0..count).map(|_| Particle::random(bounds, &mut *rng)).collect();
        Self { particles, bounds }
    }

    pub fn from_particles(particles: Vec<Particle>, bounds: Vec2) -> Self {
        Self {
            particles,
            bounds: bounds.max(Vec2::ZERO),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Follow the canvas size. Particles outside the new bounds wrap on the
    /// next step.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds.max(Vec2::ZERO);
    }

    /// Remove every particle; later steps and resizes keep the field empty.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            let next = p.position + p.velocity;
            p.position = Vec2::new(wrap(next.x, bounds.x), wrap(next.y, bounds.y));
        }
    }
}

/// Narrow viewports skip the animation to save battery.
pub fn wants_particles(viewport_width: f64) -> bool {
    viewport_width > PARTICLE_MIN_VIEWPORT_WIDTH
}
