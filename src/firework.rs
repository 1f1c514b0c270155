/*
 * Firework Module
 *
 * This module defines the Firework simulation: an ensemble of particles that
 * cycles through a fixed lifecycle forever.
 * 1. Ascending: every particle rises together under gravity
 * 2. Exploded: the particles spray outward and fade, gravity switched off
 * 3. Respawn: when the firework's life runs out it relaunches from the
 *    position the host supplies on that tick
 */

use log::trace;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ensemble::{Ensemble, Simulate};
use crate::particle::Particle;

// The firework explodes once particle 0 rises slower than this
pub const EXPLOSION_SPEED: f32 = 10.0;
// Speed of every particle right after the explosion
pub const SPRAY_SPEED: f32 = 10.0;
pub const SPRAY_RADIUS: f32 = 30.0;
// Respawn once the remaining life drops below this many seconds
pub const RESPAWN_THRESHOLD: f32 = 0.01;
// Alpha lost per second, one is picked per particle
pub const FADE_RATES: [f32; 2] = [50.0 / 255.0, 40.0 / 255.0];

/// Where a firework is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ascending,
    Exploded,
}

/// Launch parameters shared by every particle of a firework.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    pub particle_count: usize,
    // Must be > 0
    pub mass: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub gravity: Vec3,
    // Seconds between respawns
    pub life: f32,
}

impl Default for Launch {
    fn default() -> Self {
        Self {
            particle_count: 500,
            mass: 0.5,
            position: Vec3::ZERO,
            velocity: vec3(0.0, 70.0, 0.0),
            gravity: vec3(0.0, -9.8, 0.0),
            life: 13.0,
        }
    }
}

/// A firework built on top of an [`Ensemble`].
///
/// The random generator is owned by the firework so that explosion
/// directions, colors and fade rates can be reproduced from a seed.
#[derive(Clone, Debug)]
pub struct Firework<R = StdRng> {
    particles: Ensemble,
    gravity: Vec3,
    configured_gravity: Vec3,
    remaining_life: f32,
    initial_velocity: Vec3,
    initial_life: f32,
    phase: Phase,
    cycles: u64,
    rng: R,
}

impl Firework<StdRng> {
    pub fn new(launch: Launch) -> Self {
        Self::with_rng(launch, StdRng::from_entropy())
    }

    pub fn seeded(launch: Launch, seed: u64) -> Self {
        Self::with_rng(launch, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Firework<R> {
    /// Create a firework that draws all its randomness from `rng`.
    ///
    /// Every particle starts at `launch.position` with `launch.velocity`, a
    /// shared random color and its own fade rate.
    pub fn with_rng(launch: Launch, mut rng: R) -> Self {
        let mut particles = Ensemble::new(
            launch.particle_count,
            launch.mass,
            launch.position,
            launch.velocity,
            launch.life,
        );

        let color = random_color(&mut rng);
        for particle in particles.iter_mut() {
            particle.color = color;
            particle.fade_rate = random_fade_rate(&mut rng);
        }

        Self {
            particles,
            gravity: launch.gravity,
            configured_gravity: launch.gravity,
            remaining_life: launch.life,
            initial_velocity: launch.velocity,
            initial_life: launch.life,
            phase: Phase::Ascending,
            cycles: 0,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    /// The particles the host should draw this frame.
    ///
    /// While ascending the whole firework moves as one point, so only the
    /// first particle is returned.
    pub fn visible_particles(&self) -> &[Particle] {
        let particles = self.particles.particles();
        match self.phase {
            Phase::Exploded => particles,
            Phase::Ascending => &particles[..particles.len().min(1)],
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn exploded(&self) -> bool {
        self.phase == Phase::Exploded
    }

    pub fn remaining_life(&self) -> f32 {
        self.remaining_life
    }

    // Gravity currently acting on the particles (zero while exploded)
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn configured_gravity(&self) -> Vec3 {
        self.configured_gravity
    }

    pub fn initial_velocity(&self) -> Vec3 {
        self.initial_velocity
    }

    pub fn initial_life(&self) -> f32 {
        self.initial_life
    }

    // Number of completed respawns
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // Only particle 0 is sampled, the whole firework is assumed to move with it
    fn should_explode(&self) -> bool {
        self.phase == Phase::Ascending
            && self
                .particles
                .get(0)
                .map_or(false, |particle| particle.velocity.y < EXPLOSION_SPEED)
    }

    fn explode(&mut self) {
        self.gravity = Vec3::ZERO;
        for particle in self.particles.iter_mut() {
            particle.velocity = Vec3::ZERO;
            particle.velocity += spray_velocity(&mut self.rng);
        }
        self.phase = Phase::Exploded;
        trace!("firework exploded, {:.2}s of life left", self.remaining_life);
    }

    fn respawn(&mut self, position: Vec3) {
        let color = random_color(&mut self.rng);
        for particle in self.particles.iter_mut() {
            particle.velocity = self.initial_velocity;
            particle.position = position;
            particle.color = color;
            particle.fade_rate = random_fade_rate(&mut self.rng);
            particle.life = self.initial_life;
        }
        self.gravity = self.configured_gravity;
        self.remaining_life = self.initial_life;
        self.phase = Phase::Ascending;
        self.cycles += 1;
        trace!("firework respawned at {:?} (cycle {})", position, self.cycles);
    }
}

impl<R: Rng> Simulate for Firework<R> {
    fn ensemble(&self) -> &Ensemble {
        &self.particles
    }

    fn ensemble_mut(&mut self) -> &mut Ensemble {
        &mut self.particles
    }

    // Gravity is a per-unit-mass vector, so each particle feels gravity * mass
    fn apply_forces(&mut self) {
        let gravity = self.gravity;
        for particle in self.particles.iter_mut() {
            particle.apply_force(gravity * particle.mass);
        }

        if self.should_explode() {
            self.explode();
        }
    }

    fn update_particles(&mut self, dt: f32, hint: Vec3) {
        self.particles.integrate(dt);
        self.remaining_life -= dt;

        if self.phase == Phase::Exploded {
            for particle in self.particles.iter_mut() {
                particle.fade(dt);
            }
        }

        if self.remaining_life < RESPAWN_THRESHOLD {
            self.respawn(hint);
        }
    }
}

/// Sample the outward velocity a particle gets when its firework explodes.
///
/// The direction comes from a radius and two angles drawn uniformly; it is
/// not uniform over the sphere. The radius in `[0, 30)` and both angles in
/// `[0, 360)` degrees are continuous, not whole numbers. A zero radius yields
/// a zero velocity.
pub fn spray_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let radius = rng.gen_range(0.0..SPRAY_RADIUS);
    let angle1 = rng.gen_range(0.0..360.0_f32).to_radians();
    let angle2 = rng.gen_range(0.0..360.0_f32).to_radians();

    let direction = vec3(
        radius * angle2.cos() * angle1.cos(),
        radius * angle2.cos() * angle1.sin(),
        radius * angle2.sin(),
    );

    direction.normalize_or_zero() * SPRAY_SPEED
}

// Opaque color with each channel drawn from 0..=255
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Vec4 {
    let mut channel = || <f32 as From<u8>>::from(rng.gen_range(0..=255_u8)) / 255.0;
    vec4(channel(), channel(), channel(), 1.0)
}

pub fn random_fade_rate<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.gen_bool(0.5) {
        FADE_RATES[0]
    } else {
        FADE_RATES[1]
    }
}
