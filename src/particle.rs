/*
 * Particle Module
 *
 * This module defines the Particle struct: a single point mass with a force
 * accumulator, a color and a fade rate. A particle knows nothing about its
 * siblings; the owning ensemble decides which forces act on it.
 */

use nannou::prelude::*;

/// A single point mass.
///
/// `mass` must be strictly positive. The particle divides by it during
/// integration and does not guard against zero or negative values.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub mass: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub force: Vec3,
    pub color: Vec4,
    // Alpha lost per second once the owner starts fading
    pub fade_rate: f32,
    // Seconds, informational only
    pub life: f32,
}

impl Particle {
    pub fn new(mass: f32, position: Vec3, velocity: Vec3, life: f32) -> Self {
        Self {
            mass,
            position,
            velocity,
            force: Vec3::ZERO,
            color: Vec4::ZERO,
            fade_rate: 0.0,
            life,
        }
    }

    // Clear the force accumulator
    pub fn reset_force(&mut self) {
        self.force = Vec3::ZERO;
    }

    // Add a force to the accumulator
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Advance the particle by `dt` seconds with a semi-implicit Euler step.
    ///
    /// The velocity is updated first and the position moves with the new
    /// velocity.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.force / self.mass * dt;
        self.position += self.velocity * dt;
    }

    // Lower alpha by the fade rate, never going below zero
    pub fn fade(&mut self, dt: f32) {
        self.color.w = (self.color.w - self.fade_rate * dt).max(0.0);
    }

    pub fn alpha(&self) -> f32 {
        self.color.w
    }
}
