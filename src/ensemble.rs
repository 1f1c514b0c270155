/*
 * Ensemble Module
 *
 * This module defines the fixed-size particle buffer and the Simulate trait
 * that drives it. Every tick runs three phases in a fixed order:
 * 1. Reset: clear every particle's force accumulator
 * 2. Apply: the concrete simulation accumulates its forces
 * 3. Update: integrate, then any per-tick bookkeeping of the simulation
 */

use nannou::prelude::*;

use crate::particle::Particle;

/// A contiguous, fixed-length collection of particles.
///
/// The length is chosen at construction and cannot change afterwards: the
/// buffer is only ever handed out as a slice.
#[derive(Clone, Debug)]
pub struct Ensemble {
    particles: Box<[Particle]>,
}

impl Ensemble {
    /// Create `count` identical particles.
    pub fn new(count: usize, mass: f32, position: Vec3, velocity: Vec3, life: f32) -> Self {
        let particles = (0..count)
            .map(|_| Particle::new(mass, position, velocity, life))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    // Zero every force accumulator
    pub fn reset_forces(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.reset_force();
        }
    }

    // Integrate every particle by dt
    pub fn integrate(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            particle.integrate(dt);
        }
    }
}

impl<'a> IntoIterator for &'a Ensemble {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A simulation over an [`Ensemble`].
///
/// Implementors supply [`apply_forces`](Simulate::apply_forces) and may extend
/// [`update_particles`](Simulate::update_particles). Callers advance the
/// simulation with [`tick`](Simulate::tick), once per frame.
pub trait Simulate {
    fn ensemble(&self) -> &Ensemble;

    fn ensemble_mut(&mut self) -> &mut Ensemble;

    /// Accumulate this tick's forces on the particles.
    fn apply_forces(&mut self);

    /// Integrate every particle by `dt`.
    ///
    /// `hint` is a host supplied position; the default ignores it.
    fn update_particles(&mut self, dt: f32, hint: Vec3) {
        let _ = hint;
        self.ensemble_mut().integrate(dt);
    }

    fn reset_forces(&mut self) {
        self.ensemble_mut().reset_forces();
    }

    /// Run one reset, apply, update sequence.
    fn tick(&mut self, dt: f32, hint: Vec3) {
        self.reset_forces();
        self.apply_forces();
        self.update_particles(dt, hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pushes every particle with the same constant force
    struct ConstantForce {
        ensemble: Ensemble,
        force: Vec3,
    }

    impl Simulate for ConstantForce {
        fn ensemble(&self) -> &Ensemble {
            &self.ensemble
        }

        fn ensemble_mut(&mut self) -> &mut Ensemble {
            &mut self.ensemble
        }

        fn apply_forces(&mut self) {
            for particle in self.ensemble.iter_mut() {
                particle.apply_force(self.force);
            }
        }
    }

    // Records the force seen by the update phase
    struct Recorder {
        ensemble: Ensemble,
        seen: Vec<Vec3>,
    }

    impl Simulate for Recorder {
        fn ensemble(&self) -> &Ensemble {
            &self.ensemble
        }

        fn ensemble_mut(&mut self) -> &mut Ensemble {
            &mut self.ensemble
        }

        fn apply_forces(&mut self) {
            for particle in self.ensemble.iter_mut() {
                particle.apply_force(vec3(1.0, 0.0, 0.0));
            }
        }

        fn update_particles(&mut self, _dt: f32, _hint: Vec3) {
            self.seen.push(self.ensemble.particles()[0].force);
        }
    }

    #[test]
    fn new_creates_identical_particles() {
        let ensemble = Ensemble::new(4, 0.5, vec3(1.0, 2.0, 3.0), vec3(0.0, 70.0, 0.0), 12.0);

        assert_eq!(ensemble.len(), 4);
        assert!(!ensemble.is_empty());
        for particle in &ensemble {
            assert_eq!(particle, &ensemble.particles()[0]);
            assert_eq!(particle.mass, 0.5);
            assert_eq!(particle.force, Vec3::ZERO);
        }
        assert!(ensemble.get(4).is_none());
    }

    #[test]
    fn tick_integrates_semi_implicitly() {
        let mut sim = ConstantForce {
            ensemble: Ensemble::new(1, 1.0, Vec3::ZERO, Vec3::ZERO, 1.0),
            force: vec3(0.0, -10.0, 0.0),
        };

        sim.tick(1.0, Vec3::ZERO);

        let particle = &sim.ensemble().particles()[0];
        assert_eq!(particle.velocity, vec3(0.0, -10.0, 0.0));
        assert_eq!(particle.position, vec3(0.0, -10.0, 0.0));
    }

    #[test]
    fn reset_forces_is_idempotent() {
        let mut sim = ConstantForce {
            ensemble: Ensemble::new(3, 1.0, Vec3::ZERO, Vec3::ZERO, 1.0),
            force: vec3(5.0, 5.0, 5.0),
        };
        sim.apply_forces();

        sim.reset_forces();
        assert!(sim.ensemble().iter().all(|p| p.force == Vec3::ZERO));
        sim.reset_forces();
        assert!(sim.ensemble().iter().all(|p| p.force == Vec3::ZERO));
    }

    #[test]
    fn tick_resets_forces_before_applying() {
        let mut sim = Recorder {
            ensemble: Ensemble::new(2, 1.0, Vec3::ZERO, Vec3::ZERO, 1.0),
            seen: Vec::new(),
        };

        sim.tick(0.1, Vec3::ZERO);
        sim.tick(0.1, Vec3::ZERO);

        // Without the reset phase the second tick would see a doubled force
        assert_eq!(sim.seen, vec![vec3(1.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn default_update_ignores_hint() {
        let mut sim = ConstantForce {
            ensemble: Ensemble::new(1, 1.0, Vec3::ZERO, vec3(1.0, 0.0, 0.0), 1.0),
            force: Vec3::ZERO,
        };

        sim.tick(1.0, vec3(100.0, 100.0, 100.0));

        assert_eq!(sim.ensemble().particles()[0].position, vec3(1.0, 0.0, 0.0));
    }
}
