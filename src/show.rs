/*
 * Show Module
 *
 * This module owns the set of fireworks displayed by the application and
 * advances them once per frame. Each firework launches from its own lane: the
 * launch area is split into equal vertical strips and a new launch site is
 * drawn inside a firework's strip every tick, so the next respawn lands
 * somewhere new.
 *
 * Fireworks never interact, so they can be ticked in parallel.
 */

use log::info;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::ensemble::Simulate;
use crate::firework::{Firework, Launch};
use crate::params::ShowParams;

// Launch height as a fraction of the launch area, measured from the bottom
pub const LAUNCH_HEIGHT_FRACTION: f32 = 0.25;

pub struct Show {
    pub fireworks: Vec<Firework>,
    bounds: Rect,
    rng: StdRng,
}

impl Show {
    /// Build a show from the parameters, launching inside `bounds`.
    pub fn new(params: &ShowParams, bounds: Rect) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let lanes = params.firework_count;
        let fireworks = (0..lanes)
            .map(|lane| {
                let launch = Launch {
                    particle_count: params.particles_per_firework,
                    mass: params.particle_mass,
                    position: launch_site(&mut rng, bounds, lane, lanes),
                    velocity: vec3(0.0, params.launch_speed, 0.0),
                    gravity: params.gravity(),
                    life: params.min_life + rng.gen::<f32>() * params.life_spread,
                };
                // Each firework gets its own generator so ticking order never matters
                Firework::with_rng(launch, StdRng::seed_from_u64(rng.gen()))
            })
            .collect::<Vec<_>>();

        info!(
            "built show with {} fireworks of {} particles",
            fireworks.len(),
            params.particles_per_firework
        );

        Self {
            fireworks,
            bounds,
            rng,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    // Launch sites are drawn from the new bounds starting with the next tick
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn len(&self) -> usize {
        self.fireworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }

    pub fn exploded_count(&self) -> usize {
        self.fireworks.iter().filter(|f| f.exploded()).count()
    }

    pub fn visible_particle_count(&self) -> usize {
        self.fireworks.iter().map(|f| f.visible_particles().len()).sum()
    }

    pub fn total_cycles(&self) -> u64 {
        self.fireworks.iter().map(|f| f.cycles()).sum()
    }

    /// Advance every firework by `dt` seconds.
    pub fn step(&mut self, dt: f32, parallel: bool) {
        let lanes = self.fireworks.len();
        let bounds = self.bounds;

        // Hints are drawn up front so the shared generator is used in lane order
        let mut hints = Vec::with_capacity(lanes);
        for lane in 0..lanes {
            hints.push(launch_site(&mut self.rng, bounds, lane, lanes));
        }

        if parallel {
            self.fireworks
                .par_iter_mut()
                .zip(hints.par_iter())
                .for_each(|(firework, &hint)| firework.tick(dt, hint));
        } else {
            for (firework, &hint) in self.fireworks.iter_mut().zip(hints.iter()) {
                firework.tick(dt, hint);
            }
        }
    }
}

/// Pick a launch site inside lane `lane` of `lanes` equal strips of `bounds`.
pub fn launch_site<R: Rng + ?Sized>(rng: &mut R, bounds: Rect, lane: usize, lanes: usize) -> Vec3 {
    let lane_width = bounds.w() / lanes.max(1) as f32;
    let offset = if lane_width > 0.0 {
        rng.gen_range(0.0..lane_width)
    } else {
        0.0
    };
    let x = bounds.left() + lane_width * lane as f32 + offset;
    let y = bounds.bottom() + bounds.h() * LAUNCH_HEIGHT_FRACTION;

    vec3(x, y, 0.0)
}
