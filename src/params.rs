/*
 * Show Parameters Module
 *
 * This module defines the ShowParams struct that contains all the adjustable
 * parameters for the firework show. They are read from an optional config
 * file at startup and can be modified through the UI afterwards. It also
 * provides change detection so the app knows when the show must be rebuilt.
 */

use nannou::prelude::*;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

// Parameters for the show that can be adjusted via config file and UI
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ShowParams {
    pub firework_count: usize,
    pub particles_per_firework: usize,
    pub particle_mass: f32,
    pub launch_speed: f32,
    pub gravity: [f32; 3],
    // Each firework lives for min_life plus a random share of life_spread
    pub min_life: f32,
    pub life_spread: f32,
    // Multiplier applied to the frame time before ticking
    pub time_scale: f32,
    pub particle_size: f32,
    pub seed: Option<u64>,
    pub enable_parallel: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    #[serde(skip)]
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    firework_count: usize,
    particles_per_firework: usize,
    particle_mass: f32,
    launch_speed: f32,
    gravity: [f32; 3],
    min_life: f32,
    life_spread: f32,
    time_scale: f32,
    particle_size: f32,
    enable_parallel: bool,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for ShowParams {
    fn default() -> Self {
        Self {
            firework_count: 3,
            particles_per_firework: 500,
            particle_mass: 0.5,
            launch_speed: 70.0,
            gravity: [0.0, -9.8, 0.0],
            min_life: 12.0,
            life_spread: 2.0,
            time_scale: 3.0,
            particle_size: 3.0,
            seed: None,
            enable_parallel: true,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl ShowParams {
    pub fn gravity(&self) -> Vec3 {
        Vec3::from(self.gravity)
    }

    /// Reject values the simulation cannot run with.
    ///
    /// The simulation divides by the particle mass, so it must be positive.
    pub fn validate(&self) -> Result<()> {
        if self.firework_count == 0 {
            return Err(ConfigError::invalid("firework_count", "must be at least 1"));
        }
        if self.particles_per_firework == 0 {
            return Err(ConfigError::invalid("particles_per_firework", "must be at least 1"));
        }
        if !(self.particle_mass > 0.0) {
            return Err(ConfigError::invalid("particle_mass", "must be greater than 0"));
        }
        if !(self.min_life > 0.0) {
            return Err(ConfigError::invalid("min_life", "must be greater than 0"));
        }
        if !(self.life_spread >= 0.0) {
            return Err(ConfigError::invalid("life_spread", "must not be negative"));
        }
        if !(self.time_scale >= 0.0) {
            return Err(ConfigError::invalid("time_scale", "must not be negative"));
        }
        if !self.launch_speed.is_finite() || self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(ConfigError::invalid("launch_speed/gravity", "must be finite"));
        }
        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            firework_count: self.firework_count,
            particles_per_firework: self.particles_per_firework,
            particle_mass: self.particle_mass,
            launch_speed: self.launch_speed,
            gravity: self.gravity,
            min_life: self.min_life,
            life_spread: self.life_spread,
            time_scale: self.time_scale,
            particle_size: self.particle_size,
            enable_parallel: self.enable_parallel,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (should_rebuild_show, launch_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool, bool) {
        let prev = match &self.previous_values {
            Some(prev) => prev,
            None => return (false, false, false),
        };

        // Fireworks are fixed-size, so these only take effect on a rebuild
        let launch_changed = self.firework_count != prev.firework_count
            || self.particles_per_firework != prev.particles_per_firework
            || self.particle_mass != prev.particle_mass
            || self.launch_speed != prev.launch_speed
            || self.gravity != prev.gravity
            || self.min_life != prev.min_life
            || self.life_spread != prev.life_spread;

        let ui_changed = launch_changed || self.snapshot() != *prev;

        // The first element (should_rebuild_show) will be set by the UI when the reset button is clicked
        (false, launch_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_firework_count_range() -> std::ops::RangeInclusive<usize> {
        1..=12
    }

    pub fn get_particle_count_range() -> std::ops::RangeInclusive<usize> {
        10..=5000
    }

    pub fn get_mass_range() -> std::ops::RangeInclusive<f32> {
        0.1..=5.0
    }

    pub fn get_launch_speed_range() -> std::ops::RangeInclusive<f32> {
        20.0..=150.0
    }

    pub fn get_gravity_range() -> std::ops::RangeInclusive<f32> {
        -30.0..=0.0
    }

    pub fn get_life_range() -> std::ops::RangeInclusive<f32> {
        1.0..=30.0
    }

    pub fn get_time_scale_range() -> std::ops::RangeInclusive<f32> {
        0.0..=10.0
    }

    pub fn get_particle_size_range() -> std::ops::RangeInclusive<f32> {
        1.0..=10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = ShowParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.gravity(), vec3(0.0, -9.8, 0.0));
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let params = ShowParams {
            particle_mass: 0.0,
            ..ShowParams::default()
        };

        match params.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "particle_mass"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn nan_values_are_rejected() {
        let params = ShowParams {
            time_scale: f32::NAN,
            ..ShowParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn no_snapshot_means_no_changes() {
        let params = ShowParams::default();
        assert_eq!(params.detect_changes(), (false, false, false));
    }

    #[test]
    fn launch_parameters_request_a_rebuild() {
        let mut params = ShowParams::default();
        params.take_snapshot();
        params.particles_per_firework = 50;

        assert_eq!(params.detect_changes(), (false, true, true));
    }

    #[test]
    fn display_parameters_only_mark_the_ui() {
        let mut params = ShowParams::default();
        params.take_snapshot();
        params.time_scale = 1.0;
        params.show_debug = true;

        assert_eq!(params.detect_changes(), (false, false, true));
    }
}
