/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and show statistics to be displayed in the UI.
 */

use std::time::Duration;

use crate::show::Show;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    // Simulated seconds advanced in the last frame, after time scaling
    pub sim_dt: f32,
    pub exploded_fireworks: usize,
    pub visible_particles: usize,
    pub completed_cycles: u64,
}

impl DebugInfo {
    // Refresh the show statistics after a step
    pub fn record_show(&mut self, show: &Show) {
        self.exploded_fireworks = show.exploded_count();
        self.visible_particles = show.visible_particle_count();
        self.completed_cycles = show.total_cycles();
    }
}
