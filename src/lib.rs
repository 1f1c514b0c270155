/*
 * Firework Simulation - Module Definitions
 *
 * This file defines the module structure for the firework simulation.
 * The simulation core (particle, ensemble, firework) has no knowledge of the
 * window; the remaining modules form the nannou front end that drives it.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use ensemble::{Ensemble, Simulate};
pub use error::{ConfigError, Result};
pub use firework::{Firework, Launch, Phase};
pub use params::ShowParams;
pub use particle::Particle;
pub use show::Show;

// Define modules
pub mod app;
pub mod config;
pub mod debug;
pub mod ensemble;
pub mod error;
pub mod firework;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod show;
pub mod ui;
