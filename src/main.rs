/*
 * Firework Simulation
 *
 * Fireworks rise from the bottom of the window, explode into a fading spray
 * of colored sparks and relaunch from a new spot when their life runs out.
 *
 * An optional TOML file (first argument or FIREWORKS_CONFIG) sets the show
 * parameters; the in-window panel adjusts them while running. Logging is
 * configured through RUST_LOG.
 */

use fireworks::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model).update(app::update).run();
}
