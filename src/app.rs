/*
 * Application Module
 *
 * This module defines the main application model and logic for the firework
 * show. It handles the initialization, update, and rendering of the show.
 * The host loop measures the frame time, scales it, and ticks every
 * firework once per frame with a freshly drawn launch site.
 */

use log::{info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::ShowParams;
use crate::renderer;
use crate::show::Show;
use crate::ui;

// Main model for the application
pub struct Model {
    pub show: Show,
    pub params: ShowParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = config::startup_params();

    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    let window_id = app
        .new_window()
        .title("Fireworks")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .key_pressed(input::key_pressed)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let show = Show::new(&params, window.rect());

    Model {
        show,
        params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Replace every firework with a fresh one built from the current parameters
pub fn rebuild_show(model: &mut Model, bounds: Rect) {
    info!("relaunching show");
    model.show = Show::new(&model.params, bounds);
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let (should_rebuild_show, launch_changed, _ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    // Slider drags can push values the simulation cannot run with
    let launch_valid = match model.params.validate() {
        Ok(()) => true,
        Err(err) => {
            if launch_changed {
                warn!("{}; keeping the current show", err);
            }
            false
        }
    };

    if launch_valid && (should_rebuild_show || launch_changed) {
        rebuild_show(model, app.window_rect());
    }

    if model.params.pause_simulation {
        model.debug_info.sim_dt = 0.0;
        return;
    }

    // The host's frame time is passed on unclamped
    let dt = update.since_last.as_secs_f32() * model.params.time_scale;
    model.show.step(dt, model.params.enable_parallel);

    model.debug_info.sim_dt = dt;
    model.debug_info.record_show(&model.show);
}

// Draw the state of the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    renderer::draw_background(&draw);
    renderer::draw_show(&draw, &model.show, model.params.particle_size);

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), model.show.len());
    }

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}
