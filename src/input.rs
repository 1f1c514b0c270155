/*
 * Input Module
 *
 * This module handles keyboard and raw window events.
 * - Space pauses and resumes the simulation
 * - R relaunches the show
 * - D toggles the debug overlay
 * Escape quits, which nannou handles on its own.
 */

use nannou::prelude::*;

use crate::app::{rebuild_show, Model};

pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    // Keys typed into the UI belong to the UI
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => model.params.pause_simulation = !model.params.pause_simulation,
        Key::R => rebuild_show(model, app.window_rect()),
        Key::D => model.params.show_debug = !model.params.show_debug,
        _ => {}
    }
}

// Keep launch sites inside the window when it is resized
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.show.set_bounds(Rect::from_wh(size));
}

// Pass raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
