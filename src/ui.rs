/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting the show parameters
 * and an on-screen overlay with debug information.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::ShowParams;

// Update the UI and return whether the show should be rebuilt, launch parameters changed, and if any UI changes occurred
pub fn update_ui(
    egui: &mut Egui,
    params: &mut ShowParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_rebuild_show = false;

    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Show Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Launch", |ui| {
                ui.add(egui::Slider::new(&mut params.firework_count, ShowParams::get_firework_count_range()).text("Fireworks"));
                ui.add(egui::Slider::new(&mut params.particles_per_firework, ShowParams::get_particle_count_range()).text("Particles per Firework"));
                ui.add(egui::Slider::new(&mut params.particle_mass, ShowParams::get_mass_range()).text("Particle Mass"));
                ui.add(egui::Slider::new(&mut params.launch_speed, ShowParams::get_launch_speed_range()).text("Launch Speed"));
                ui.add(egui::Slider::new(&mut params.gravity[1], ShowParams::get_gravity_range()).text("Gravity"));
                ui.add(egui::Slider::new(&mut params.min_life, ShowParams::get_life_range()).text("Minimum Life"));

                if ui.button("Relaunch Show").clicked() {
                    should_rebuild_show = true;
                }
            });

            ui.collapsing("Display", |ui| {
                ui.add(egui::Slider::new(&mut params.time_scale, ShowParams::get_time_scale_range()).text("Time Scale"));
                ui.add(egui::Slider::new(&mut params.particle_size, ShowParams::get_particle_size_range()).text("Particle Size"));
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut params.enable_parallel, "Tick Fireworks in Parallel");

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Visible Particles: {}", debug_info.visible_particles));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    let (_, launch_changed, ui_changed) = params.detect_changes();

    (should_rebuild_show, launch_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    firework_count: usize,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Sim step: {:.4} s", debug_info.sim_dt),
        format!("Exploded: {}/{}", debug_info.exploded_fireworks, firework_count),
        format!("Visible Particles: {}", debug_info.visible_particles),
        format!("Relaunches: {}", debug_info.completed_cycles),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
