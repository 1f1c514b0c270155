/*
 * Renderer Module
 *
 * This module draws the show. Ascending fireworks are drawn as a single point
 * and exploded ones as their full spray. Colors are blended additively, so
 * overlapping sparks brighten each other.
 */

use nannou::prelude::*;
use nannou::wgpu;

use crate::firework::Firework;
use crate::particle::Particle;
use crate::show::Show;

pub const BACKGROUND: (f32, f32, f32) = (0.1, 0.1, 0.1);

// Source over destination, added: the sparks glow where they overlap
pub const BLEND_ADD: wgpu::BlendComponent = wgpu::BlendComponent {
    src_factor: wgpu::BlendFactor::SrcAlpha,
    dst_factor: wgpu::BlendFactor::One,
    operation: wgpu::BlendOperation::Add,
};

pub fn draw_background(draw: &Draw) {
    let (r, g, b) = BACKGROUND;
    draw.background().color(rgb(r, g, b));
}

pub fn draw_show(draw: &Draw, show: &Show, particle_size: f32) {
    let draw = draw.color_blend(BLEND_ADD);

    for firework in &show.fireworks {
        draw_firework(&draw, firework, particle_size);
    }
}

pub fn draw_firework(draw: &Draw, firework: &Firework, particle_size: f32) {
    for particle in firework.visible_particles() {
        draw_particle(draw, particle, particle_size);
    }
}

fn draw_particle(draw: &Draw, particle: &Particle, particle_size: f32) {
    // Fully faded sparks stay alive until respawn but contribute nothing
    if particle.alpha() <= 0.0 {
        return;
    }

    let color = particle.color;
    draw.ellipse()
        .xy(particle.position.truncate())
        .radius(particle_size)
        .color(rgba(color.x, color.y, color.z, color.w));
}
