/*
 * Renderer Module
 *
 * This module draws the simulation: every agent as a small hexagon rotated
 * to its heading, colored either by species or by its neighborhood class.
 * Drawing is skipped while nothing changed, e.g. when paused.
 */

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::agent::Agent;
use crate::app::{ColorMode, Model};
use crate::census::NeighborhoodClass;
use crate::ui;

fn to_color(color: [u8; 4]) -> Rgba {
    rgba(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        color[3] as f32 / 255.0,
    )
}

// Unit hexagon, scaled per frame by draw size and zoom
fn hexagon(radius: f32) -> [Point2; 6] {
    let mut points = [Point2::ZERO; 6];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = i as f32 * TAU / 6.0;
        *point = pt2(angle.cos() * radius, angle.sin() * radius);
    }
    points
}

fn agent_color(model: &Model, agent: &Agent, mode: ColorMode) -> Rgba {
    match mode {
        ColorMode::Density => to_color(NeighborhoodClass::of(agent).color()),
        ColorMode::Species => to_color(model.simulation.species()[agent.species].color),
    }
}

pub fn view(app: &App, model: &Model, frame: Frame) {
    if !model.render_needed.get() {
        model.egui.draw_to_frame(&frame).unwrap();
        return;
    }

    let draw = app.draw();
    let light = model.params.light_scheme;
    draw.background().color(if light { WHITE } else { BLACK });

    let window_rect = app.window_rect();
    let camera = &model.camera;

    // Domain boundary
    let corner_a = camera.world_to_screen(vec2(0.0, 0.0), window_rect);
    let corner_b = camera.world_to_screen(
        vec2(model.simulation.width(), model.simulation.height()),
        window_rect,
    );
    let domain = Rect::from_corners(corner_a, corner_b);
    draw.rect()
        .xy(domain.xy())
        .wh(domain.wh())
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(0.3, 0.3, 0.3, 1.0));

    let mode = match &model.capturing {
        Some(shot) => shot.mode,
        None if model.params.use_density_colors => ColorMode::Density,
        None => ColorMode::Species,
    };

    let points = hexagon(model.params.draw_size * camera.zoom);
    for agent in model.simulation.agents() {
        let screen = camera.world_to_screen(vec2(agent.position.x, agent.position.y), window_rect);
        if !window_rect.contains(screen) {
            continue;
        }

        draw.polygon()
            .color(agent_color(model, agent, mode))
            .points(points.iter().cloned())
            .xy(screen)
            .rotate(agent.display_angle().to_radians());
    }

    // Captured frames show the simulation only
    if model.params.show_debug && model.capturing.is_none() {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, &model.simulation);
    }

    draw.to_frame(app, &frame).unwrap();

    if model.params.pause_simulation && model.capturing.is_none() {
        model.render_needed.set(false);
    }

    if model.capturing.is_none() {
        model.egui.draw_to_frame(&frame).unwrap();
    }
}
