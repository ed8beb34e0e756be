/*
 * Input Module
 *
 * This module handles user input events for the viewer.
 *
 * Features:
 * - Space pauses, F steps while paused, C toggles density colors,
 *   S takes a screenshot pair
 * - Holding the left mouse button inserts agents under the cursor
 * - Right mouse drag pans, the mouse wheel zooms
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::{queue_screenshots, Model};

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => model.params.pause_simulation = !model.params.pause_simulation,
        // Two generations so the step is visible with alpha = 180, where
        // agents flip back and forth every other generation
        Key::F if model.params.pause_simulation => model.pending_steps += 2,
        Key::C => model.params.use_density_colors = !model.params.use_density_colors,
        Key::S => queue_screenshots(model),
        _ => return,
    }
    model.render_needed.set(true);
}

pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let new_pos = Vec2::new(pos.x, pos.y);

    if model.camera.is_dragging {
        model.camera.drag(new_pos);
        model.render_needed.set(true);
    }

    model.mouse_position = new_pos;
}

pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    // Clicks on the UI never reach the simulation
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    match button {
        MouseButton::Left => model.inserting = true,
        MouseButton::Right => model.camera.start_drag(model.mouse_position),
        _ => {}
    }
}

pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    match button {
        MouseButton::Left => model.inserting = false,
        MouseButton::Right => model.camera.end_drag(),
        _ => {}
    }
}

pub fn mouse_wheel(app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    let window_rect = app.window_rect();
    match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            model.camera.zoom(vec2(x, y), model.mouse_position, window_rect);
        }
        MouseScrollDelta::PixelDelta(pos) => {
            model.camera.zoom(vec2(pos.x as f32, pos.y as f32) * 0.01, model.mouse_position, window_rect);
        }
    }
    model.render_needed.set(true);
}

// Forward raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);

    if let nannou::winit::event::WindowEvent::MouseInput { .. } = event {
        model.render_needed.set(true);
    }
}
