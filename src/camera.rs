/*
 * Camera Module
 *
 * This module defines the Camera struct that handles zooming and panning
 * in the viewer. It provides coordinate transformations between simulation
 * space ([0, width) x [0, height)) and screen space. Zoom is measured in
 * pixels per simulation unit.
 */

use nannou::prelude::*;

pub struct Camera {
    // Simulation point shown at the center of the window
    pub position: Vec2,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

impl Camera {
    // Camera showing the whole domain inside a window of the given size
    pub fn fit(world_width: f32, world_height: f32, window_width: f32, window_height: f32) -> Self {
        let zoom = f32::min(window_width / world_width, window_height / world_height);
        Self {
            position: vec2(world_width / 2.0, world_height / 2.0),
            zoom,
            min_zoom: zoom * 0.25,
            max_zoom: zoom * 20.0,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        (point - self.position) * self.zoom + window_rect.xy()
    }

    // Convert a point from screen space to world space
    pub fn screen_to_world(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        (point - window_rect.xy()) / self.zoom + self.position
    }

    // Handle mouse wheel events for zooming, keeping the point under the
    // cursor fixed
    pub fn zoom(&mut self, scroll_delta: Vec2, cursor_position: Vec2, window_rect: Rect) {
        let zoom_factor = 1.0 + scroll_delta.y * 0.1;

        let cursor_world_before = self.screen_to_world(cursor_position, window_rect);
        self.zoom = (self.zoom * zoom_factor).clamp(self.min_zoom, self.max_zoom);
        let cursor_world_after = self.screen_to_world(cursor_position, window_rect);

        self.position += cursor_world_before - cursor_world_after;
    }

    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Update camera position while dragging
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;
            if delta.length_squared() > 0.0 {
                self.position -= delta / self.zoom;
                self.last_cursor_pos = position;
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }
}
