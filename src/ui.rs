/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui: the control panel and the on-screen debug overlay.
 */

use nannou_egui::{egui, Egui};

use crate::census::NeighborhoodClass;
use crate::debug::DebugInfo;
use crate::params::ViewerParams;
use crate::simulation::Simulation;

// One-shot requests raised by buttons this frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiActions {
    pub step: bool,
    pub screenshot: bool,
    pub reset_camera: bool,
}

impl UiActions {
    pub fn any(&self) -> bool {
        self.step || self.screenshot || self.reset_camera
    }
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut ViewerParams,
    debug_info: &DebugInfo,
    simulation: &Simulation,
) -> UiActions {
    let mut actions = UiActions::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Run", |ui| {
                ui.checkbox(&mut params.pause_simulation, "Pause Simulation (Space)");
                // Only honored while paused
                if ui.button("Step (F)").clicked() {
                    actions.step = true;
                }
                ui.add(
                    egui::Slider::new(&mut params.steps_per_frame, ViewerParams::get_steps_per_frame_range())
                        .text("Steps per Frame"),
                );
                ui.label(format!("Generation: {}", simulation.generation()));
                ui.label(format!("Agents: {}", simulation.population().len()));
            });

            ui.collapsing("Display", |ui| {
                ui.checkbox(&mut params.use_density_colors, "Density Colors (C)");
                ui.checkbox(&mut params.light_scheme, "Light Scheme");
                ui.add(egui::Slider::new(&mut params.draw_size, ViewerParams::get_draw_size_range()).text("Draw Size"));
                if ui.button("Reset Camera").clicked() {
                    actions.reset_camera = true;
                }
                if ui.button("Screenshot (S)").clicked() {
                    actions.screenshot = true;
                }
            });

            ui.collapsing("Species", |ui| {
                for (i, species) in simulation.species().iter().enumerate() {
                    let p = species.params;
                    ui.label(format!(
                        "#{}: v={:.2} r={:.1} alpha={:.1} beta={:.1}",
                        i, p.speed, p.perception, p.alpha, p.beta
                    ));
                }
            });

            ui.collapsing("Performance", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!(
                    "Step time: {:.2} ms",
                    debug_info.mean_step_time().as_secs_f64() * 1000.0
                ));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    simulation: &Simulation,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;

    let mut debug_texts = vec![
        format!("FPS: {:.1}", debug_info.fps),
        format!("Generation: {}", simulation.generation()),
        format!("Agents: {}", simulation.population().len()),
        format!("Steps this frame: {}", debug_info.steps_last_frame),
    ];

    // Class shares over the current logging interval
    let census = simulation.census();
    for class in NeighborhoodClass::ALL {
        let total: u64 = (0..census.species_count()).map(|s| census.count(s, class)).sum();
        debug_texts.push(format!("{}: {}", class.color_name(), total));
    }

    let panel_height = line_height * debug_texts.len() as f32 + margin;
    draw.rect()
        .x_y(window_rect.right() - panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        draw.text(text)
            .x_y(text_x + 70.0, text_y - i as f32 * line_height)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
