/*
 * Application Module
 *
 * This module defines the viewer's model and its update loop. The window,
 * egui panel and input handlers live here and in the ui, input and renderer
 * modules; the simulation itself is a plain Simulation driven from update().
 *
 * nannou builds the model through a plain function pointer, so launch()
 * prepares the simulation up front and hands it over through a static slot.
 */

use std::cell::Cell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::{error, info};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::camera::Camera;
use crate::config::Settings;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::ViewerParams;
use crate::point::Point2D;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui;

static PENDING: Mutex<Option<(Simulation, Settings)>> = Mutex::new(None);

// Which coloring a captured frame is drawn with
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMode {
    Species,
    Density,
}

#[derive(Clone, Debug)]
pub struct Screenshot {
    pub mode: ColorMode,
    pub path: PathBuf,
}

pub struct Model {
    pub simulation: Simulation,
    pub params: ViewerParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
    // Agents are inserted every frame while the left button is held
    pub inserting: bool,
    // Steps requested while paused (F key or the step button)
    pub pending_steps: u32,
    pub log_screenshot: bool,
    pub screenshots: VecDeque<Screenshot>,
    pub capturing: Option<Screenshot>,
    pub render_needed: Cell<bool>,
}

// Run the viewer until the window closes or the run reaches its last
// generation
pub fn launch(simulation: Simulation, settings: Settings) {
    if let Ok(mut slot) = PENDING.lock() {
        *slot = Some((simulation, settings));
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let (simulation, settings) = PENDING
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .expect("launch() must prepare the simulation before the app starts");

    let mut builder = app
        .new_window()
        .title("Primordial Particle System")
        .size(settings.window_width, settings.window_height)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .raw_event(input::raw_window_event);
    if settings.fullscreen {
        builder = builder.fullscreen();
    }
    let window_id = builder.build().unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let window_rect = window.rect();
    let camera = Camera::fit(simulation.width(), simulation.height(), window_rect.w(), window_rect.h());

    info!("viewer opened at {}x{}", window_rect.w(), window_rect.h());

    Model {
        simulation,
        params: ViewerParams::new(settings.draw_size, settings.light_scheme),
        egui,
        debug_info: DebugInfo::default(),
        camera,
        mouse_position: Vec2::ZERO,
        inserting: false,
        pending_steps: 0,
        log_screenshot: settings.log_screenshot,
        screenshots: VecDeque::new(),
        capturing: None,
        render_needed: Cell::new(true),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let actions = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info, &model.simulation);
    if actions.step {
        model.pending_steps += 1;
    }
    if actions.screenshot {
        queue_screenshots(model);
    }
    if actions.reset_camera {
        let rect = app.window_rect();
        model.camera = Camera::fit(model.simulation.width(), model.simulation.height(), rect.w(), rect.h());
    }
    if model.params.changed() || actions.any() {
        model.render_needed.set(true);
    }

    if model.inserting {
        let world = model.camera.screen_to_world(model.mouse_position, app.window_rect());
        model.simulation.add_agent_at(Point2D::new(world.x, world.y));
        model.render_needed.set(true);
    }

    // Screenshots freeze the simulation until every pending frame is captured
    model.capturing = model.screenshots.pop_front();
    if let Some(shot) = &model.capturing {
        app.main_window().capture_frame(&shot.path);
        model.render_needed.set(true);
        return;
    }

    let steps = if model.params.pause_simulation {
        std::mem::take(&mut model.pending_steps)
    } else {
        model.pending_steps = 0;
        model.params.steps_per_frame
    };
    run_steps(model, steps);

    if model.simulation.is_finished() {
        info!("reached generation {}, closing", model.simulation.generation());
        app.quit();
    }
}

fn run_steps(model: &mut Model, steps: u32) {
    let started = Instant::now();
    let mut taken = 0;

    for _ in 0..steps {
        if model.simulation.is_finished() {
            break;
        }
        match model.simulation.advance() {
            Ok(logged) => {
                if logged && model.log_screenshot {
                    queue_screenshots(model);
                }
            }
            Err(err) => error!("{}", err),
        }
        taken += 1;
    }

    model.debug_info.steps_last_frame = taken;
    model.debug_info.step_time = if taken > 0 { started.elapsed() } else { Duration::ZERO };
    if taken > 0 {
        model.render_needed.set(true);
    }
}

// Queue a density-colored and a species-colored capture of the current
// generation
pub fn queue_screenshots(model: &mut Model) {
    let generation = model.simulation.generation();
    model.screenshots.push_back(Screenshot {
        mode: ColorMode::Density,
        path: PathBuf::from(format!("density_{}.png", generation)),
    });
    model.screenshots.push_back(Screenshot {
        mode: ColorMode::Species,
        path: PathBuf::from(format!("species_{}.png", generation)),
    });
}
