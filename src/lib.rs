/*
 * Primordial Particle System - Module Definitions
 *
 * This file defines the module structure for the PPS simulation.
 * The simulation core (point, spatial_tree, agent, species, population) has
 * no knowledge of windows or files; the driver, config and viewer modules
 * are built around it.
 */

// Re-export key components for easier access
pub use agent::Agent;
pub use census::{Census, CensusLog, NeighborhoodClass};
pub use config::Settings;
pub use error::PpsError;
pub use point::Point2D;
pub use population::Population;
pub use simulation::Simulation;
pub use spatial_tree::ToroidalTree;
pub use species::{Species, SpeciesParams};

// Simulation core
pub mod agent;
pub mod point;
pub mod population;
pub mod spatial_tree;
pub mod species;

// Driver, configuration and logging
pub mod census;
pub mod cli;
pub mod config;
pub mod error;
pub mod rng;
pub mod simulation;

// Viewer
pub mod app;
pub mod camera;
pub mod debug;
pub mod input;
pub mod params;
pub mod renderer;
pub mod ui;
