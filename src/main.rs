/*
 * Primordial Particle System
 *
 * Entry point: parses the command line, loads the species table and either
 * opens the interactive viewer or runs headless until the last generation,
 * logging the neighborhood census to CSV.
 */

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use pps::cli::Cli;
use pps::config::load_species;
use pps::rng::create_rng;
use pps::{app, Simulation};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Cli::parse().into_settings().context("invalid command-line options")?;
    let species = load_species(&settings.config_file)
        .with_context(|| format!("could not load species from {}", settings.config_file.display()))?;

    let mut simulation = Simulation::new(&settings, species, create_rng(settings.seed))
        .context("could not set up the simulation")?;

    if settings.headless {
        if settings.log_screenshot {
            warn!("screenshots are not available in headless mode");
        }
        simulation.run_headless()?;
        info!("census written to {:?}", settings.log_file);
        return Ok(());
    }

    app::launch(simulation, settings);
    Ok(())
}
