/*
 * Simulation Module
 *
 * This module drives a whole run: it seeds the population, advances it one
 * generation at a time, keeps the neighborhood census and writes it to the
 * CSV log at every logging interval. It holds no window state, so the same
 * driver backs both the interactive viewer and headless runs.
 */

use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha12Rng;

use crate::agent::Agent;
use crate::census::{Census, CensusLog};
use crate::config::Settings;
use crate::error::{PpsError, Result};
use crate::point::Point2D;
use crate::population::Population;
use crate::species::{params_table, Species, SpeciesParams};

pub struct Simulation {
    population: Population,
    species: Vec<Species>,
    params: Vec<SpeciesParams>,
    width: f32,
    height: f32,
    generation: u64,
    since_last_log: u32,
    log_interval: u32,
    exit_after: u64,
    census: Census,
    log: Option<CensusLog>,
    rng: ChaCha12Rng,
}

impl Simulation {
    pub fn new(settings: &Settings, species: Vec<Species>, mut rng: ChaCha12Rng) -> Result<Self> {
        settings.validate()?;
        if species.is_empty() {
            return Err(PpsError::NoSpecies);
        }

        let width = settings.simulation_width as f32;
        let height = settings.simulation_height as f32;
        let population = Population::seeded(&mut rng, settings.initial_agents(), width, height, species.len());

        let log = match &settings.log_file {
            Some(path) => Some(CensusLog::create(path, species.len())?),
            None => None,
        };

        info!(
            "starting simulation: {} agents, {} species, {}x{} domain",
            population.len(),
            species.len(),
            width,
            height
        );

        Ok(Self {
            population,
            params: params_table(&species),
            census: Census::new(species.len()),
            species,
            width,
            height,
            generation: 0,
            since_last_log: 0,
            log_interval: settings.log_interval,
            exit_after: settings.exit_after,
            log,
            rng,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn agents(&self) -> &[Agent] {
        self.population.agents()
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn census(&self) -> &Census {
        &self.census
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_finished(&self) -> bool {
        self.generation > self.exit_after
    }

    /// Advance the population by one generation and update the census.
    /// Returns `true` when a logging interval was completed by this step.
    pub fn advance(&mut self) -> Result<bool> {
        self.generation += 1;
        self.since_last_log += 1;

        self.population.step(self.width, self.height, &self.params);
        self.census.tally(&self.population);

        if self.since_last_log < self.log_interval {
            return Ok(false);
        }

        // The interval is closed even if the row cannot be written
        self.since_last_log = 0;
        let written = match &mut self.log {
            Some(log) => log.record(self.generation, &self.census, self.log_interval),
            None => Ok(()),
        };
        self.census.reset();
        written?;

        debug!("generation {}: census logged", self.generation);
        Ok(true)
    }

    // Insert an agent of a random species with a random heading
    pub fn add_agent_at(&mut self, position: Point2D) {
        let species = self.rng.gen_range(0..self.species.len());
        let heading = self.rng.gen::<f32>();
        let position = position.wrapped(self.width, self.height);
        self.population.add(position, heading, species);
    }

    pub fn run_headless(&mut self) -> Result<()> {
        while !self.is_finished() {
            if self.advance()? {
                info!("generation {} ({} agents)", self.generation, self.population.len());
            }
        }
        info!("finished after {} generations", self.generation);
        Ok(())
    }
}
