/*
 * Population Module
 *
 * This module owns the agents and advances them one generation at a time.
 * Each step works off a snapshot of the positions at the start of the step:
 * - Build a fresh ToroidalTree over the snapshot
 * - Query it once per agent with that agent's perception radius
 * - Apply the turning rule, then move the agent
 *
 * Because the tree borrows the snapshot rather than the agents, no agent can
 * observe a neighbor that already moved during the same step. The tree is
 * dropped at the end of the step; nothing is carried over.
 */

use log::debug;
use rand::Rng;

use crate::agent::Agent;
use crate::point::Point2D;
use crate::spatial_tree::ToroidalTree;
use crate::species::SpeciesParams;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatter `count` agents uniformly over the domain with random headings.
    /// Species are assigned round-robin over `species_count` species.
    ///
    /// # Panics
    ///
    /// Panics if `count > 0` and `species_count == 0`.
    pub fn seeded<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        width: f32,
        height: f32,
        species_count: usize,
    ) -> Self {
        assert!(count == 0 || species_count > 0, "cannot seed agents without species");

        let mut population = Self { agents: Vec::with_capacity(count) };
        for i in 0..count {
            let position = Point2D::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height)
                .wrapped(width, height);
            population
                .agents
                .push(Agent::with_random_heading(rng, position, i % species_count));
        }

        debug!("seeded {} agents over {} species on a {}x{} domain", count, species_count, width, height);
        population
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    // Insert an agent at runtime, e.g. from a mouse click
    pub fn add(&mut self, position: Point2D, heading: f32, species: usize) {
        self.agents.push(Agent::new(position, heading, species));
    }

    /// Advance every agent by one generation.
    ///
    /// # Panics
    ///
    /// Panics if an agent's species id is not an index into `species`.
    pub fn step(&mut self, width: f32, height: f32, species: &[SpeciesParams]) {
        let positions: Vec<Point2D> = self.agents.iter().map(|agent| agent.position).collect();
        let tree = ToroidalTree::build(&positions, width, height);

        for (i, agent) in self.agents.iter_mut().enumerate() {
            let params = &species[agent.species];
            let found = tree.search(positions[i], params.perception);
            let neighbors = found.iter().filter(|&&id| id != i).map(|&id| positions[id]);

            agent.update_heading(neighbors, params.alpha, params.beta, width, height);
            agent.move_forward(width, height, params.speed);
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
