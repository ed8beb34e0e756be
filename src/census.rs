/*
 * Census Module
 *
 * Classifies agents by how crowded their neighborhood is and keeps running
 * per-species tallies of those classes between log points. The classes
 * follow the structures a PPS grows: dense cores, the membranes around
 * them, spores, tightly packed clumps and free-floating particles.
 *
 * CensusLog writes the averaged tallies to a CSV file, one row per logging
 * interval.
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::agent::Agent;
use crate::error::{PpsError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighborhoodClass {
    Core,
    Membrane,
    Spore,
    Packed,
    Free,
}

impl NeighborhoodClass {
    // Column order used in logs and tallies
    pub const ALL: [NeighborhoodClass; 5] = [
        NeighborhoodClass::Core,
        NeighborhoodClass::Membrane,
        NeighborhoodClass::Spore,
        NeighborhoodClass::Packed,
        NeighborhoodClass::Free,
    ];

    pub fn of(agent: &Agent) -> Self {
        let n = agent.neighbors;
        if agent.close_neighbors > 15 {
            NeighborhoodClass::Packed
        } else if n > 15 && n <= 35 {
            NeighborhoodClass::Membrane
        } else if n > 35 {
            NeighborhoodClass::Core
        } else if (13..=15).contains(&n) {
            NeighborhoodClass::Spore
        } else {
            NeighborhoodClass::Free
        }
    }

    pub fn index(self) -> usize {
        match self {
            NeighborhoodClass::Core => 0,
            NeighborhoodClass::Membrane => 1,
            NeighborhoodClass::Spore => 2,
            NeighborhoodClass::Packed => 3,
            NeighborhoodClass::Free => 4,
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            NeighborhoodClass::Core => "yellow",
            NeighborhoodClass::Membrane => "blue",
            NeighborhoodClass::Spore => "brown",
            NeighborhoodClass::Packed => "magenta",
            NeighborhoodClass::Free => "green",
        }
    }

    pub fn color(self) -> [u8; 4] {
        match self {
            NeighborhoodClass::Core => [255, 255, 0, 255],
            NeighborhoodClass::Membrane => [0, 0, 255, 255],
            NeighborhoodClass::Spore => [200, 100, 0, 255],
            NeighborhoodClass::Packed => [255, 0, 255, 255],
            NeighborhoodClass::Free => [0, 255, 0, 255],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Census {
    counts: Vec<[u64; 5]>,
}

impl Census {
    pub fn new(species_count: usize) -> Self {
        Self {
            counts: vec![[0; 5]; species_count],
        }
    }

    pub fn species_count(&self) -> usize {
        self.counts.len()
    }

    // Add one observation of every agent
    pub fn tally<'a, I>(&mut self, agents: I)
    where
        I: IntoIterator<Item = &'a Agent>,
    {
        for agent in agents {
            let class = NeighborhoodClass::of(agent);
            self.counts[agent.species][class.index()] += 1;
        }
    }

    pub fn count(&self, species: usize, class: NeighborhoodClass) -> u64 {
        self.counts[species][class.index()]
    }

    // Per-species class counts divided by the number of tallied steps
    pub fn averages(&self, steps: u32) -> Vec<[f32; 5]> {
        let steps = steps.max(1) as f32;
        self.counts
            .iter()
            .map(|row| row.map(|count| count as f32 / steps))
            .collect()
    }

    pub fn reset(&mut self) {
        for row in &mut self.counts {
            *row = [0; 5];
        }
    }
}

pub struct CensusLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl CensusLog {
    // Create (or truncate) the log file and write the header row
    pub fn create(path: &Path, species_count: usize) -> Result<Self> {
        let file = File::create(path).map_err(|source| log_error(path, source))?;
        let mut log = Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        };

        let mut header = String::from("generation");
        for species in 0..species_count {
            for class in NeighborhoodClass::ALL {
                header.push_str(&format!(",s{}_{}", species, class.color_name()));
            }
        }
        log.write_line(&header)?;
        Ok(log)
    }

    // Log over a handle that rejects every write
    #[cfg(test)]
    pub(crate) fn read_only(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| log_error(path, source))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn record(&mut self, generation: u64, census: &Census, steps: u32) -> Result<()> {
        let mut row = generation.to_string();
        for averages in census.averages(steps) {
            for value in averages {
                row.push_str(&format!(",{}", value));
            }
        }
        self.write_line(&row)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(|source| log_error(&self.path, source))
    }
}

fn log_error(path: &Path, source: std::io::Error) -> PpsError {
    PpsError::Log {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point2D;

    fn agent(species: usize, neighbors: u32, close: u32) -> Agent {
        let mut agent = Agent::new(Point2D::ZERO, 0.0, species);
        agent.neighbors = neighbors;
        agent.close_neighbors = close;
        agent
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(NeighborhoodClass::of(&agent(0, 40, 16)), NeighborhoodClass::Packed);
        assert_eq!(NeighborhoodClass::of(&agent(0, 16, 0)), NeighborhoodClass::Membrane);
        assert_eq!(NeighborhoodClass::of(&agent(0, 35, 15)), NeighborhoodClass::Membrane);
        assert_eq!(NeighborhoodClass::of(&agent(0, 36, 0)), NeighborhoodClass::Core);
        assert_eq!(NeighborhoodClass::of(&agent(0, 13, 0)), NeighborhoodClass::Spore);
        assert_eq!(NeighborhoodClass::of(&agent(0, 15, 0)), NeighborhoodClass::Spore);
        assert_eq!(NeighborhoodClass::of(&agent(0, 12, 0)), NeighborhoodClass::Free);
        assert_eq!(NeighborhoodClass::of(&agent(0, 0, 0)), NeighborhoodClass::Free);
    }

    #[test]
    fn tallies_per_species_and_averages() {
        let mut census = Census::new(2);
        let agents = vec![agent(0, 40, 0), agent(1, 0, 0), agent(1, 14, 0)];

        census.tally(&agents);
        census.tally(&agents);

        assert_eq!(census.count(0, NeighborhoodClass::Core), 2);
        assert_eq!(census.count(1, NeighborhoodClass::Free), 2);
        assert_eq!(census.count(1, NeighborhoodClass::Spore), 2);

        let averages = census.averages(4);
        assert_eq!(averages[0], [0.5, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(averages[1], [0.0, 0.0, 0.5, 0.0, 0.5]);

        census.reset();
        assert_eq!(census.count(1, NeighborhoodClass::Free), 0);
    }
}
