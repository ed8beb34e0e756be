/*
 * Species Module
 *
 * Behavioral constants shared by every agent of a species. The simulation
 * core only ever reads SpeciesParams; the display color travels alongside in
 * Species so the viewer can draw agents without the core knowing about it.
 */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeciesParams {
    // Distance travelled per step
    pub speed: f32,
    // Radius within which other agents count as neighbors
    pub perception: f32,
    // Fixed rotation per step, in degrees
    pub alpha: f32,
    // Rotation per neighbor, in degrees, towards the more crowded side
    pub beta: f32,
}

impl Default for SpeciesParams {
    // The parameter set from Schmickl et al. (2016) that grows cell-like
    // structures on a 150 x 150 domain
    fn default() -> Self {
        Self {
            speed: 0.67,
            perception: 5.0,
            alpha: 180.0,
            beta: 17.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Species {
    pub params: SpeciesParams,
    pub color: [u8; 4],
}

impl Species {
    pub fn new(params: SpeciesParams, color: [u8; 4]) -> Self {
        Self { params, color }
    }
}

// Strip colors off a species table for the simulation core
pub fn params_table(species: &[Species]) -> Vec<SpeciesParams> {
    species.iter().map(|s| s.params).collect()
}
