/*
 * Configuration Module
 *
 * Run settings (domain and window sizes, density, logging) and the species
 * table file. The species file is plain text, one species per record of
 * eight whitespace-separated values:
 *
 *     speed perception alpha beta R G B A
 *
 * Records may be spread over lines freely; only the token order matters.
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{PpsError, Result};
use crate::species::{Species, SpeciesParams};

const FIELDS: [&str; 8] = ["speed", "perception", "alpha", "beta", "red", "green", "blue", "alpha channel"];

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub simulation_width: u32,
    pub simulation_height: u32,
    pub draw_size: f32,
    pub particle_density: f32,
    pub log_interval: u32,
    pub config_file: PathBuf,
    pub log_file: Option<PathBuf>,
    pub exit_after: u64,
    pub seed: Option<u64>,
    pub headless: bool,
    pub fullscreen: bool,
    pub light_scheme: bool,
    pub log_screenshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 600,
            window_height: 600,
            simulation_width: 150,
            simulation_height: 150,
            draw_size: 2.0,
            particle_density: 0.08,
            log_interval: 500,
            config_file: PathBuf::from("config.ini"),
            log_file: Some(PathBuf::from("log.csv")),
            exit_after: 100_000,
            seed: None,
            headless: false,
            fullscreen: false,
            light_scheme: false,
            log_screenshot: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("window width", self.window_width),
            ("window height", self.window_height),
            ("simulation width", self.simulation_width),
            ("simulation height", self.simulation_height),
            ("log interval", self.log_interval),
        ];
        for (what, value) in dimensions {
            if value == 0 {
                return Err(PpsError::InvalidDimension { what, value });
            }
        }

        if !self.particle_density.is_finite() || self.particle_density < 0.0 {
            return Err(PpsError::InvalidDensity(self.particle_density));
        }

        Ok(())
    }

    // Number of agents seeded at startup
    pub fn initial_agents(&self) -> usize {
        let count = self.particle_density * self.simulation_width as f32 * self.simulation_height as f32;
        count.floor() as usize
    }
}

pub fn load_species(path: &Path) -> Result<Vec<Species>> {
    let text = fs::read_to_string(path).map_err(|source| PpsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let species = parse_species(&text)?;
    info!("loaded {} species from {}", species.len(), path.display());
    Ok(species)
}

pub fn parse_species(text: &str) -> Result<Vec<Species>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut species = Vec::with_capacity(tokens.len() / FIELDS.len());

    for (entry, record) in tokens.chunks(FIELDS.len()).enumerate() {
        if record.len() < FIELDS.len() {
            warn!(
                "ignoring incomplete species entry {} ({} of {} values)",
                entry + 1,
                record.len(),
                FIELDS.len()
            );
            break;
        }

        let float = |i: usize| -> Result<f32> {
            record[i]
                .parse::<f32>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| invalid_field(entry, i, record[i]))
        };
        let channel = |i: usize| -> Result<u8> {
            record[i].parse::<u8>().map_err(|_| invalid_field(entry, i, record[i]))
        };

        let params = SpeciesParams {
            speed: float(0)?,
            perception: float(1)?,
            alpha: float(2)?,
            beta: float(3)?,
        };
        let color = [channel(4)?, channel(5)?, channel(6)?, channel(7)?];
        species.push(Species::new(params, color));
    }

    if species.is_empty() {
        return Err(PpsError::NoSpecies);
    }
    Ok(species)
}

fn invalid_field(entry: usize, field: usize, token: &str) -> PpsError {
    PpsError::InvalidSpeciesField {
        entry: entry + 1,
        field: FIELDS[field],
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_species() {
        let text = "0.67 5 180 17 255 255 0 255\n\
                    1.0 4.5 -90.5 12\n  0 128 255 200\n";
        let species = parse_species(text).unwrap();

        assert_eq!(species.len(), 2);
        assert_eq!(species[0].params, SpeciesParams::default());
        assert_eq!(species[0].color, [255, 255, 0, 255]);
        assert_eq!(species[1].params.alpha, -90.5);
        assert_eq!(species[1].color, [0, 128, 255, 200]);
    }

    #[test]
    fn trailing_partial_record_is_ignored() {
        let species = parse_species("0.67 5 180 17 255 255 255 255 1.0 2.0").unwrap();
        assert_eq!(species.len(), 1);
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(matches!(parse_species(" \n\t"), Err(PpsError::NoSpecies)));
        assert!(matches!(parse_species("1 2 3"), Err(PpsError::NoSpecies)));
    }

    #[test]
    fn bad_tokens_name_the_field() {
        match parse_species("0.67 five 180 17 255 255 255 255") {
            Err(PpsError::InvalidSpeciesField { entry, field, token }) => {
                assert_eq!(entry, 1);
                assert_eq!(field, "perception");
                assert_eq!(token, "five");
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(matches!(
            parse_species("0.67 5 180 17 256 0 0 255"),
            Err(PpsError::InvalidSpeciesField { field: "red", .. })
        ));
        assert!(matches!(
            parse_species("0.67 5 inf 17 0 0 0 255"),
            Err(PpsError::InvalidSpeciesField { field: "alpha", .. })
        ));
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.initial_agents(), 1800);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let settings = Settings { simulation_height: 0, ..Settings::default() };
        assert!(matches!(
            settings.validate(),
            Err(PpsError::InvalidDimension { what: "simulation height", .. })
        ));

        let settings = Settings { particle_density: -0.1, ..Settings::default() };
        assert!(matches!(settings.validate(), Err(PpsError::InvalidDensity(_))));
    }
}
