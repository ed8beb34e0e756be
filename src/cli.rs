/*
 * Command Line Module
 *
 * Command-line options for the simulation binary. Parsing is handled by
 * clap; the parsed values are turned into validated Settings.
 */

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pps",
    version,
    about = "Runs a simulation of a Primordial Particle System (PPS) based on work by Schmickl et al. (2016)."
)]
pub struct Cli {
    /// Width of the window.
    #[arg(long, default_value_t = 600)]
    pub window_width: u32,

    /// Height of the window.
    #[arg(long, default_value_t = 600)]
    pub window_height: u32,

    /// Width of the simulation.
    #[arg(long, default_value_t = 150)]
    pub simulation_width: u32,

    /// Height of the simulation.
    #[arg(long, default_value_t = 150)]
    pub simulation_height: u32,

    /// The draw size of the particles.
    #[arg(long, default_value_t = 2.0)]
    pub draw_size: f32,

    /// Initial particle density (particles per unit of area).
    #[arg(long, default_value_t = 0.08)]
    pub particle_density: f32,

    /// Population logging interval, in generations.
    #[arg(long, default_value_t = 500)]
    pub log_interval: u32,

    /// Species configuration file.
    #[arg(long, default_value = "config.ini")]
    pub config_file: PathBuf,

    /// Species logging file.
    #[arg(long, default_value = "log.csv")]
    pub log_file: PathBuf,

    /// Exit program after [n] steps.
    #[arg(long, default_value_t = 100_000)]
    pub exit_after: u64,

    /// Seed for initial positions and headings; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run headless.
    #[arg(long)]
    pub headless: bool,

    /// Runs the simulation in a fullscreen window.
    #[arg(long)]
    pub fullscreen: bool,

    /// Uses a light color scheme.
    #[arg(long)]
    pub light_scheme: bool,

    /// Whether or not to log screenshots. Viewer only: headless runs have
    /// no offscreen target and skip them with a warning.
    #[arg(long)]
    pub log_screenshot: bool,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings> {
        let settings = Settings {
            window_width: self.window_width,
            window_height: self.window_height,
            simulation_width: self.simulation_width,
            simulation_height: self.simulation_height,
            draw_size: self.draw_size,
            particle_density: self.particle_density,
            log_interval: self.log_interval,
            config_file: self.config_file,
            log_file: Some(self.log_file),
            exit_after: self.exit_after,
            seed: self.seed,
            headless: self.headless,
            fullscreen: self.fullscreen,
            light_scheme: self.light_scheme,
            log_screenshot: self.log_screenshot,
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_settings_defaults() {
        let settings = Cli::parse_from(["pps"]).into_settings().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn flags_and_values_are_parsed() {
        let cli = Cli::parse_from([
            "pps",
            "--simulation-width",
            "80",
            "--seed",
            "17",
            "--headless",
            "--log-file",
            "run.csv",
        ]);
        let settings = cli.into_settings().unwrap();

        assert_eq!(settings.simulation_width, 80);
        assert_eq!(settings.seed, Some(17));
        assert!(settings.headless);
        assert!(!settings.fullscreen);
        assert_eq!(settings.log_file, Some(PathBuf::from("run.csv")));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cli = Cli::parse_from(["pps", "--window-width", "0"]);
        assert!(cli.into_settings().is_err());
    }

    #[test]
    fn screenshot_help_names_headless_limit() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("--log-screenshot"));
        assert!(help.contains("headless runs"));
    }
}
