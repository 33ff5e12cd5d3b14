//! Startup configuration parsed from the command line.

use std::{fmt, str::FromStr};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::domain::{ConwayRule, LifeWithoutDeathRule, Rule};

pub const DEFAULT_GRID_SIZE: u32 = 64;
pub const DEFAULT_WINDOW_SIZE: u32 = 1024;
/// 4 generations per second
pub const DEFAULT_STEP_MS: u64 = 250;
pub const DEFAULT_DENSITY: f64 = 0.3;
pub const DEFAULT_TITLE: &str = "Conway's Game of Life";

/// Configuration errors detected before the window opens
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("expected format WIDTHxHEIGHT, got `{0}`")]
    DimensionsFormat(String),
    #[error("invalid {axis}: {reason}")]
    DimensionValue { axis: &'static str, reason: String },
    #[error("dimensions must be positive")]
    ZeroDimension,
    #[error("window {window} is too small for a {grid} grid (need at least one pixel per cell)")]
    WindowTooSmall { window: Dimensions, grid: Dimensions },
    #[error("window {0} exceeds the largest supported window size")]
    WindowTooLarge(Dimensions),
    #[error("step duration must be positive")]
    ZeroStep,
    #[error("density must be in (0, 1], got {0}")]
    Density(f64),
}

/// Width and height parsed from a WIDTHxHEIGHT argument
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn square(size: u32) -> Self {
        Self { width: size, height: size }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = value
            .split_once(['x', 'X'])
            .ok_or_else(|| ConfigError::DimensionsFormat(value.to_string()))?;

        let parse = |axis: &'static str, raw: &str| {
            raw.trim()
                .parse::<u32>()
                .map_err(|error| ConfigError::DimensionValue { axis, reason: error.to_string() })
        };
        let width = parse("width", width)?;
        let height = parse("height", height)?;

        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension);
        }

        Ok(Self { width, height })
    }
}

/// Which update rule drives the simulation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RuleKind {
    /// Standard B3/S23
    #[default]
    Conway,
    /// Legacy staging where live cells never die (B3/S012345678)
    LifeWithoutDeath,
}

impl RuleKind {
    pub fn build(self) -> Box<dyn Rule> {
        match self {
            RuleKind::Conway => Box::new(ConwayRule),
            RuleKind::LifeWithoutDeath => Box::new(LifeWithoutDeathRule),
        }
    }
}

/// Command-line arguments for the simulator.
#[derive(Debug, Parser)]
#[command(author, version, about = "Interactive Conway's Game of Life", long_about = None)]
pub struct CliArgs {
    /// Grid dimensions in cells, as WIDTHxHEIGHT.
    #[arg(short = 's', long = "size", value_name = "WIDTHxHEIGHT", default_value = "64x64")]
    pub size: Dimensions,
    /// Window dimensions in pixels, as WIDTHxHEIGHT.
    #[arg(short = 'w', long = "window", value_name = "WIDTHxHEIGHT", default_value = "1024x1024")]
    pub window: Dimensions,
    /// Milliseconds per generation while running.
    #[arg(
        long = "step-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_STEP_MS,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub step_ms: u64,
    /// Update rule.
    #[arg(long, value_enum, default_value_t = RuleKind::Conway)]
    pub rule: RuleKind,
    /// Share of cells alive after a random fill.
    #[arg(long, value_name = "FRACTION", default_value_t = DEFAULT_DENSITY)]
    pub density: f64,
    /// Seed for random fills; omit for a fresh seed each run.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Window title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,
}

impl CliArgs {
    /// Parse and validate an argument list.
    ///
    /// Parse failures come back as a `clap::Error` inside the `anyhow::Error`; help and
    /// version requests do too, with `use_stderr()` false.
    pub fn try_load_from<I, T>(args: I) -> anyhow::Result<SimConfig>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Self::try_parse_from(args)?;
        args.into_config().context("invalid configuration")
    }

    /// Validate the arguments into a runnable configuration
    pub fn into_config(self) -> Result<SimConfig, ConfigError> {
        let config = SimConfig {
            grid: self.size,
            window: self.window,
            step_ms: self.step_ms,
            rule: self.rule,
            density: self.density,
            seed: self.seed,
            title: self.title,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Validated simulator configuration
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub grid: Dimensions,
    pub window: Dimensions,
    pub step_ms: u64,
    pub rule: RuleKind,
    pub density: f64,
    pub seed: Option<u64>,
    pub title: String,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0
            || self.window.width == 0 || self.window.height == 0
        {
            return Err(ConfigError::ZeroDimension);
        }
        if i32::try_from(self.window.width).is_err() || i32::try_from(self.window.height).is_err() {
            return Err(ConfigError::WindowTooLarge(self.window));
        }
        if self.window.width < self.grid.width || self.window.height < self.grid.height {
            return Err(ConfigError::WindowTooSmall { window: self.window, grid: self.grid });
        }
        if self.step_ms == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(ConfigError::Density(self.density));
        }
        Ok(())
    }

    /// Window size in the signed pixels the windowing layer expects
    pub fn window_pixels(&self) -> (i32, i32) {
        (
            i32::try_from(self.window.width).unwrap_or(i32::MAX),
            i32::try_from(self.window.height).unwrap_or(i32::MAX),
        )
    }

    /// Builder-style seed override, mostly for reproducible tests
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid: Dimensions::square(DEFAULT_GRID_SIZE),
            window: Dimensions::square(DEFAULT_WINDOW_SIZE),
            step_ms: DEFAULT_STEP_MS,
            rule: RuleKind::default(),
            density: DEFAULT_DENSITY,
            seed: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("life").chain(args.iter().copied()))
    }

    #[test]
    fn test_dimensions_parse() {
        assert_eq!("64x32".parse::<Dimensions>(), Ok(Dimensions { width: 64, height: 32 }));
        assert_eq!(" 10 X 20 ".parse::<Dimensions>(), Ok(Dimensions { width: 10, height: 20 }));
        assert_eq!(
            "64".parse::<Dimensions>(),
            Err(ConfigError::DimensionsFormat("64".to_string()))
        );
        assert_eq!("0x5".parse::<Dimensions>(), Err(ConfigError::ZeroDimension));
        assert!(matches!(
            "ax5".parse::<Dimensions>(),
            Err(ConfigError::DimensionValue { axis: "width", .. })
        ));
    }

    #[test]
    fn test_defaults_match_reference_instance() {
        let config = parse(&[]).unwrap().into_config().unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.grid, Dimensions::square(64));
        assert_eq!(config.window, Dimensions::square(1024));
        assert_eq!(config.step_ms, 250);
        assert_eq!(config.rule, RuleKind::Conway);
    }

    #[test]
    fn test_cli_overrides() {
        let config = parse(&[
            "--size", "32x16",
            "--window", "640x320",
            "--step-ms", "100",
            "--rule", "life-without-death",
            "--seed", "9",
        ])
        .unwrap()
        .into_config()
        .unwrap();

        assert_eq!(config.grid, Dimensions { width: 32, height: 16 });
        assert_eq!(config.window, Dimensions { width: 640, height: 320 });
        assert_eq!(config.step_ms, 100);
        assert_eq!(config.rule, RuleKind::LifeWithoutDeath);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(parse(&["--size", "64"]).is_err());
        assert!(parse(&["--step-ms", "0"]).is_err());
        assert!(parse(&["--rule", "highlife"]).is_err());
    }

    #[test]
    fn test_window_smaller_than_grid_rejected() {
        let error = parse(&["--size", "100x100", "--window", "50x200"])
            .unwrap()
            .into_config()
            .unwrap_err();
        assert!(matches!(error, ConfigError::WindowTooSmall { .. }));
    }

    #[test]
    fn test_window_beyond_i32_rejected() {
        let error = parse(&["--window", "3000000000x1024"])
            .unwrap()
            .into_config()
            .unwrap_err();
        assert!(matches!(error, ConfigError::WindowTooLarge(_)));

        let config = parse(&["--window", "2147483647x1024"]).unwrap().into_config().unwrap();
        assert_eq!(config.window_pixels(), (i32::MAX, 1024));
    }

    #[test]
    fn test_load_reports_parse_errors_through_anyhow() {
        let error = CliArgs::try_load_from(["life", "--size", "64"]).unwrap_err();
        let clap_error = error.downcast_ref::<clap::Error>().unwrap();
        assert!(clap_error.use_stderr());

        let help = CliArgs::try_load_from(["life", "--help"]).unwrap_err();
        assert!(!help.downcast_ref::<clap::Error>().unwrap().use_stderr());
    }

    #[test]
    fn test_load_reports_invalid_config() {
        let error = CliArgs::try_load_from(["life", "--size", "100x100", "--window", "50x50"])
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::WindowTooSmall { .. })
        ));
        assert!(CliArgs::try_load_from(["life"]).is_ok());
    }

    #[test]
    fn test_density_range() {
        for density in ["0", "1.5", "-0.1", "NaN"] {
            let arg = format!("--density={density}");
            let error = parse(&[arg.as_str()]).unwrap().into_config().unwrap_err();
            assert!(matches!(error, ConfigError::Density(_)), "{density}");
        }
        assert!(parse(&["--density", "1"]).unwrap().into_config().is_ok());
    }

    #[test]
    fn test_rule_kind_builds_matching_rule() {
        assert_eq!(RuleKind::Conway.build().name(), "Conway");
        assert_eq!(RuleKind::LifeWithoutDeath.build().name(), "Life without Death");
    }
}
