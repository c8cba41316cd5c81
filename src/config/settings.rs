//! Configuration settings for the colony simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Age at which live cells stop getting older
    pub max_age: u8,
    /// Timer interval between generations, in milliseconds
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub seed: SeedMode,
    /// Board file to load when `seed` is `file`
    pub board_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    Random,
    File,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                max_age: 12,
                tick_interval_ms: 1500,
            },
            input: InputConfig {
                seed: SeedMode::Random,
                board_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_age == 0 {
            anyhow::bail!("Maximum age must be positive");
        }

        if self.simulation.tick_interval_ms == 0 {
            anyhow::bail!("Tick interval must be positive");
        }

        if self.input.seed == SeedMode::File {
            match &self.input.board_file {
                None => anyhow::bail!("Seed mode 'file' requires a board file"),
                Some(path) if !path.exists() => {
                    anyhow::bail!("Board file does not exist: {}", path.display())
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref board_file) = cli_overrides.board_file {
            self.input.seed = SeedMode::File;
            self.input.board_file = Some(board_file.clone());
        }
        if cli_overrides.random {
            self.input.seed = SeedMode::Random;
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(max_age) = cli_overrides.max_age {
            self.simulation.max_age = max_age;
        }
    }

    /// The timer interval as a `Duration`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.simulation.tick_interval_ms)
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub board_file: Option<PathBuf>,
    pub random: bool,
    pub tick_interval_ms: Option<u64>,
    pub max_age: Option<u8>,
}
