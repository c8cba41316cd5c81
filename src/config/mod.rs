//! Configuration management for the colony simulator

pub mod settings;

pub use settings::{CliOverrides, InputConfig, SeedMode, Settings, SimulationConfig};
