//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (data memory size, cycle limit).
//! 2. **Structures:** Hierarchical config for general, pipeline, and memory settings.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::DEFAULT_DATA_WORDS;
use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
///
/// These values apply when a field is not explicitly set in a JSON document.
mod defaults {
    /// Maximum cycles a single run operation may take before giving up.
    ///
    /// A `beqz` with a zero or negative offset on a zero register loops forever;
    /// this bound turns such a program into an error instead of a hang.
    pub const MAX_CYCLES: u64 = 100_000;

    /// Forwarding is disabled unless requested.
    pub const FORWARDING: bool = false;
}

/// Top-level simulator configuration.
///
/// Every section and field is optional in JSON.
///
/// # Examples
///
/// ```
/// use pipesim_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_cycles": 500 },
///     "pipeline": { "forwarding": true },
///     "memory": { "data_words": 64 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, 500);
/// assert!(config.pipeline.forwarding);
/// assert_eq!(config.memory.data_words, 64);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline policy
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document and validates it.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text.
    ///
    /// # Returns
    ///
    /// The configuration, or [`SimError::Config`] if the document is malformed
    /// or a value is unusable.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Rejects values the simulator cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        if self.memory.data_words == 0 {
            return Err(SimError::Config("memory.data_words must be at least 1".into()));
        }
        if self.general.max_cycles == 0 {
            return Err(SimError::Config("general.max_cycles must be at least 1".into()));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace events (the CLI raises the log filter to `trace`)
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycle limit for `run_to_breakpoint` and `run_to_end`
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default cycle limit.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Pipeline policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Let Decode take operands from the Forward Value Table
    #[serde(default = "PipelineConfig::default_forwarding")]
    pub forwarding: bool,
}

impl PipelineConfig {
    /// Returns the default forwarding policy.
    const fn default_forwarding() -> bool {
        defaults::FORWARDING
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            forwarding: defaults::FORWARDING,
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Number of words in data memory
    #[serde(default = "MemoryConfig::default_data_words")]
    pub data_words: usize,
}

impl MemoryConfig {
    /// Returns the default data memory size.
    const fn default_data_words() -> usize {
        DEFAULT_DATA_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_words: DEFAULT_DATA_WORDS,
        }
    }
}
