//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize
//! the emulator. It provides:
//! 1. **Defaults:** Baseline machine constants (reset stack pointer, no cycle limit).
//! 2. **Structures:** Hierarchical config for general run options and the machine itself.
//!
//! Configuration is supplied as JSON (`ls8 run --config`) or via `Config::default()`.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants for the emulator.
mod defaults {
    /// Stack pointer value at reset.
    pub const INITIAL_SP: u8 = super::constants::SP_RESET;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "max_cycles": 10000
///     },
///     "system": {
///         "initial_sp": 200
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(10_000));
/// assert_eq!(config.system.initial_sp, 200);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine reset state
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not a valid config.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Print a trace line to stderr before every instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop with an error after this many cycles (unbounded when absent)
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Machine reset state.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Stack pointer (R6) value at reset
    #[serde(default = "SystemConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl SystemConfig {
    /// Returns the default reset stack pointer.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            initial_sp: defaults::INITIAL_SP,
        }
    }
}
