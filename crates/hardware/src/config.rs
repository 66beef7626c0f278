//! Configuration system for the LS-8 simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline machine constants (initial stack pointer).
//! 2. **Structures:** General run options and machine options.
//! 3. **Loading:** Deserialization from a JSON file.
//!
//! Every field has a default, so `{}` is a complete configuration. The CLI
//! starts from `Config::default()` or a JSON file and then applies its flags.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::DEFAULT_INITIAL_SP;
use crate::common::error::ConfigError;

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.machine.initial_sp, 0xF4);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_instructions": 1000 },
///     "machine": { "initial_sp": 200 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_instructions, Some(1000));
/// assert_eq!(config.machine.initial_sp, 200);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine reset state.
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Reads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Json` if it is not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Write a trace line before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop with a fault after this many instructions. Unlimited when unset.
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

/// Machine reset state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Value of the stack pointer (`r7`) at reset.
    #[serde(default = "MachineConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl MachineConfig {
    const fn default_initial_sp() -> u8 {
        DEFAULT_INITIAL_SP
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial_sp: Self::default_initial_sp(),
        }
    }
}
