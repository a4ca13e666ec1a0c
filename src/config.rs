//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/geotime/geotime.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `GEOTIME_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, Difficulty};

/// Unified configuration for geotime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; unset means a fresh random draw per run
    pub seed: Option<u64>,
    /// Default chronology challenge difficulty
    pub difficulty: Difficulty,
    /// Default number of divisions drawn by `sample`
    pub sample_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::Easy,
            sample_count: 5,
        }
    }
}

/// Get the XDG config directory for geotime.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "geotime").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("geotime.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut builder = Self::defaults_builder()?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = explicit {
            debug!("explicit config: {}", path.display());
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("GEOTIME")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Load a single file on top of the defaults, ignoring global config and env vars.
    pub fn load_file(path: &Path) -> Result<Self, ApplicationError> {
        let config = Self::defaults_builder()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .build()
            .map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    fn defaults_builder() -> Result<ConfigBuilder<config::builder::DefaultState>, ApplicationError>
    {
        let defaults = Settings::default();
        Config::builder()
            .set_default("difficulty", defaults.difficulty.to_string())
            .map_err(config_err)?
            .set_default("sample_count", defaults.sample_count as u64)
            .map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# geotime configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/geotime/geotime.toml
#   Explicit: --config <file>
#   Env:    GEOTIME_* environment variables (e.g. GEOTIME_SEED=42)

# Fixed random seed for reproducible samples, challenges and quizzes
# seed = 42

# Default chronology challenge difficulty: easy | medium | hard
# difficulty = "easy"

# Default number of divisions drawn by `geotime sample`
# sample_count = 5
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
