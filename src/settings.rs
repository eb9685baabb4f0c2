use crate::error::Result;
use crate::processors::{RoundingMode, ValidityPolicy};
use crate::utils::constants::{DEFAULT_CONFIG_FILE, DEFAULT_DATA_DIR, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime settings, layered as defaults < config file < `WEATHERMAN_*` environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the weather files
    pub data_dir: PathBuf,
    /// Only read files with this extension
    pub file_extension: Option<String>,
    /// Whether zero values count as valid measurements
    pub zero_values: ValidityPolicy,
    pub rounding: RoundingMode,
    /// ANSI colors in charts
    pub color: bool,
    /// Keep rows whose numeric cells are empty, with those values absent
    pub allow_partial_rows: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_extension: None,
            zero_values: ValidityPolicy::default(),
            rounding: RoundingMode::default(),
            color: true,
            allow_partial_rows: false,
            log_level: None,
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from `config_file` (required when given) or from
    /// `weatherman.toml` in the working directory (optional), then the environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Like [`Settings::load`], reading environment variables from `env` when
    /// provided instead of the process environment.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }
}
