use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::TimezoneTableError;
use crate::timezones::TimezoneTable;

#[derive(Clone, Debug, Default)]
pub struct BuilderConfig {
    pub logging: LoggingConfig,
    pub timezones: TimezoneConfig,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Debug, Default)]
pub struct TimezoneConfig {
    /// JSON file of `{"zoneName": ..}` records replacing the bundled table.
    pub table_path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub timezone_table: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    TimezoneTable(#[from] TimezoneTableError),
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::Compact }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl BuilderConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("blockkit.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    /// The configured timezone table, or the bundled one when none is configured.
    pub fn timezone_table(&self) -> Result<TimezoneTable, ConfigError> {
        match &self.timezones.table_path {
            Some(path) => Ok(TimezoneTable::load(path)?),
            None => Ok(TimezoneTable::bundled().clone()),
        }
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }

        if let Some(timezones) = patch.timezones {
            if let Some(table_path) = timezones.table_path {
                self.timezones.table_path = Some(table_path);
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("BLOCKKIT_LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = read_env("BLOCKKIT_LOG_FORMAT") {
            self.logging.format = value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "BLOCKKIT_LOG_FORMAT".to_string(),
                value,
            })?;
        }
        if let Some(value) = read_env("BLOCKKIT_TIMEZONE_TABLE") {
            self.timezones.table_path = Some(PathBuf::from(value));
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(log_format) = overrides.log_format {
            self.logging.format = log_format;
        }
        if let Some(timezone_table) = overrides.timezone_table {
            self.timezones.table_path = Some(timezone_table);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_logging(&self.logging)?;
        validate_timezones(&self.timezones)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("blockkit.toml"), PathBuf::from("config/blockkit.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    toml::from_str::<ConfigPatch>(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn validate_timezones(timezones: &TimezoneConfig) -> Result<(), ConfigError> {
    if let Some(path) = &timezones.table_path {
        if !path.is_file() {
            return Err(ConfigError::Validation(format!(
                "timezones.table_path `{}` does not point to a file",
                path.display()
            )));
        }
    }

    Ok(())
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    logging: Option<LoggingPatch>,
    timezones: Option<TimezonesPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct TimezonesPatch {
    table_path: Option<PathBuf>,
}
