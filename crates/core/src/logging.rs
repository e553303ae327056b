use tracing::Level;

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::LoggingError;

/// Installs the global fmt subscriber described by `config`.
///
/// Unknown levels fall back to `info`. Fails instead of panicking when a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let level = config.level.trim().parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt().with_target(false).with_max_level(level);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|error| LoggingError::Install(error.to_string()))
}
