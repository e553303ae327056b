use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimezoneTableError {
    #[error("could not read timezone table `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse timezone table `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("could not parse timezone table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("timezone table contains no zones")]
    Empty,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not install tracing subscriber: {0}")]
    Install(String),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{LoggingError, TimezoneTableError};

    #[test]
    fn read_failure_names_the_path() {
        let error = TimezoneTableError::ReadFile {
            path: PathBuf::from("zones.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "could not read timezone table `zones.json`: missing");
    }

    #[test]
    fn logging_error_carries_cause() {
        let error = LoggingError::Install("already set".to_owned());
        assert!(error.to_string().contains("already set"));
    }
}
