//! Logging configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Diagnostic logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Where to append the conversation transcript; `None` disables the
    /// file sink and transcript lines go to the tracing subscriber.
    #[serde(default = "default_transcript_path")]
    pub transcript_path: Option<PathBuf>,

    /// Tracing filter directive (e.g. "info", "stylist_intake=debug")
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_transcript_path() -> Option<PathBuf> {
    Some(PathBuf::from("session.log"))
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            transcript_path: default_transcript_path(),
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Validate the logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        if let Some(path) = &self.transcript_path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::EmptyTranscriptPath);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LoggingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.level, "info");
    }

    #[test]
    fn empty_level_fails_validation() {
        let config = LoggingConfig {
            level: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyLogLevel)
        ));
    }

    #[test]
    fn empty_transcript_path_fails_validation() {
        let config = LoggingConfig {
            transcript_path: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyTranscriptPath)
        ));
    }
}
