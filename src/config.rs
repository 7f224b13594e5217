//! YAML configuration for the spec intake application.
//!
//! Every section has defaults, so an empty document (or no file at all) is a
//! working configuration.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "northstar-lms"
//!
//! logging:
//!   level: "info"        # off | error | warn | info | debug | trace
//!   format: "pretty"     # pretty | compact | json
//!
//! demo:
//!   - content: "This is a basic specification for testing the system functionality."
//!     format: "text"
//!   - content: "x"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional deployment name, echoed in the startup log event
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Submissions processed by the `demo` command
    #[serde(default = "default_demo")]
    pub demo: Vec<DemoSubmission>,
}

impl AppConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        // serde_yaml reads an empty document as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.logging.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: None,
            logging: LoggingConfig::default(),
            demo: default_demo(),
        }
    }
}

/// Output style of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// The configured level as a filter.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigLoadError> {
        self.level.parse::<LevelFilter>().map_err(|_| {
            ConfigLoadError::Validation(format!(
                "logging.level must be one of off, error, warn, info, debug, trace (got '{}')",
                self.level
            ))
        })
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.level_filter().map(|_| ())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// One demo submission. An absent format means `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSubmission {
    pub content: String,
    #[serde(default)]
    pub format: String,
}

impl DemoSubmission {
    pub fn new(content: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            format: format.into(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_demo() -> Vec<DemoSubmission> {
    vec![
        DemoSubmission::new(
            "This is a basic specification for testing the system functionality.",
            "text",
        ),
        DemoSubmission::new(
            "# Test Specification\n\nThis is a **markdown** specification with formatting.",
            "markdown",
        ),
        DemoSubmission::new("x", "text"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
logging:
  level: "debug"
  format: "json"
demo:
  - content: "<script>x</script>Lesson plan"
    format: "HTML"
  - content: "no format given"
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.demo.len(), 2);
        assert_eq!(config.demo[0].format, "HTML");
        assert_eq!(config.demo[1].format, "");
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
logging:
  level: "warn"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::WARN);
        assert_eq!(config.demo, default_demo());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = AppConfig::from_file("/nonexistent/spec-intake.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.demo.len(), 3);
        assert_eq!(AppConfig::from_yaml("").unwrap(), config);
    }

    #[test]
    fn test_unsupported_version() {
        let result = AppConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_log_level_validation() {
        let yaml = r#"
version: "1.0"
logging:
  level: "loud"
"#;

        let result = AppConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("logging.level"));
    }
}
