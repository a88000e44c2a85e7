//! Report Configuration
//!
//! Read from environment variables:
//! - `ECO_FORMAT`: `markdown` (default), `json`, or `summary` (one-line JSON)
//! - `ECO_PROFILE`: path to a JSON profile (optional)

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown output format '{0}' (expected markdown, json or summary)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Summary,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "summary" => Ok(OutputFormat::Summary),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportConfig {
    pub format: OutputFormat,
    pub profile: Option<PathBuf>,
}

impl ReportConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("ECO_FORMAT") {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => OutputFormat::default(),
        };

        let profile = lookup("ECO_PROFILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(ReportConfig { format, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ReportConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_values() {
        let config = ReportConfig::from_lookup(lookup(&[
            ("ECO_FORMAT", "JSON"),
            ("ECO_PROFILE", "profiles/commuter.json"),
        ]))
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.profile, Some(PathBuf::from("profiles/commuter.json")));
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(" Summary ".parse::<OutputFormat>(), Ok(OutputFormat::Summary));
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
    }

    #[test]
    fn test_unknown_format() {
        let err = ReportConfig::from_lookup(lookup(&[("ECO_FORMAT", "yaml")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownFormat("yaml".to_string()));
    }
}
