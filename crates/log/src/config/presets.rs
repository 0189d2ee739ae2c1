//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

/// Primary filter variable.
pub const LOG_ENV: &str = "CHAIN_LOG";
/// Fallback filter variable.
pub const RUST_LOG_ENV: &str = "RUST_LOG";
/// Format variable (`pretty`, `compact`, `json`).
pub const LOG_FORMAT_ENV: &str = "CHAIN_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    ///
    /// `CHAIN_LOG` wins over `RUST_LOG`; `CHAIN_LOG_FORMAT` selects the format.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_ENV).or_else(|| lookup(RUST_LOG_ENV)) {
            config.level = level;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.format = format.parse().unwrap_or_default();
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn chain_log_wins_over_rust_log() {
        let config = Config::from_lookup(lookup(&[(LOG_ENV, "debug"), (RUST_LOG_ENV, "warn")]));
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn rust_log_is_fallback() {
        let config = Config::from_lookup(lookup(&[(RUST_LOG_ENV, "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("JSON", Format::Json)]
    #[case("compact", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn format_from_env(#[case] value: &str, #[case] expected: Format) {
        let config = Config::from_lookup(lookup(&[(LOG_FORMAT_ENV, value)]));
        assert_eq!(config.format, expected);
    }

    #[test]
    fn presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert!(Config::development().display.colors);
        assert_eq!(Config::production().format, Format::Json);
        assert_eq!(Config::production().level, "info");
    }

    #[test]
    fn deserializes_partial_document() {
        let config: Config = serde_json::from_str(r#"{ "format": "json" }"#).unwrap();
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.level, "info");
        assert!(config.display.target);
    }
}
