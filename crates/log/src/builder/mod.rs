//! Logger builder implementation
//!
//! - `format`: format layer creation macros

#[macro_use]
mod format;

// External dependencies
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

// Internal crates
use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Installs `Registry + filter + fmt` as the global default.
macro_rules! init_subscriber {
    ($filter:expr, $fmt_layer:expr) => {{
        Registry::default()
            .with($filter)
            .with($fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this builder will install.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the configured filter directives.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the directive string cannot be parsed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already set
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let display = &self.config.display;

        match self.config.format {
            Format::Pretty => init_subscriber!(filter, create_fmt_layer!(pretty, display)),
            Format::Compact => init_subscriber!(filter, create_fmt_layer!(compact, display)),
            Format::Json => init_subscriber!(filter, create_json_layer!(display)),
        }
    }
}
