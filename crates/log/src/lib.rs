//! # chain-validator-log
//!
//! Installs a `tracing` subscriber so chain diagnostics (target
//! `chain_validator`) end up on stderr.
//!
//! ```rust,no_run
//! fn main() -> Result<(), chain_validator_log::LogError> {
//!     chain_validator_log::auto_init()?;
//!     chain_validator_log::info!("ready");
//!     Ok(())
//! }
//! ```

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};

/// Environment variable names read by [`Config::from_env`].
pub mod env {
    pub use crate::config::presets::{LOG_ENV, LOG_FORMAT_ENV, RUST_LOG_ENV};
}

/// Pick a configuration from the environment and install it
///
/// `CHAIN_LOG` or `RUST_LOG` set → [`Config::from_env`]; otherwise
/// [`Config::development`] in debug builds and [`Config::production`] in
/// release builds.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn auto_init() -> LogResult<()> {
    if std::env::var(env::LOG_ENV).is_ok() || std::env::var(env::RUST_LOG_ENV).is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<()> {
    init_with(Config::default())
}

/// Initialize with custom configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

#[cfg(test)]
mod tests {
    #[test]
    fn tracing_macros_are_reexported() {
        crate::info!(target: "chain_validator", "no subscriber installed");
        crate::debug!(answer = 42, "structured field");
        let span = crate::span!(crate::Level::TRACE, "evaluation");
        let _entered = span.enter();
        crate::warn!("inside span");
    }
}
