//! Core rule types and traits
//!
//! - **Traits**: [`Rule`]
//! - **Errors**: [`ChainError`], [`ConfigError`]
//!
//! Rules are stored type-erased as [`BoxedRule`]. Each rule owns its optional
//! diagnostic message, so there is no side table keyed by rule identity.

pub mod error;
pub mod traits;

pub use error::{ChainError, ChainResult, ConfigError};
pub use traits::{BoxedRule, Rule};

pub(crate) use traits::normalize_message;
