//! Error types for chain construction and evaluation
//!
//! A predicate returning `false` is not an error. It is reported through the
//! boolean result of an evaluation (and optionally a diagnostic). The types in
//! this module cover precondition violations and, when configured, faults
//! raised by caller-supplied closures.

use thiserror::Error;

/// Errors surfaced by [`ChainBuilder`](crate::chain::ChainBuilder) and
/// [`Chain`](crate::chain::Chain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A required argument was absent at the call that needed it.
    ///
    /// `argument` is one of `"subject"`, `"projection"` or `"predicate"`.
    #[error("{argument} must not be absent")]
    InvalidArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// A projection or predicate panicked while the chain ran under
    /// [`FaultPolicy::Propagate`](crate::config::FaultPolicy::Propagate).
    #[error("rule #{index} faulted: {message}")]
    RuleFault {
        /// Position of the faulting rule in the chain.
        index: usize,
        /// Text recovered from the panic payload.
        message: String,
    },
}

impl ChainError {
    pub(crate) const fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }

    /// Returns `true` for [`ChainError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Name of the offending argument, if this is an `InvalidArgument`.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { argument } => Some(*argument),
            Self::RuleFault { .. } => None,
        }
    }
}

/// Errors raised while loading a [`ChainConfig`](crate::config::ChainConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON or did not match the config shape.
    #[error("invalid chain config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_names_argument() {
        let err = ChainError::invalid_argument("projection");
        assert_eq!(err.to_string(), "projection must not be absent");
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument(), Some("projection"));
    }

    #[test]
    fn rule_fault_display() {
        let err = ChainError::RuleFault {
            index: 2,
            message: "index out of bounds".into(),
        };
        assert_eq!(err.to_string(), "rule #2 faulted: index out of bounds");
        assert!(!err.is_invalid_argument());
        assert_eq!(err.argument(), None);
    }
}
