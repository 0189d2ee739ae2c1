//! Chain configuration

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;
use crate::sink::Severity;

/// What happens when a projection or predicate panics during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// The panic counts as a failed rule: it is reported to the sink, the
    /// chain short-circuits and evaluates to `false`.
    ///
    /// The global panic hook still runs before the panic is caught; the
    /// default hook prints to stderr. Replace it with
    /// [`std::panic::set_hook`] to keep the sink as the only report.
    #[default]
    Fail,
    /// The panic is returned to the caller as
    /// [`ChainError::RuleFault`](crate::foundation::ChainError::RuleFault).
    Propagate,
}

/// Evaluation settings shared by every rule of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Policy for panicking projections and predicates.
    pub fault_policy: FaultPolicy,

    /// Severity used when reporting a failing rule's message.
    pub failure_severity: Severity,
}

impl ChainConfig {
    /// Parses a config from JSON. Missing keys take their defaults.
    ///
    /// ```rust
    /// use chain_validator::config::{ChainConfig, FaultPolicy};
    ///
    /// let config = ChainConfig::from_json_str(r#"{ "fault_policy": "propagate" }"#).unwrap();
    /// assert_eq!(config.fault_policy, FaultPolicy::Propagate);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the fault policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }

    /// Sets the severity for failing-rule diagnostics.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_failure_severity(mut self, severity: Severity) -> Self {
        self.failure_severity = severity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ChainConfig::default();
        assert_eq!(config.fault_policy, FaultPolicy::Fail);
        assert_eq!(config.failure_severity, Severity::Error);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = ChainConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ChainConfig::default());
    }

    #[test]
    fn full_document() {
        let config = ChainConfig::from_json_str(
            r#"{ "fault_policy": "propagate", "failure_severity": "warning" }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            ChainConfig::default()
                .with_fault_policy(FaultPolicy::Propagate)
                .with_failure_severity(Severity::Warning)
        );
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = ChainConfig::from_json_str(r#"{ "fault_policy": "retry" }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid chain config"));
    }
}
