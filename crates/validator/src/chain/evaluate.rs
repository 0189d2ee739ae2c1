//! Chain evaluation

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::config::{ChainConfig, FaultPolicy};
use crate::foundation::{BoxedRule, ChainError, ChainResult};
use crate::sink::{DiagnosticSink, Severity};

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every rule held (or the chain is empty).
    Passed,
    /// A rule did not hold; later rules were not run.
    Failed(Failure),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Passed`].
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// The failing rule, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Passed => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

/// The first rule that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Position of the rule in the chain.
    pub index: usize,
    /// The rule's diagnostic message, if it has one.
    pub message: Option<String>,
    /// Panic text when the rule faulted instead of returning `false`.
    pub fault: Option<String>,
}

// ============================================================================
// CHAIN
// ============================================================================

/// An immutable, ordered sequence of rules.
///
/// Built by [`ChainBuilder::bond`](super::ChainBuilder::bond). A chain keeps
/// no state between evaluations, so it can be shared (e.g. through `Arc`)
/// and evaluated concurrently as long as the rules themselves are pure.
pub struct Chain<'s, E: ?Sized> {
    subject: Option<&'s E>,
    rules: Box<[BoxedRule<'s, E>]>,
    sink: Arc<dyn DiagnosticSink>,
    config: ChainConfig,
}

impl<'s, E: ?Sized> Chain<'s, E> {
    pub(super) fn new(
        subject: Option<&'s E>,
        rules: Box<[BoxedRule<'s, E>]>,
        sink: Arc<dyn DiagnosticSink>,
        config: ChainConfig,
    ) -> Self {
        Self {
            subject,
            rules,
            sink,
            config,
        }
    }

    /// Evaluates the chain.
    ///
    /// A bound chain ignores `subject` and uses the subject it was built
    /// with. An unbound chain requires `subject` and fails with
    /// [`ChainError::InvalidArgument`] when it is `None`.
    pub fn evaluate(&self, subject: Option<&E>) -> ChainResult<bool> {
        let subject = self
            .subject
            .or(subject)
            .ok_or(ChainError::invalid_argument("subject"))?;
        self.check(subject)
    }

    /// Evaluates the chain against the bound subject.
    ///
    /// Fails with [`ChainError::InvalidArgument`] on an unbound chain.
    pub fn validate(&self) -> ChainResult<bool> {
        self.evaluate(None)
    }

    /// Evaluates the chain against `subject`, ignoring any bound subject.
    pub fn check(&self, subject: &E) -> ChainResult<bool> {
        self.verdict(subject).map(|verdict| verdict.is_passed())
    }

    /// Evaluates the chain against `subject` and reports which rule failed.
    ///
    /// Rules run in insertion order. The first rule that returns `false`
    /// stops evaluation; its message, if any, is emitted to the sink once.
    /// A panicking rule is handled according to the chain's
    /// [`FaultPolicy`].
    ///
    /// Unwinding is caught, but the process-wide panic hook has already run
    /// by then. With the default hook the panic message (and a backtrace
    /// when `RUST_BACKTRACE` is set) is printed to stderr in addition to the
    /// sink diagnostic. Applications that want the sink to be the only
    /// report install their own hook with [`std::panic::set_hook`].
    pub fn verdict(&self, subject: &E) -> ChainResult<Verdict> {
        for (index, rule) in self.rules.iter().enumerate() {
            match panic::catch_unwind(AssertUnwindSafe(|| rule.test_against(subject))) {
                Ok(true) => {}
                Ok(false) => {
                    let message = rule.message().map(str::to_owned);
                    if let Some(message) = &message {
                        self.sink.emit(self.config.failure_severity, message);
                    }
                    return Ok(Verdict::Failed(Failure {
                        index,
                        message,
                        fault: None,
                    }));
                }
                Err(payload) => {
                    let fault = panic_message(payload.as_ref());
                    return match self.config.fault_policy {
                        FaultPolicy::Propagate => Err(ChainError::RuleFault {
                            index,
                            message: fault,
                        }),
                        FaultPolicy::Fail => {
                            self.sink.emit(Severity::Error, &fault);
                            Ok(Verdict::Failed(Failure {
                                index,
                                message: rule.message().map(str::to_owned),
                                fault: Some(fault),
                            }))
                        }
                    };
                }
            }
        }
        Ok(Verdict::Passed)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns `true` if the chain was built with a bound subject.
    pub fn is_bound(&self) -> bool {
        self.subject.is_some()
    }

    /// The chain's configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// The sink receiving this chain's diagnostics.
    pub fn sink(&self) -> &Arc<dyn DiagnosticSink> {
        &self.sink
    }
}

impl<E: ?Sized> std::fmt::Debug for Chain<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("bound", &self.subject.is_some())
            .field("rules", &self.rules.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Best-effort text for a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "rule panicked".to_owned()
    }
}
