//! Fluent builder for rule chains

use std::sync::Arc;

use crate::combinators::{DerivedRule, FieldRule};
use crate::config::ChainConfig;
use crate::foundation::{BoxedRule, ChainError, ChainResult, Rule};
use crate::sink::{DiagnosticSink, TracingSink};

use super::Chain;

/// Accumulates rules in insertion order and finalizes them into a [`Chain`].
///
/// A builder either carries a bound subject ([`ChainBuilder::of`]) or leaves
/// the subject to evaluation time ([`ChainBuilder::new`]). [`bond`](Self::bond)
/// consumes the builder, so a finished chain can never gain or lose rules.
///
/// # Examples
///
/// ```rust
/// use chain_validator::prelude::*;
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let chain = ChainBuilder::<Person>::new()
///     .link(|p| &p.name, |name| name == "Mario")
///     .link_with_message(|p| &p.age, |age| *age > 18, "must be an adult")
///     .with_sink(NoopSink)
///     .bond();
///
/// let mario = Person { name: "Mario".into(), age: 25 };
/// assert_eq!(chain.check(&mario), Ok(true));
/// ```
pub struct ChainBuilder<'s, E: ?Sized> {
    subject: Option<&'s E>,
    rules: Vec<BoxedRule<'s, E>>,
    sink: Arc<dyn DiagnosticSink>,
    config: ChainConfig,
}

impl<'s, E: ?Sized> ChainBuilder<'s, E> {
    /// Creates a builder whose subject is supplied at evaluation time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subject: None,
            rules: Vec::new(),
            sink: Arc::new(TracingSink),
            config: ChainConfig::default(),
        }
    }

    /// Creates a builder bound to `subject`.
    #[must_use]
    pub fn of(subject: &'s E) -> Self {
        Self {
            subject: Some(subject),
            ..Self::new()
        }
    }

    /// Creates a bound builder from an optional subject.
    ///
    /// Fails with [`ChainError::InvalidArgument`] when `subject` is `None`.
    pub fn try_of(subject: Option<&'s E>) -> ChainResult<Self> {
        subject
            .map(Self::of)
            .ok_or(ChainError::invalid_argument("subject"))
    }

    /// Appends a rule over a value borrowed from the subject.
    #[must_use = "builder methods must be chained or built"]
    pub fn link<U, F, P>(self, projection: F, predicate: P) -> Self
    where
        U: ?Sized + 's,
        F: Fn(&E) -> &U + Send + Sync + 's,
        P: Fn(&U) -> bool + Send + Sync + 's,
    {
        self.rule(FieldRule::new(projection, predicate))
    }

    /// Appends a rule over a borrowed value that reports `message` on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn link_with_message<U, F, P>(
        self,
        projection: F,
        predicate: P,
        message: impl Into<String>,
    ) -> Self
    where
        U: ?Sized + 's,
        F: Fn(&E) -> &U + Send + Sync + 's,
        P: Fn(&U) -> bool + Send + Sync + 's,
    {
        self.rule(FieldRule::with_message(projection, predicate, message))
    }

    /// Appends a rule over a value computed from the subject.
    #[must_use = "builder methods must be chained or built"]
    pub fn link_map<O, F, P>(self, projection: F, predicate: P) -> Self
    where
        O: 's,
        F: Fn(&E) -> O + Send + Sync + 's,
        P: Fn(&O) -> bool + Send + Sync + 's,
    {
        self.rule(DerivedRule::new(projection, predicate))
    }

    /// Appends a computed-value rule that reports `message` on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn link_map_with_message<O, F, P>(
        self,
        projection: F,
        predicate: P,
        message: impl Into<String>,
    ) -> Self
    where
        O: 's,
        F: Fn(&E) -> O + Send + Sync + 's,
        P: Fn(&O) -> bool + Send + Sync + 's,
    {
        self.rule(DerivedRule::with_message(projection, predicate, message))
    }

    /// Appends a caller-defined rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<E> + Send + Sync + 's,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a rule from optional parts.
    ///
    /// Fails with [`ChainError::InvalidArgument`] naming `"projection"` or
    /// `"predicate"` when either is `None`; the rule sequence is left
    /// untouched in that case.
    pub fn push<U, F, P>(
        &mut self,
        projection: Option<F>,
        predicate: Option<P>,
        message: Option<&str>,
    ) -> ChainResult<&mut Self>
    where
        U: ?Sized + 's,
        F: Fn(&E) -> &U + Send + Sync + 's,
        P: Fn(&U) -> bool + Send + Sync + 's,
    {
        let projection = projection.ok_or(ChainError::invalid_argument("projection"))?;
        let predicate = predicate.ok_or(ChainError::invalid_argument("predicate"))?;
        let rule = match message {
            Some(message) => FieldRule::with_message(projection, predicate, message),
            None => FieldRule::new(projection, predicate),
        };
        self.rules.push(Box::new(rule));
        Ok(self)
    }

    /// Replaces the default [`TracingSink`] with an owned sink.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink(self, sink: impl DiagnosticSink + 'static) -> Self {
        self.with_shared_sink(Arc::new(sink))
    }

    /// Replaces the default [`TracingSink`] with a sink the caller keeps a
    /// handle to. The `Arc` is stored as is.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shared_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the default [`ChainConfig`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ChainConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of rules registered so far.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule has been registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns `true` if the builder carries a bound subject.
    pub fn is_bound(&self) -> bool {
        self.subject.is_some()
    }

    /// Freezes the rules into a [`Chain`].
    #[must_use = "a bonded chain does nothing until evaluated"]
    pub fn bond(self) -> Chain<'s, E> {
        Chain::new(
            self.subject,
            self.rules.into_boxed_slice(),
            self.sink,
            self.config,
        )
    }
}

impl<E: ?Sized> Default for ChainBuilder<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> std::fmt::Debug for ChainBuilder<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("bound", &self.subject.is_some())
            .field("rules", &self.rules.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
