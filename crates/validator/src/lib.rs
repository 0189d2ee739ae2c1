//! # chain-validator
//!
//! Declarative validation of a domain value through an ordered chain of
//! rules. Each rule projects a value out of the subject and tests a predicate
//! on it; evaluation stops at the first rule that does not hold and reports
//! that rule's message, if it has one.
//!
//! ## Quick Start
//!
//! ```rust
//! use chain_validator::prelude::*;
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//!     developer: bool,
//! }
//!
//! let mario = Person { name: "Mario".into(), age: 25, developer: false };
//!
//! let chain = ChainBuilder::of(&mario)
//!     .link(|p| &p.name, |name| name == "Mario")
//!     .link(|p| &p.age, |age| *age > 18)
//!     .link_with_message(|p| &p.developer, |dev| *dev, "The person must be a developer!")
//!     .bond();
//!
//! assert_eq!(chain.validate(), Ok(false));
//! ```
//!
//! ## Diagnostics
//!
//! Failing-rule messages go to a [`DiagnosticSink`](sink::DiagnosticSink).
//! The default [`TracingSink`](sink::TracingSink) emits `tracing` events under
//! the `chain_validator` target; install a subscriber (for example with
//! `chain-validator-log`) to see them.
//!
//! ## Faults
//!
//! A projection or predicate that panics is contained: by default the rule
//! counts as failed and the panic text is reported. Set
//! [`FaultPolicy::Propagate`](config::FaultPolicy::Propagate) to receive it as
//! [`ChainError::RuleFault`](foundation::ChainError::RuleFault) instead.

pub mod chain;
pub mod combinators;
pub mod config;
pub mod foundation;
pub mod prelude;
pub mod sink;
