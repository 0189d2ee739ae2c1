//! Prelude module for convenient imports.
//!
//! ```rust
//! use chain_validator::prelude::*;
//!
//! let chain = ChainBuilder::<str>::new()
//!     .link_map(str::len, |len| *len > 3)
//!     .with_sink(NoopSink)
//!     .bond();
//! assert_eq!(chain.check("hello"), Ok(true));
//! ```

pub use crate::chain::{Chain, ChainBuilder, Failure, Verdict};
pub use crate::combinators::predicate::{all, always, any, eq, not};
pub use crate::combinators::projection::{compose, identity, then};
pub use crate::combinators::{DerivedRule, FieldRule, PredicateExt, derived, field};
pub use crate::config::{ChainConfig, FaultPolicy};
pub use crate::foundation::{ChainError, ChainResult, Rule};
pub use crate::sink::{DiagnosticSink, MemorySink, NoopSink, Severity, TracingSink};
