//! Rule chains
//!
//! A [`ChainBuilder`] collects rules; [`ChainBuilder::bond`] freezes them into
//! a [`Chain`]. Evaluation walks the rules in insertion order and stops at the
//! first one that does not hold.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use chain_validator::prelude::*;
//!
//! struct Person {
//!     name: String,
//!     surname: String,
//! }
//!
//! let sink = Arc::new(MemorySink::new());
//! let chain = ChainBuilder::<Person>::new()
//!     .link_with_message(|p| &p.name, |n| n == "Mauro", "bad name")
//!     .link_with_message(|p| &p.surname, |s| s == "Bianchi", "bad surname")
//!     .with_shared_sink(sink.clone())
//!     .bond();
//!
//! let mario = Person { name: "Mario".into(), surname: "Rossi".into() };
//! assert_eq!(chain.evaluate(Some(&mario)), Ok(false));
//! assert_eq!(sink.messages(), vec!["bad name".to_string()]);
//! ```

mod builder;
mod evaluate;

pub use builder::ChainBuilder;
pub use evaluate::{Chain, Failure, Verdict};
