//! Building blocks for rules
//!
//! - [`field`]: [`FieldRule`] and [`DerivedRule`], the projection + predicate
//!   pairs stored by a chain
//! - [`predicate`]: logical composition of predicates
//! - [`projection`]: composition of projections

pub mod field;
pub mod predicate;
pub mod projection;

pub use field::{DerivedRule, FieldRule, derived, field};
pub use predicate::PredicateExt;
