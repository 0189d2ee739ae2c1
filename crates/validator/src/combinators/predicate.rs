//! Predicate combinators - logical composition of plain `Fn(&T) -> bool`
//!
//! These build the predicate half of a rule. Composition short-circuits the
//! same way `&&` and `||` do.
//!
//! # Examples
//!
//! ```rust
//! use chain_validator::combinators::predicate::{PredicateExt, eq};
//!
//! let knows_rust = |skills: &Vec<&str>| skills.contains(&"Rust");
//! let knows_two = |skills: &Vec<&str>| skills.len() >= 2;
//! let senior = knows_rust.and(knows_two);
//!
//! assert!(senior(&vec!["Rust", "C++"]));
//! assert!(!senior(&vec!["Rust"]));
//! assert!(eq::<i32, _>(5)(&5));
//! ```

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Both predicates must hold. `right` is skipped when `left` fails.
pub fn all<T, L, R>(left: L, right: R) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    L: Fn(&T) -> bool,
    R: Fn(&T) -> bool,
{
    move |value: &T| left(value) && right(value)
}

/// At least one predicate must hold. `right` is skipped when `left` passes.
pub fn any<T, L, R>(left: L, right: R) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    L: Fn(&T) -> bool,
    R: Fn(&T) -> bool,
{
    move |value: &T| left(value) || right(value)
}

/// Inverts a predicate.
pub fn not<T, P>(inner: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value: &T| !inner(value)
}

/// Equality with a fixed value.
pub fn eq<T, V>(expected: V) -> impl Fn(&T) -> bool
where
    T: PartialEq<V> + ?Sized,
{
    move |value: &T| *value == expected
}

/// Always holds. Handy as a placeholder while a chain is being assembled.
pub fn always<T: ?Sized>() -> impl Fn(&T) -> bool {
    |_: &T| true
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Fluent `.and()` / `.or()` / `.negate()` on any predicate closure.
pub trait PredicateExt<T: ?Sized>: Fn(&T) -> bool + Sized {
    /// Logical AND, short-circuiting on the first `false`.
    fn and<R>(self, other: R) -> impl Fn(&T) -> bool
    where
        R: Fn(&T) -> bool,
    {
        all(self, other)
    }

    /// Logical OR, short-circuiting on the first `true`.
    fn or<R>(self, other: R) -> impl Fn(&T) -> bool
    where
        R: Fn(&T) -> bool,
    {
        any(self, other)
    }

    /// Logical NOT.
    fn negate(self) -> impl Fn(&T) -> bool {
        not(self)
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> PredicateExt<T> for F {}
