//! FIELD rules - project a value out of the subject and test it
//!
//! [`FieldRule`] borrows the projected value from the subject (`&p.name`),
//! [`DerivedRule`] computes an owned value (`p.name.len()`). Both erase the
//! projected type behind [`Rule`].

use crate::foundation::{Rule, normalize_message};
use std::marker::PhantomData;

// ============================================================================
// FIELD RULE
// ============================================================================

/// Rule over a value borrowed from the subject.
///
/// # Type Parameters
///
/// * `E` - The subject type
/// * `U` - The projected type (can be `?Sized`)
/// * `F` - The projection `Fn(&E) -> &U`
/// * `P` - The predicate `Fn(&U) -> bool`
pub struct FieldRule<E, U, F, P>
where
    E: ?Sized,
    U: ?Sized,
{
    projection: F,
    predicate: P,
    message: Option<String>,
    _phantom: PhantomData<fn(&E) -> &U>,
}

impl<E, U, F, P> FieldRule<E, U, F, P>
where
    E: ?Sized,
    U: ?Sized,
    F: Fn(&E) -> &U,
    P: Fn(&U) -> bool,
{
    /// Creates a rule without a diagnostic message.
    pub fn new(projection: F, predicate: P) -> Self {
        Self {
            projection,
            predicate,
            message: None,
            _phantom: PhantomData,
        }
    }

    /// Creates a rule reporting `message` when it fails.
    ///
    /// A blank message is treated as absent.
    pub fn with_message(projection: F, predicate: P, message: impl Into<String>) -> Self {
        Self {
            projection,
            predicate,
            message: normalize_message(Some(message.into())),
            _phantom: PhantomData,
        }
    }

    /// Extracts the projection, predicate and message.
    pub fn into_parts(self) -> (F, P, Option<String>) {
        (self.projection, self.predicate, self.message)
    }
}

impl<E, U, F, P> Rule<E> for FieldRule<E, U, F, P>
where
    E: ?Sized,
    U: ?Sized,
    F: Fn(&E) -> &U,
    P: Fn(&U) -> bool,
{
    fn test_against(&self, subject: &E) -> bool {
        (self.predicate)((self.projection)(subject))
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

// Clone impl - manual because E and U need not be Clone
impl<E, U, F, P> Clone for FieldRule<E, U, F, P>
where
    E: ?Sized,
    U: ?Sized,
    F: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            projection: self.projection.clone(),
            predicate: self.predicate.clone(),
            message: self.message.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<E, U, F, P> std::fmt::Debug for FieldRule<E, U, F, P>
where
    E: ?Sized,
    U: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("projection", &"<function>")
            .field("predicate", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

// ============================================================================
// DERIVED RULE
// ============================================================================

/// Rule over a value computed from the subject.
///
/// Use this when the projection cannot hand out a borrow, e.g. a length,
/// a sum, or a freshly built string.
pub struct DerivedRule<E, O, F, P>
where
    E: ?Sized,
{
    projection: F,
    predicate: P,
    message: Option<String>,
    _phantom: PhantomData<fn(&E) -> O>,
}

impl<E, O, F, P> DerivedRule<E, O, F, P>
where
    E: ?Sized,
    F: Fn(&E) -> O,
    P: Fn(&O) -> bool,
{
    /// Creates a rule without a diagnostic message.
    pub fn new(projection: F, predicate: P) -> Self {
        Self {
            projection,
            predicate,
            message: None,
            _phantom: PhantomData,
        }
    }

    /// Creates a rule reporting `message` when it fails.
    pub fn with_message(projection: F, predicate: P, message: impl Into<String>) -> Self {
        Self {
            projection,
            predicate,
            message: normalize_message(Some(message.into())),
            _phantom: PhantomData,
        }
    }
}

impl<E, O, F, P> Rule<E> for DerivedRule<E, O, F, P>
where
    E: ?Sized,
    F: Fn(&E) -> O,
    P: Fn(&O) -> bool,
{
    fn test_against(&self, subject: &E) -> bool {
        let projected = (self.projection)(subject);
        (self.predicate)(&projected)
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl<E, O, F, P> Clone for DerivedRule<E, O, F, P>
where
    E: ?Sized,
    F: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            projection: self.projection.clone(),
            predicate: self.predicate.clone(),
            message: self.message.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<E, O, F, P> std::fmt::Debug for DerivedRule<E, O, F, P>
where
    E: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedRule")
            .field("projection", &"<function>")
            .field("predicate", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Creates a [`FieldRule`] without a message.
pub fn field<E, U, F, P>(projection: F, predicate: P) -> FieldRule<E, U, F, P>
where
    E: ?Sized,
    U: ?Sized,
    F: Fn(&E) -> &U,
    P: Fn(&U) -> bool,
{
    FieldRule::new(projection, predicate)
}

/// Creates a [`DerivedRule`] without a message.
pub fn derived<E, O, F, P>(projection: F, predicate: P) -> DerivedRule<E, O, F, P>
where
    E: ?Sized,
    F: Fn(&E) -> O,
    P: Fn(&O) -> bool,
{
    DerivedRule::new(projection, predicate)
}

// ============================================================================
// TESTS
// ============================================================================
