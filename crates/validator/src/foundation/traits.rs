//! Core traits for the rule system
//!
//! Every entry stored in a [`Chain`](crate::chain::Chain) is a [`Rule`]. The
//! trait hides the projected value's type, so a chain holds a homogeneous
//! sequence of boxed rules no matter what each rule projects to.

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A single check against a subject of type `E`.
///
/// Implementations close over their own projection and predicate. The
/// projected value never leaves [`test_against`](Rule::test_against).
///
/// # Examples
///
/// ```rust
/// use chain_validator::foundation::Rule;
///
/// struct Adult;
///
/// impl Rule<u32> for Adult {
///     fn test_against(&self, age: &u32) -> bool {
///         *age >= 18
///     }
///
///     fn message(&self) -> Option<&str> {
///         Some("must be an adult")
///     }
/// }
///
/// assert!(Adult.test_against(&30));
/// assert!(!Adult.test_against(&12));
/// ```
pub trait Rule<E: ?Sized> {
    /// Runs the rule against `subject`.
    ///
    /// Returns `true` when the predicate holds on the projected value.
    fn test_against(&self, subject: &E) -> bool;

    /// Diagnostic reported when this rule fails.
    ///
    /// `None` means the rule fails silently.
    fn message(&self) -> Option<&str> {
        None
    }
}

impl<E: ?Sized, R: Rule<E> + ?Sized> Rule<E> for Box<R> {
    fn test_against(&self, subject: &E) -> bool {
        (**self).test_against(subject)
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }
}

/// Boxed rule as stored inside a chain.
pub type BoxedRule<'r, E> = Box<dyn Rule<E> + Send + Sync + 'r>;

// ============================================================================
// MESSAGE NORMALIZATION
// ============================================================================

/// Drops blank messages so "no diagnostic" has a single representation.
pub(crate) fn normalize_message(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}
