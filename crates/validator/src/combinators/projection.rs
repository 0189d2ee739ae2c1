//! Projection helpers - reach into nested values
//!
//! A projection chained through another projection is still a projection, so
//! `compose(|p: &Person| &p.address, |a: &Address| &a.city)` can be handed to
//! [`ChainBuilder::link`](crate::chain::ChainBuilder::link) directly.

/// Pins a closure to the higher-ranked borrowed-projection signature.
fn borrowed<E, U, F>(f: F) -> F
where
    E: ?Sized,
    U: ?Sized,
    F: Fn(&E) -> &U,
{
    f
}

/// Applies `outer`, then `inner` to its result.
///
/// The intermediate type `M` must be `'static`: the composed closure has to
/// accept every borrow of the subject.
pub fn compose<E, M, U, F, G>(outer: F, inner: G) -> impl Fn(&E) -> &U
where
    E: ?Sized,
    M: ?Sized + 'static,
    U: ?Sized,
    F: Fn(&E) -> &M,
    G: Fn(&M) -> &U,
{
    borrowed(move |subject: &E| inner(outer(subject)))
}

/// Applies a borrowed projection, then computes an owned value from it.
pub fn then<E, M, O, F, G>(outer: F, compute: G) -> impl Fn(&E) -> O
where
    E: ?Sized,
    M: ?Sized,
    F: Fn(&E) -> &M,
    G: Fn(&M) -> O,
{
    move |subject: &E| compute(outer(subject))
}

/// Projects the subject onto itself.
pub fn identity<E: ?Sized>() -> impl Fn(&E) -> &E {
    borrowed(|subject: &E| subject)
}
