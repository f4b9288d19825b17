//! Visitor traits.
//!
//! A visitor implements one of these traits for every alternative it can be
//! dispatched on, usually through a single generic impl. All impls reachable
//! from one dispatch must agree on `Output`; the table impls enforce that at
//! compile time.

/// Called with a shared reference to the live alternative.
pub trait Visit<A> {
    /// Result of the visit; identical for every alternative of a list.
    type Output;

    /// Visits `value`.
    fn visit(&mut self, value: &A) -> Self::Output;
}

/// Called with an exclusive reference to the live alternative.
pub trait VisitMut<A> {
    /// Result of the visit; identical for every alternative of a list.
    type Output;

    /// Visits `value`.
    fn visit_mut(&mut self, value: &mut A) -> Self::Output;
}

/// Called with the live alternatives of two containers known to share a slot.
pub trait VisitPair<A> {
    /// Result of the visit.
    type Output;

    /// Visits both values of slot type `A`.
    fn visit_pair(&mut self, lhs: &A, rhs: &A) -> Self::Output;
}

/// Like [`VisitPair`], with the left-hand value borrowed exclusively.
pub trait VisitPairMut<A> {
    /// Result of the visit.
    type Output;

    /// Visits both values of slot type `A`.
    fn visit_pair_mut(&mut self, lhs: &mut A, rhs: &A) -> Self::Output;
}

/// Called with the live alternatives of two independent containers.
///
/// Must be implemented for every pair in the product of both lists.
pub trait Visit2<A, B> {
    /// Result of the visit; identical across the whole product.
    type Output;

    /// Visits one value from each container.
    fn visit2(&mut self, a: &A, b: &B) -> Self::Output;
}

/// Called with the live alternatives of three independent containers.
pub trait Visit3<A, B, C> {
    /// Result of the visit; identical across the whole product.
    type Output;

    /// Visits one value from each container.
    fn visit3(&mut self, a: &A, b: &B, c: &C) -> Self::Output;
}
