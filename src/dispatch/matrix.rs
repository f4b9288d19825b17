//! Matrix dispatch over two and three containers.
//!
//! The product table is never materialized. Dispatching on the first container
//! selects a row adapter; the row dispatches on the second container with the
//! first value bound, and so on until the last dimension calls the visitor.
//! Each step is one lookup in a single-container table, so a visit over K
//! containers costs K indexed calls, and every table involved is built once per
//! instantiation.
//!
//! The adapters hold raw pointers to the visitor and to the containers still to
//! be dispatched on. They are only constructed here, after every participant
//! has been checked for the valueless state, and never outlive the call.

use core::ptr;

use super::{Visit, Visit2, Visit3, Visitable};
use crate::lifetime::RawVariant;
use crate::list::Alternatives;

/// First dimension of a two-container visit.
#[doc(hidden)]
pub struct Rows2<V, L2: Alternatives> {
    visitor: *mut V,
    second: *const RawVariant<L2>,
}

/// Second dimension of a two-container visit, with the first value bound.
#[doc(hidden)]
pub struct Cell2<V, A> {
    visitor: *mut V,
    first: *const A,
}

impl<V, L2, A> Visit<A> for Rows2<V, L2>
where
    L2: Visitable<Cell2<V, A>>,
{
    type Output = <L2 as Visitable<Cell2<V, A>>>::Output;

    fn visit(&mut self, value: &A) -> Self::Output {
        let mut cell = Cell2 {
            visitor: self.visitor,
            first: ptr::from_ref(value),
        };
        // SAFETY: `second` is borrowed for the whole visit and was checked
        // for the valueless state before the first dimension was dispatched.
        unsafe { (*self.second).dispatch_unchecked(&mut cell) }
    }
}

impl<V, A, B> Visit<B> for Cell2<V, A>
where
    V: Visit2<A, B>,
{
    type Output = <V as Visit2<A, B>>::Output;

    fn visit(&mut self, value: &B) -> Self::Output {
        // SAFETY: the visitor is exclusively borrowed by the caller of `visit2`
        // and `first` points into the first container's live slot.
        unsafe { (*self.visitor).visit2(&*self.first, value) }
    }
}

/// First dimension of a three-container visit.
#[doc(hidden)]
pub struct Rows3<V, L2: Alternatives, L3: Alternatives> {
    visitor: *mut V,
    second: *const RawVariant<L2>,
    third: *const RawVariant<L3>,
}

/// Second dimension of a three-container visit.
#[doc(hidden)]
pub struct Cols3<V, A, L3: Alternatives> {
    visitor: *mut V,
    first: *const A,
    third: *const RawVariant<L3>,
}

/// Third dimension of a three-container visit.
#[doc(hidden)]
pub struct Cell3<V, A, B> {
    visitor: *mut V,
    first: *const A,
    second: *const B,
}

impl<V, L2, L3, A> Visit<A> for Rows3<V, L2, L3>
where
    L2: Visitable<Cols3<V, A, L3>>,
    L3: Alternatives,
{
    type Output = <L2 as Visitable<Cols3<V, A, L3>>>::Output;

    fn visit(&mut self, value: &A) -> Self::Output {
        let mut cols = Cols3 {
            visitor: self.visitor,
            first: ptr::from_ref(value),
            third: self.third,
        };
        // SAFETY: see `Rows2::visit`.
        unsafe { (*self.second).dispatch_unchecked(&mut cols) }
    }
}

impl<V, A, L3, B> Visit<B> for Cols3<V, A, L3>
where
    L3: Visitable<Cell3<V, A, B>>,
{
    type Output = <L3 as Visitable<Cell3<V, A, B>>>::Output;

    fn visit(&mut self, value: &B) -> Self::Output {
        let mut cell = Cell3 {
            visitor: self.visitor,
            first: self.first,
            second: ptr::from_ref(value),
        };
        // SAFETY: see `Rows2::visit`.
        unsafe { (*self.third).dispatch_unchecked(&mut cell) }
    }
}

impl<V, A, B, C> Visit<C> for Cell3<V, A, B>
where
    V: Visit3<A, B, C>,
{
    type Output = <V as Visit3<A, B, C>>::Output;

    fn visit(&mut self, value: &C) -> Self::Output {
        // SAFETY: see `Cell2::visit`.
        unsafe { (*self.visitor).visit3(&*self.first, &*self.second, value) }
    }
}

/// Visits the live values of two containers, or returns `None` if either is
/// valueless.
pub(crate) fn visit2<V, L1, L2>(
    visitor: &mut V,
    first: &RawVariant<L1>,
    second: &RawVariant<L2>,
) -> Option<<L1 as Visitable<Rows2<V, L2>>>::Output>
where
    L1: Visitable<Rows2<V, L2>>,
    L2: Alternatives,
{
    if first.is_valueless() || second.is_valueless() {
        return None;
    }
    let mut rows = Rows2 { visitor, second };
    first.dispatch(&mut rows)
}

/// Visits the live values of three containers, or returns `None` if any is
/// valueless.
pub(crate) fn visit3<V, L1, L2, L3>(
    visitor: &mut V,
    first: &RawVariant<L1>,
    second: &RawVariant<L2>,
    third: &RawVariant<L3>,
) -> Option<<L1 as Visitable<Rows3<V, L2, L3>>>::Output>
where
    L1: Visitable<Rows3<V, L2, L3>>,
    L2: Alternatives,
    L3: Alternatives,
{
    if first.is_valueless() || second.is_valueless() || third.is_valueless() {
        return None;
    }
    let mut rows = Rows3 { visitor, second, third };
    first.dispatch(&mut rows)
}
