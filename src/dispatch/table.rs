//! Per-instantiation jump tables.
//!
//! Every `(visitor, list)` pair gets a `'static` slice of function pointers,
//! one per slot, evaluated once at compile time. The entries are type-erased:
//! the visitor, the slot and the output slot all travel as raw pointers, and
//! each entry casts them back to the concrete types it was instantiated for.

use super::visit::{Visit, VisitMut, VisitPair, VisitPairMut};
use crate::list::Alternatives;

/// Erased entry for shared visitation: `(visitor, slot, out)`.
pub type Thunk = unsafe fn(*mut (), *const u8, *mut ());

/// Erased entry for exclusive visitation: `(visitor, slot, out)`.
pub type MutThunk = unsafe fn(*mut (), *mut u8, *mut ());

/// Erased entry for diagonal visitation: `(visitor, lhs, rhs, out)`.
pub type PairThunk = unsafe fn(*mut (), *const u8, *const u8, *mut ());

/// Erased entry for diagonal visitation with an exclusive left-hand side.
pub type PairMutThunk = unsafe fn(*mut (), *mut u8, *const u8, *mut ());

/// A list whose every alternative `W` can visit, all with one output type.
///
/// # Safety
///
/// `TABLE[i]` must visit slot `i` and write a `Self::Output`.
pub unsafe trait Visitable<W>: Alternatives {
    /// The common output.
    type Output;

    #[doc(hidden)]
    const TABLE: &'static [Thunk];
}

/// Exclusive counterpart of [`Visitable`].
///
/// # Safety
///
/// Same contract as [`Visitable`].
pub unsafe trait VisitableMut<W>: Alternatives {
    /// The common output.
    type Output;

    #[doc(hidden)]
    const TABLE: &'static [MutThunk];
}

/// A list whose every alternative `W` can visit pairwise.
///
/// # Safety
///
/// `TABLE[i]` must visit two values of slot `i` and write a `Self::Output`.
pub unsafe trait Diagonal<W>: Alternatives {
    /// The common output.
    type Output;

    #[doc(hidden)]
    const TABLE: &'static [PairThunk];
}

/// [`Diagonal`] with an exclusive left-hand side.
///
/// # Safety
///
/// Same contract as [`Diagonal`].
pub unsafe trait DiagonalMut<W>: Alternatives {
    /// The common output.
    type Output;

    #[doc(hidden)]
    const TABLE: &'static [PairMutThunk];
}

pub(crate) unsafe fn visit_thunk<W, A, R>(visitor: *mut (), slot: *const u8, out: *mut ())
where
    W: Visit<A, Output = R>,
{
    // SAFETY: the dispatcher passes a live `W`, a live `A` and room for an `R`.
    unsafe {
        let visitor = &mut *visitor.cast::<W>();
        out.cast::<R>().write(visitor.visit(&*slot.cast::<A>()));
    }
}

pub(crate) unsafe fn visit_mut_thunk<W, A, R>(visitor: *mut (), slot: *mut u8, out: *mut ())
where
    W: VisitMut<A, Output = R>,
{
    // SAFETY: as in `visit_thunk`, with the slot exclusively borrowed.
    unsafe {
        let visitor = &mut *visitor.cast::<W>();
        out.cast::<R>().write(visitor.visit_mut(&mut *slot.cast::<A>()));
    }
}

pub(crate) unsafe fn pair_thunk<W, A, R>(visitor: *mut (), lhs: *const u8, rhs: *const u8, out: *mut ())
where
    W: VisitPair<A, Output = R>,
{
    // SAFETY: both slots hold a live `A`.
    unsafe {
        let visitor = &mut *visitor.cast::<W>();
        out.cast::<R>()
            .write(visitor.visit_pair(&*lhs.cast::<A>(), &*rhs.cast::<A>()));
    }
}

pub(crate) unsafe fn pair_mut_thunk<W, A, R>(visitor: *mut (), lhs: *mut u8, rhs: *const u8, out: *mut ())
where
    W: VisitPairMut<A, Output = R>,
{
    // SAFETY: both slots hold a live `A` and belong to distinct containers.
    unsafe {
        let visitor = &mut *visitor.cast::<W>();
        out.cast::<R>()
            .write(visitor.visit_pair_mut(&mut *lhs.cast::<A>(), &*rhs.cast::<A>()));
    }
}
