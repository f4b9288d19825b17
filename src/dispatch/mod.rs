//! The dispatch engine: calling a visitor with whatever is live.
//!
//! Single-container dispatch indexes the list's [`Visitable`] table with the
//! tag. Diagonal dispatch serves operations on two containers that already
//! share a slot (equality, ordering, `clone_from`). Matrix dispatch over two or
//! three containers lives in [`matrix`] and is built from single-container
//! tables, one dimension at a time.
//!
//! A valueless container is never dispatched on: the safe entry points return
//! `None` for it and the unchecked ones require the caller to have ruled it out.

pub mod matrix;
mod table;
mod visit;

pub use table::{Diagonal, DiagonalMut, MutThunk, PairMutThunk, PairThunk, Thunk, Visitable, VisitableMut};
pub use visit::{Visit, Visit2, Visit3, VisitMut, VisitPair, VisitPairMut};

pub(crate) use table::{pair_mut_thunk, pair_thunk, visit_mut_thunk, visit_thunk};

use core::mem::MaybeUninit;

use crate::lifetime::RawVariant;
use crate::list::Alternatives;

#[inline]
fn erase<W>(visitor: &mut W) -> *mut () {
    (visitor as *mut W).cast()
}

impl<L: Alternatives> RawVariant<L> {
    /// Visits the live value, or returns `None` when valueless.
    #[inline]
    pub(crate) fn dispatch<W>(&self, visitor: &mut W) -> Option<<L as Visitable<W>>::Output>
    where
        L: Visitable<W>,
    {
        let index = self.index()?;
        let mut out = MaybeUninit::<<L as Visitable<W>>::Output>::uninit();
        // SAFETY: `index` is live, so entry `index` reads a live value of the
        // matching type and writes exactly one output.
        unsafe {
            (<L as Visitable<W>>::TABLE[index])(erase(visitor), self.storage().as_ptr(), out.as_mut_ptr().cast());
            Some(out.assume_init())
        }
    }

    /// Visits the live value.
    ///
    /// # Safety
    /// The container must not be valueless.
    #[inline]
    pub(crate) unsafe fn dispatch_unchecked<W>(&self, visitor: &mut W) -> <L as Visitable<W>>::Output
    where
        L: Visitable<W>,
    {
        debug_assert!(!self.is_valueless());
        match self.dispatch(visitor) {
            Some(out) => out,
            // SAFETY: ruled out by the caller.
            None => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Visits the live value exclusively, or returns `None` when valueless.
    #[inline]
    pub(crate) fn dispatch_mut<W>(&mut self, visitor: &mut W) -> Option<<L as VisitableMut<W>>::Output>
    where
        L: VisitableMut<W>,
    {
        let index = self.index()?;
        let mut out = MaybeUninit::<<L as VisitableMut<W>>::Output>::uninit();
        // SAFETY: as in `dispatch`; `&mut self` makes the slot exclusive.
        unsafe {
            (<L as VisitableMut<W>>::TABLE[index])(
                erase(visitor),
                self.storage_mut().as_mut_ptr(),
                out.as_mut_ptr().cast(),
            );
            Some(out.assume_init())
        }
    }

    /// Visits slot `index` of both containers.
    ///
    /// # Safety
    /// Both containers must hold a live value in slot `index`.
    #[inline]
    pub(crate) unsafe fn dispatch_pair<W>(&self, other: &Self, index: usize, visitor: &mut W) -> <L as Diagonal<W>>::Output
    where
        L: Diagonal<W>,
    {
        debug_assert!(self.index() == Some(index) && other.index() == Some(index));
        let mut out = MaybeUninit::<<L as Diagonal<W>>::Output>::uninit();
        // SAFETY: forwarded from the caller.
        unsafe {
            (<L as Diagonal<W>>::TABLE[index])(
                erase(visitor),
                self.storage().as_ptr(),
                other.storage().as_ptr(),
                out.as_mut_ptr().cast(),
            );
            out.assume_init()
        }
    }

    /// Visits slot `index` of both containers, `self` exclusively.
    ///
    /// # Safety
    /// Both containers must hold a live value in slot `index`.
    #[inline]
    pub(crate) unsafe fn dispatch_pair_mut<W>(
        &mut self,
        other: &Self,
        index: usize,
        visitor: &mut W,
    ) -> <L as DiagonalMut<W>>::Output
    where
        L: DiagonalMut<W>,
    {
        debug_assert!(self.index() == Some(index) && other.index() == Some(index));
        let mut out = MaybeUninit::<<L as DiagonalMut<W>>::Output>::uninit();
        // SAFETY: forwarded from the caller; `self` and `other` are distinct
        // because one is borrowed exclusively.
        unsafe {
            (<L as DiagonalMut<W>>::TABLE[index])(
                erase(visitor),
                self.storage_mut().as_mut_ptr(),
                other.storage().as_ptr(),
                out.as_mut_ptr().cast(),
            );
            out.assume_init()
        }
    }
}
