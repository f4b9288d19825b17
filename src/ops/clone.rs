use crate::dispatch::{DiagonalMut, Visit, VisitPairMut, Visitable};
use crate::lifetime::RawVariant;
use crate::list::Alternatives;
use crate::storage::Storage;
use crate::Variant;

/// Clones the visited value into an empty slot region.
#[doc(hidden)]
pub struct CloneInto {
    target: *mut u8,
}

impl<A: Clone> Visit<A> for CloneInto {
    type Output = ();

    fn visit(&mut self, value: &A) {
        // SAFETY: `target` is the base of an empty `Storage` of the list being
        // visited, which is sized and aligned for every alternative.
        unsafe { self.target.cast::<A>().write(value.clone()) }
    }
}

/// `Clone::clone_from` between two values of the same slot.
#[doc(hidden)]
pub struct CloneFromOp;

impl<A: Clone> VisitPairMut<A> for CloneFromOp {
    type Output = ();

    fn visit_pair_mut(&mut self, lhs: &mut A, rhs: &A) {
        lhs.clone_from(rhs);
    }
}

/// Lists whose every alternative is `Clone`.
pub trait CloneAlternatives: Visitable<CloneInto> + DiagonalMut<CloneFromOp> {}

impl<L> CloneAlternatives for L where L: Visitable<CloneInto> + DiagonalMut<CloneFromOp> {}

/// Clones the live value of `source` into fresh storage.
///
/// The source must not be valueless. If the alternative's `clone` panics,
/// nothing has been written and the storage is simply discarded.
fn clone_storage<L: CloneAlternatives>(source: &RawVariant<L>) -> Storage<<L as Alternatives>::Union> {
    debug_assert!(!source.is_valueless());
    let mut storage = Storage::uninit();
    let mut op = CloneInto {
        target: storage.as_mut_ptr(),
    };
    // SAFETY: the caller ruled out the valueless state.
    unsafe { source.dispatch_unchecked(&mut op) };
    storage
}

impl<L: CloneAlternatives> Clone for Variant<L> {
    fn clone(&self) -> Self {
        if L::CAPABILITIES.copy_is_trivial() {
            // SAFETY: a trivial copy level means every alternative is `Copy`.
            return Self::from_raw(unsafe { self.raw.bitwise_copy() });
        }
        let mut raw = RawVariant::valueless();
        if let Some(index) = self.raw.index() {
            let storage = clone_storage(&self.raw);
            // SAFETY: `storage` holds a clone of slot `index`.
            unsafe { raw.install_storage(index, storage) };
        }
        Self::from_raw(raw)
    }

    /// Copy-assignment.
    ///
    /// - both valueless: nothing happens;
    /// - `source` valueless: `self` drops its value and becomes valueless;
    /// - same slot: the alternative's own `clone_from` runs in place;
    /// - different slots: `source` is cloned first, then `self` adopts the
    ///   clone and drops its old value. A panicking `clone` leaves `self`
    ///   untouched; a panicking destructor leaves it holding the clone.
    fn clone_from(&mut self, source: &Self) {
        if L::CAPABILITIES.copy_is_trivial() {
            // SAFETY: see `clone`.
            self.raw = unsafe { source.raw.bitwise_copy() };
            return;
        }
        match (self.raw.index(), source.raw.index()) {
            (None, None) => {}
            (Some(_), None) => self.raw.destroy(),
            (Some(current), Some(index)) if current == index => {
                // SAFETY: both containers hold slot `index`.
                unsafe { self.raw.dispatch_pair_mut(&source.raw, index, &mut CloneFromOp) };
            }
            (_, Some(index)) => {
                let storage = clone_storage(&source.raw);
                trace!(from = self.index(), to = index, "clone_from across slots");
                // SAFETY: `storage` holds a fresh clone of slot `index`.
                unsafe { self.raw.replace(index, storage) };
            }
        }
    }
}
