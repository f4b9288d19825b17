//! Equality, ordering and hashing.
//!
//! Tags are compared first. A valueless container equals only another
//! valueless container and orders before every live one; live containers on
//! different slots order by slot index alone. Only containers on the same slot
//! compare their values, through diagonal dispatch.
//!
//! The ordering traits follow the alternatives: `Ord` exists when every
//! alternative is `Ord`, otherwise only `PartialOrd` when every alternative is
//! `PartialOrd`.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::dispatch::{Diagonal, Visit, VisitPair, Visitable};
use crate::Variant;

/// `==` between two values of the same slot.
#[doc(hidden)]
pub struct EqOp;

impl<A: PartialEq> VisitPair<A> for EqOp {
    type Output = bool;

    fn visit_pair(&mut self, lhs: &A, rhs: &A) -> bool {
        lhs == rhs
    }
}

/// `partial_cmp` between two values of the same slot.
#[doc(hidden)]
pub struct PartialCmpOp;

impl<A: PartialOrd> VisitPair<A> for PartialCmpOp {
    type Output = Option<Ordering>;

    fn visit_pair(&mut self, lhs: &A, rhs: &A) -> Option<Ordering> {
        lhs.partial_cmp(rhs)
    }
}

/// `cmp` between two values of the same slot.
#[doc(hidden)]
pub struct CmpOp;

impl<A: Ord> VisitPair<A> for CmpOp {
    type Output = Ordering;

    fn visit_pair(&mut self, lhs: &A, rhs: &A) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Feeds the visited value to a hasher.
#[doc(hidden)]
pub struct HashOp<'h> {
    state: &'h mut dyn Hasher,
}

impl<A: Hash> Visit<A> for HashOp<'_> {
    type Output = ();

    fn visit(&mut self, value: &A) {
        value.hash(&mut self.state);
    }
}

/// Lists whose every alternative is `PartialEq`.
pub trait PartialEqAlternatives: Diagonal<EqOp, Output = bool> {}

impl<L> PartialEqAlternatives for L where L: Diagonal<EqOp, Output = bool> {}

/// Lists whose every alternative is `Eq`.
pub trait EqAlternatives: PartialEqAlternatives {}

/// Lists whose every alternative is `PartialOrd`.
pub trait PartialOrdAlternatives: PartialEqAlternatives + Diagonal<PartialCmpOp, Output = Option<Ordering>> {}

impl<L> PartialOrdAlternatives for L where L: PartialEqAlternatives + Diagonal<PartialCmpOp, Output = Option<Ordering>> {}

/// Lists whose every alternative is `Ord`.
pub trait OrdAlternatives: EqAlternatives + PartialOrdAlternatives + Diagonal<CmpOp, Output = Ordering> {}

impl<L> OrdAlternatives for L where L: EqAlternatives + PartialOrdAlternatives + Diagonal<CmpOp, Output = Ordering> {}

/// Lists whose every alternative is `Hash`.
pub trait HashAlternatives: for<'h> Visitable<HashOp<'h>> {}

impl<L> HashAlternatives for L where L: for<'h> Visitable<HashOp<'h>> {}

impl<L: PartialEqAlternatives> PartialEq for Variant<L> {
    fn eq(&self, other: &Self) -> bool {
        match (self.raw.index(), other.raw.index()) {
            // SAFETY: both containers hold slot `a`.
            (Some(a), Some(b)) if a == b => unsafe { self.raw.dispatch_pair(&other.raw, a, &mut EqOp) },
            (a, b) => a.is_none() && b.is_none(),
        }
    }
}

impl<L: EqAlternatives> Eq for Variant<L> {}

impl<L: PartialOrdAlternatives> PartialOrd for Variant<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.raw.index(), other.raw.index()) {
            // SAFETY: both containers hold slot `a`.
            (Some(a), Some(b)) if a == b => unsafe { self.raw.dispatch_pair(&other.raw, a, &mut PartialCmpOp) },
            // `None` orders before `Some`, which puts valueless first.
            (a, b) => Some(a.cmp(&b)),
        }
    }
}

impl<L: OrdAlternatives> Ord for Variant<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.raw.index(), other.raw.index()) {
            // SAFETY: both containers hold slot `a`.
            (Some(a), Some(b)) if a == b => unsafe { self.raw.dispatch_pair(&other.raw, a, &mut CmpOp) },
            (a, b) => a.cmp(&b),
        }
    }
}

impl<L: HashAlternatives> Hash for Variant<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index().hash(state);
        let mut op = HashOp { state };
        // Valueless containers hash their sentinel index only.
        let _ = self.raw.dispatch(&mut op);
    }
}
