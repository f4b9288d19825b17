//! Free-function access to containers.
//!
//! These mirror the methods on [`Variant`] and add matrix visitation over two
//! and three containers. Matrix visitation stops at three: each extra
//! container adds a layer of row adapters and multiplies the tables by its
//! alternative count. Wider combinations can nest a [`visit`] inside a
//! [`Visit3`](crate::Visit3) implementation.
//!
//! ```
//! use tagged_variant::access::{get, get_as, holds_alternative, visit2};
//! use tagged_variant::{Variant, Visit2};
//!
//! struct Sum;
//!
//! impl<A: Copy + Into<f64>, B: Copy + Into<f64>> Visit2<A, B> for Sum {
//!     type Output = f64;
//!
//!     fn visit2(&mut self, a: &A, b: &B) -> f64 {
//!         (*a).into() + (*b).into()
//!     }
//! }
//!
//! let a: Variant<(u8, f32)> = Variant::new(2u8);
//! let b: Variant<(i32, f64)> = Variant::new(0.5f64);
//!
//! assert_eq!(get::<0, _>(&a), Ok(&2));
//! assert!(get_as::<f32, _, _>(&a).is_err());
//! assert!(holds_alternative::<f64, _, _>(&b));
//! assert_eq!(visit2(&mut Sum, &a, &b), Ok(2.5));
//! ```

use crate::dispatch::matrix::{self, Rows2, Rows3};
use crate::dispatch::{Visitable, VisitableMut};
use crate::error::BadVariantAccess;
use crate::list::{AlternativeAt, Alternatives, At, Locate};
use crate::Variant;

/// The value of slot `K`.
///
/// # Errors
/// [`BadVariantAccess`] if slot `K` is not live.
pub fn get<const K: usize, L: At<K>>(variant: &Variant<L>) -> Result<&AlternativeAt<L, K>, BadVariantAccess> {
    variant.get::<K>()
}

/// The value of slot `K`, borrowed exclusively.
///
/// # Errors
/// [`BadVariantAccess`] if slot `K` is not live.
pub fn get_mut<const K: usize, L: At<K>>(
    variant: &mut Variant<L>,
) -> Result<&mut AlternativeAt<L, K>, BadVariantAccess> {
    variant.get_mut::<K>()
}

/// The value of slot `K`, or `None`. Never fails.
pub fn get_if<const K: usize, L: At<K>>(variant: &Variant<L>) -> Option<&AlternativeAt<L, K>> {
    variant.get_if::<K>()
}

/// The value of slot `K`, borrowed exclusively, or `None`.
pub fn get_if_mut<const K: usize, L: At<K>>(variant: &mut Variant<L>) -> Option<&mut AlternativeAt<L, K>> {
    variant.get_if_mut::<K>()
}

/// The value of the unique slot of type `T`.
///
/// # Errors
/// [`BadVariantAccess`] if that slot is not live.
pub fn get_as<T, I, L: Locate<T, I>>(variant: &Variant<L>) -> Result<&T, BadVariantAccess> {
    variant.get_as::<T, I>()
}

/// The value of the unique slot of type `T`, or `None`. Never fails.
pub fn get_if_as<T, I, L: Locate<T, I>>(variant: &Variant<L>) -> Option<&T> {
    variant.get_if_as::<T, I>()
}

/// Whether the unique slot of type `T` is live.
pub fn holds_alternative<T, I, L: Locate<T, I>>(variant: &Variant<L>) -> bool {
    variant.holds::<T, I>()
}

/// Calls `visitor` with the live value.
///
/// # Errors
/// [`BadVariantAccess`] if the container is valueless.
pub fn visit<V, L: Visitable<V>>(
    visitor: &mut V,
    variant: &Variant<L>,
) -> Result<<L as Visitable<V>>::Output, BadVariantAccess> {
    variant.visit(visitor)
}

/// Calls `visitor` with the live value borrowed exclusively.
///
/// # Errors
/// [`BadVariantAccess`] if the container is valueless.
pub fn visit_mut<V, L: VisitableMut<V>>(
    visitor: &mut V,
    variant: &mut Variant<L>,
) -> Result<<L as VisitableMut<V>>::Output, BadVariantAccess> {
    variant.visit_mut(visitor)
}

/// Calls `visitor` with the live values of both containers.
///
/// `V` must implement [`Visit2`](crate::Visit2) for every pair of
/// alternatives, all with the same output.
///
/// # Errors
/// [`BadVariantAccess`] if either container is valueless; the visitor is not
/// called.
pub fn visit2<V, L1, L2>(
    visitor: &mut V,
    first: &Variant<L1>,
    second: &Variant<L2>,
) -> Result<<L1 as Visitable<Rows2<V, L2>>>::Output, BadVariantAccess>
where
    L1: Visitable<Rows2<V, L2>>,
    L2: Alternatives,
{
    matrix::visit2(visitor, &first.raw, &second.raw).ok_or(BadVariantAccess)
}

/// Calls `visitor` with the live values of three containers.
///
/// # Errors
/// [`BadVariantAccess`] if any container is valueless; the visitor is not
/// called.
pub fn visit3<V, L1, L2, L3>(
    visitor: &mut V,
    first: &Variant<L1>,
    second: &Variant<L2>,
    third: &Variant<L3>,
) -> Result<<L1 as Visitable<Rows3<V, L2, L3>>>::Output, BadVariantAccess>
where
    L1: Visitable<Rows3<V, L2, L3>>,
    L2: Alternatives,
    L3: Alternatives,
{
    matrix::visit3(visitor, &first.raw, &second.raw, &third.raw).ok_or(BadVariantAccess)
}
