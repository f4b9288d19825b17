//! Alternative lists: the type-level description of a container's slots.
//!
//! A list is a tuple `(A0, A1, ..)` of 1 to 12 [`Alternative`] types. The
//! tuple impls live in `tuples.rs`; this module defines what they provide.

mod tuples;

use core::marker::PhantomData;

use crate::traits::{Alternative, Capabilities};

/// An ordered, fixed set of alternative types.
///
/// # Safety
///
/// `Union` must have one field per alternative, each starting at offset zero,
/// and the thunk tables must have exactly `LEN` entries, entry `i` operating
/// on the type of slot `i`.
pub unsafe trait Alternatives: Sized {
    /// Number of slots.
    const LEN: usize;

    /// Recursive slot union sized and aligned for every alternative.
    type Union;

    /// The alternatives as a [`Cons`] list, used for type-directed lookup.
    type List;

    /// Folded classification; the strictest alternative decides each level.
    const CAPABILITIES: Capabilities;

    #[doc(hidden)]
    const DROP: &'static [unsafe fn(*mut u8)];
}

/// Slot `K` of a list.
///
/// # Safety
///
/// `Output` must be the type stored in slot `K` of `Self::Union`.
pub unsafe trait At<const K: usize>: Alternatives {
    /// The type of slot `K`.
    type Output: Alternative;
}

/// The type stored in slot `K` of `L`.
pub type AlternativeAt<L, const K: usize> = <L as At<K>>::Output;

/// Type-level cons cell.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// Peano zero: the head of a [`Cons`] list.
pub struct Z;

/// Peano successor: one step into the tail of a [`Cons`] list.
pub struct S<N>(PhantomData<N>);

/// Where `T` sits in a [`Cons`] list, witnessed by the path `I`.
///
/// A type appearing twice has two witnesses, so the compiler cannot infer `I`
/// and type-directed access to it is rejected.
///
/// # Safety
///
/// `INDEX` must be the position of `T` in the list.
pub unsafe trait Position<T, I> {
    /// Zero-based position.
    const INDEX: usize;
}

// SAFETY: `T` is the head, position 0.
unsafe impl<T, Tail> Position<T, Z> for Cons<T, Tail> {
    const INDEX: usize = 0;
}

// SAFETY: one past the position of `T` in the tail.
unsafe impl<H, T, Tail, N> Position<T, S<N>> for Cons<H, Tail>
where
    Tail: Position<T, N>,
{
    const INDEX: usize = 1 + <Tail as Position<T, N>>::INDEX;
}

/// The unique slot holding `T`.
///
/// `I` is inferred; callers write `_` for it.
pub trait Locate<T, I>: Alternatives {
    /// Zero-based slot index of `T`.
    const INDEX: usize;
}

impl<L, T, I> Locate<T, I> for L
where
    L: Alternatives,
    L::List: Position<T, I>,
{
    const INDEX: usize = <L::List as Position<T, I>>::INDEX;
}
