//! # `tagged-variant` - Closed Sum-Type Container
//!
//! A [`Variant<L>`] holds exactly one value out of a fixed list of alternative
//! types `L = (A0, A1, ..)`, selected by a runtime tag and stored inline in a
//! single region sized for the largest alternative. No heap allocation and no
//! dynamic dispatch through trait objects is involved.
//!
//! ## Architecture
//!
//! Leaf-first:
//!
//! 1. **Classification** ([`traits`]): every alternative reports per-operation
//!    [`Level`]s; a list folds them so the strictest member wins.
//! 2. **Storage** ([`storage`]): a right-recursive `repr(C)` union wrapped in
//!    `MaybeUninit`; slot access is a cast of the base address.
//! 3. **Lifetime core**: the `{tag, storage}` owner. The tag is the only source
//!    of truth for which slot is live.
//! 4. **Dispatch** ([`dispatch`]): one compile-time jump table per
//!    `(visitor, list)` instantiation; diagonal tables for pairs of containers
//!    on the same slot; matrix visitation over two and three containers.
//! 5. **Operations** ([`ops`]): `Clone`, `clone_from`, move-assignment,
//!    converting assignment, swap, comparisons, hashing, `Debug`, each present
//!    only when every alternative supports it.
//! 6. **API**: [`Variant`] and the free functions in [`access`].
//!
//! ## Safety Guarantees
//!
//! - **Tag/value coherence**: when the tag names slot `i`, exactly one value of
//!   slot `i`'s type is live. Checked accessors never hand out another slot.
//! - **Destroy once**: every transition drops the previous occupant exactly once.
//! - **Valueless recovery**: operations that destroy before they construct
//!   leave the container valueless if construction fails (panic or `Err`),
//!   never half-built.
//! - **Type-level gating**: `Clone`, `Eq`, `Ord`, `Hash` and `Debug` exist only
//!   when every alternative implements them.
//!
//! ## Example
//!
//! ```rust
//! use tagged_variant::{Variant, Visit};
//!
//! struct Describe;
//!
//! impl Visit<i32> for Describe {
//!     type Output = String;
//!     fn visit(&mut self, value: &i32) -> String {
//!         format!("int {value}")
//!     }
//! }
//!
//! impl Visit<String> for Describe {
//!     type Output = String;
//!     fn visit(&mut self, value: &String) -> String {
//!         format!("string {value:?}")
//!     }
//! }
//!
//! let mut v: Variant<(i32, String)> = Variant::new(String::from("hello"));
//! assert_eq!(v.visit(&mut Describe).as_deref(), Ok("string \"hello\""));
//!
//! v.emplace::<0>(5);
//! assert_eq!(v.visit(&mut Describe).as_deref(), Ok("int 5"));
//!
//! // A failed emplacement leaves the container valueless until the next one.
//! assert!(v.try_emplace_with::<1, _, _>(|| Err("no")).is_err());
//! assert!(v.valueless());
//! assert!(v.visit(&mut Describe).is_err());
//! ```
//!
//! Operations an alternative lacks are absent from the container:
//!
//! ```compile_fail
//! use tagged_variant::{alternative, Variant};
//!
//! struct Handle;
//! alternative!(Handle);
//!
//! let v: Variant<(i32, Handle)> = Variant::new(1i32);
//! let _copy = v.clone();
//! ```
//!
//! A type listed twice can only be addressed by index:
//!
//! ```compile_fail
//! use tagged_variant::Variant;
//!
//! let v: Variant<(i32, i32)> = Variant::in_place::<1>(7);
//! let _ = v.get_as::<i32, _>();
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "tagged_variant", $($arg)+);
        }
    }};
}

pub mod access;
pub mod dispatch;
mod error;
mod lifetime;
pub mod list;
pub mod ops;
pub mod storage;
pub mod traits;
mod variant;

#[doc(hidden)]
pub use traits::detect;

pub use dispatch::{Visit, Visit2, Visit3, VisitMut, VisitPair, VisitPairMut, Visitable, VisitableMut};
pub use error::BadVariantAccess;
pub use list::{AlternativeAt, Alternatives, At, Locate};
pub use traits::{Alternative, Capabilities, Level};
pub use variant::{Variant, VARIANT_NPOS};

// Compile-time assertions for layout and classification claims.
const _: () = {
    use core::mem;

    // One tag byte next to the largest alternative, padded to its alignment.
    assert!(mem::size_of::<Variant<(u8,)>>() == 2);
    assert!(mem::size_of::<Variant<(u32, u8)>>() == 8);
    assert!(mem::size_of::<Variant<(u64, [u8; 3])>>() == 16);
    assert!(mem::align_of::<Variant<(u8, u64)>>() == mem::align_of::<u64>());

    // Scalar-only lists are trivial in every operation.
    assert!(Variant::<(u8, i64, f64, char)>::CAPABILITIES.is_trivial());

    // One owning alternative degrades destruction and copying, not moves.
    let caps = Variant::<(u8, String)>::CAPABILITIES;
    assert!(!caps.destroy.is_trivial());
    assert!(caps.can_copy() && !caps.copy_is_trivial());
    assert!(caps.move_construct.is_trivial());
};
