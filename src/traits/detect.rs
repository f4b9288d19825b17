//! Compile-time detection of `Copy` and `Clone` for concrete types.
//!
//! `Detect<T>` carries inherent constants that exist only when `T` implements
//! the checked trait. When the bound fails, name resolution falls back to the
//! trait constant of the same name, which reports `false`. The fallback traits
//! must be in scope where the check is written; [`alternative!`](crate::alternative)
//! imports them for you.
//!
//! The check only resolves for concrete types. Inside generic code the bound
//! is never provable, so the fallback is always taken.

use core::marker::PhantomData;

/// Detection target.
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Fallback for [`Detect::IS_COPY`].
pub trait CopyFallback {
    /// Reported when `T: Copy` does not hold.
    const IS_COPY: bool = false;
}

impl<T: ?Sized> CopyFallback for Detect<T> {}

impl<T: Copy> Detect<T> {
    /// `T: Copy` holds.
    pub const IS_COPY: bool = true;
}

/// Fallback for [`Detect::IS_CLONE`].
pub trait CloneFallback {
    /// Reported when `T: Clone` does not hold.
    const IS_CLONE: bool = false;
}

impl<T: ?Sized> CloneFallback for Detect<T> {}

impl<T: Clone> Detect<T> {
    /// `T: Clone` holds.
    pub const IS_CLONE: bool = true;
}
