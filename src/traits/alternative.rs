//! The per-type capability descriptor and its implementations for std types.

use super::Level;

/// A type that may occupy a slot of a [`Variant`](crate::Variant).
///
/// The descriptor reports how the type can be copied; everything else the
/// container needs (drop glue, moves) is known to the compiler for every type.
///
/// # Safety
///
/// `COPY` must describe the type truthfully:
/// - [`Level::TriviallyAvailable`] only if `Self: Copy`. The container clones
///   such lists with a bitwise copy.
/// - [`Level::Available`] only if `Self: Clone`.
///
/// Reporting [`Level::Unavailable`] is always sound; it only makes the
/// container's capability queries more pessimistic.
///
/// For concrete types, [`alternative!`](crate::alternative) derives the
/// descriptor automatically.
pub unsafe trait Alternative: Sized {
    /// How `Clone` is available for `Self`.
    const COPY: Level;
}

macro_rules! trivial_alternatives {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: every listed type is `Copy`.
            unsafe impl Alternative for $ty {
                const COPY: Level = Level::TriviallyAvailable;
            }
        )*
    };
}

macro_rules! clone_alternatives {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: every listed type is `Clone`.
            unsafe impl Alternative for $ty {
                const COPY: Level = Level::Available;
            }
        )*
    };
}

trivial_alternatives!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    core::time::Duration,
    core::cmp::Ordering,
    core::num::NonZeroU32,
    core::num::NonZeroU64,
    core::num::NonZeroUsize,
);

clone_alternatives!(String, std::path::PathBuf, std::ffi::OsString);

// SAFETY: shared references are `Copy`.
unsafe impl<T: ?Sized> Alternative for &T {
    const COPY: Level = Level::TriviallyAvailable;
}

// SAFETY: `PhantomData<T>` is `Copy` for every `T`.
unsafe impl<T: ?Sized> Alternative for core::marker::PhantomData<T> {
    const COPY: Level = Level::TriviallyAvailable;
}

// SAFETY: `Option<T>` is `Copy` iff `T: Copy` and `Clone` iff `T: Clone`.
unsafe impl<T: Alternative> Alternative for Option<T> {
    const COPY: Level = T::COPY;
}

// SAFETY: same reasoning as `Option`, joined over both parameters.
unsafe impl<T: Alternative, E: Alternative> Alternative for Result<T, E> {
    const COPY: Level = T::COPY.max(E::COPY);
}

// SAFETY: arrays inherit `Copy` and `Clone` from their element.
unsafe impl<T: Alternative, const N: usize> Alternative for [T; N] {
    const COPY: Level = T::COPY;
}

// SAFETY: `Box<T>` and `Vec<T>` are never `Copy` and are `Clone` iff `T: Clone`.
unsafe impl<T: Alternative> Alternative for Box<T> {
    const COPY: Level = Level::Available.max(T::COPY);
}

// SAFETY: see `Box<T>`.
unsafe impl<T: Alternative> Alternative for Vec<T> {
    const COPY: Level = Level::Available.max(T::COPY);
}

// SAFETY: reference-counted pointers are `Clone` for every `T` and never `Copy`.
unsafe impl<T: ?Sized> Alternative for std::rc::Rc<T> {
    const COPY: Level = Level::Available;
}

// SAFETY: see `Rc<T>`.
unsafe impl<T: ?Sized> Alternative for std::sync::Arc<T> {
    const COPY: Level = Level::Available;
}

/// Implements [`Alternative`] for concrete types by probing `Copy` and `Clone`.
///
/// ```
/// use tagged_variant::{alternative, Alternative, Level};
///
/// #[derive(Clone, Copy)]
/// struct Point(i32, i32);
///
/// #[derive(Clone)]
/// struct Name(String);
///
/// struct Handle;
///
/// alternative!(Point, Name, Handle);
///
/// assert_eq!(Point::COPY, Level::TriviallyAvailable);
/// assert_eq!(Name::COPY, Level::Available);
/// assert_eq!(Handle::COPY, Level::Unavailable);
/// ```
///
/// Generic types need a hand-written impl, since detection cannot see through
/// type parameters.
#[macro_export]
macro_rules! alternative {
    ($($ty:ty),+ $(,)?) => {
        $(
            // SAFETY: the level is derived from the trait impls the compiler sees.
            unsafe impl $crate::Alternative for $ty {
                const COPY: $crate::Level = {
                    #[allow(unused_imports)]
                    use $crate::detect::{CloneFallback as _, CopyFallback as _};
                    $crate::Level::from_flags(
                        <$crate::detect::Detect<$ty>>::IS_COPY,
                        <$crate::detect::Detect<$ty>>::IS_CLONE,
                    )
                };
            }
        )+
    };
}
