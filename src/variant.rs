//! The public container type.

use crate::dispatch::{Visitable, VisitableMut};
use crate::error::BadVariantAccess;
use crate::lifetime::RawVariant;
use crate::list::{AlternativeAt, Alternatives, At, Locate};
use crate::traits::{Alternative, Capabilities, Level};

/// The value [`Variant::index`] reports for a valueless container.
pub const VARIANT_NPOS: usize = usize::MAX;

/// A value holding exactly one of the alternatives listed in `L`.
///
/// `L` is a tuple of [`Alternative`] types. The live alternative is stored
/// inline, in a region sized and aligned for the largest member, next to a
/// one-byte tag.
///
/// Slots are addressed by index (`get::<1>()`) or, when the type occurs
/// exactly once in the list, by type (`get_as::<String, _>()`; the `_` is an
/// inferred position witness).
///
/// ## Valueless state
///
/// [`emplace_with`](Variant::emplace_with) and
/// [`try_emplace_with`](Variant::try_emplace_with) destroy the current value
/// before building the next one. If building fails, the container has no value
/// at all: [`valueless`](Variant::valueless) returns `true`, every access
/// returns [`BadVariantAccess`], and any later successful emplacement or
/// assignment makes it usable again.
///
/// ```
/// use tagged_variant::Variant;
///
/// let mut v: Variant<(i32, String)> = Variant::new(String::from("hello"));
/// assert_eq!(v.index(), 1);
/// assert_eq!(v.get_as::<String, _>().map(String::as_str), Ok("hello"));
///
/// v.emplace::<0>(5);
/// assert_eq!(v.index(), 0);
/// assert_eq!(v.get::<0>(), Ok(&5));
/// assert!(v.get_as::<String, _>().is_err());
/// ```
pub struct Variant<L: Alternatives> {
    pub(crate) raw: RawVariant<L>,
}

impl<L: Alternatives> Variant<L> {
    /// Number of alternatives.
    pub const LEN: usize = L::LEN;

    /// Classification of the container's operations.
    pub const CAPABILITIES: Capabilities = L::CAPABILITIES;

    pub(crate) fn from_raw(raw: RawVariant<L>) -> Self {
        Self { raw }
    }

    /// Holds `value` in the unique slot of type `T`.
    ///
    /// Only an exact type match selects a slot; a type listed twice must be
    /// placed by index with [`Variant::in_place`].
    pub fn new<T, I>(value: T) -> Self
    where
        L: Locate<T, I>,
    {
        // SAFETY: `Locate` names the slot whose type is `T`.
        Self::from_raw(unsafe { RawVariant::from_value(<L as Locate<T, I>>::INDEX, value) })
    }

    /// Holds the value built by `make` in the unique slot of type `T`.
    pub fn new_with<T, I, F>(make: F) -> Self
    where
        L: Locate<T, I>,
        F: FnOnce() -> T,
    {
        Self::new(make())
    }

    /// Holds `value` in slot `K`.
    pub fn in_place<const K: usize>(value: AlternativeAt<L, K>) -> Self
    where
        L: At<K>,
    {
        // SAFETY: slot `K` has type `AlternativeAt<L, K>`.
        Self::from_raw(unsafe { RawVariant::from_value(K, value) })
    }

    /// Holds the value built by `make` in slot `K`.
    ///
    /// If `make` panics, no container is created.
    pub fn in_place_with<const K: usize, F>(make: F) -> Self
    where
        L: At<K>,
        F: FnOnce() -> AlternativeAt<L, K>,
    {
        Self::in_place::<K>(make())
    }

    /// Holds the value built by `make` in slot `K`, or returns its error.
    ///
    /// # Errors
    /// Returns whatever `make` returns; no container exists in that case.
    pub fn try_in_place_with<const K: usize, E, F>(make: F) -> Result<Self, E>
    where
        L: At<K>,
        F: FnOnce() -> Result<AlternativeAt<L, K>, E>,
    {
        make().map(Self::in_place::<K>)
    }

    /// Index of the live alternative, or [`VARIANT_NPOS`] when valueless.
    #[inline]
    pub fn index(&self) -> usize {
        self.raw.index().unwrap_or(VARIANT_NPOS)
    }

    /// Whether the container lost its value to a failed emplacement.
    #[inline]
    pub fn valueless(&self) -> bool {
        self.raw.is_valueless()
    }

    /// Whether the unique slot of type `T` is live.
    #[inline]
    pub fn holds<T, I>(&self) -> bool
    where
        L: Locate<T, I>,
    {
        self.raw.index() == Some(<L as Locate<T, I>>::INDEX)
    }

    /// The value of slot `K`, if live.
    #[inline]
    pub fn get_if<const K: usize>(&self) -> Option<&AlternativeAt<L, K>>
    where
        L: At<K>,
    {
        if self.raw.index() == Some(K) {
            // SAFETY: slot `K` is live and has type `AlternativeAt<L, K>`.
            Some(unsafe { self.raw.get_unchecked() })
        } else {
            None
        }
    }

    /// The value of slot `K`, if live, borrowed exclusively.
    #[inline]
    pub fn get_if_mut<const K: usize>(&mut self) -> Option<&mut AlternativeAt<L, K>>
    where
        L: At<K>,
    {
        if self.raw.index() == Some(K) {
            // SAFETY: see `get_if`.
            Some(unsafe { self.raw.get_unchecked_mut() })
        } else {
            None
        }
    }

    /// The value of slot `K`.
    ///
    /// # Errors
    /// [`BadVariantAccess`] if another slot is live or the container is valueless.
    #[inline]
    pub fn get<const K: usize>(&self) -> Result<&AlternativeAt<L, K>, BadVariantAccess>
    where
        L: At<K>,
    {
        self.get_if::<K>().ok_or(BadVariantAccess)
    }

    /// The value of slot `K`, borrowed exclusively.
    ///
    /// # Errors
    /// See [`Variant::get`].
    #[inline]
    pub fn get_mut<const K: usize>(&mut self) -> Result<&mut AlternativeAt<L, K>, BadVariantAccess>
    where
        L: At<K>,
    {
        self.get_if_mut::<K>().ok_or(BadVariantAccess)
    }

    /// The value of the unique slot of type `T`, if live.
    #[inline]
    pub fn get_if_as<T, I>(&self) -> Option<&T>
    where
        L: Locate<T, I>,
    {
        if self.holds::<T, I>() {
            // SAFETY: the slot located for `T` is live.
            Some(unsafe { self.raw.get_unchecked() })
        } else {
            None
        }
    }

    /// The value of the unique slot of type `T`, if live, borrowed exclusively.
    #[inline]
    pub fn get_if_as_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: Locate<T, I>,
    {
        if self.holds::<T, I>() {
            // SAFETY: the slot located for `T` is live.
            Some(unsafe { self.raw.get_unchecked_mut() })
        } else {
            None
        }
    }

    /// The value of the unique slot of type `T`.
    ///
    /// # Errors
    /// [`BadVariantAccess`] if that slot is not live.
    #[inline]
    pub fn get_as<T, I>(&self) -> Result<&T, BadVariantAccess>
    where
        L: Locate<T, I>,
    {
        self.get_if_as::<T, I>().ok_or(BadVariantAccess)
    }

    /// The value of the unique slot of type `T`, borrowed exclusively.
    ///
    /// # Errors
    /// [`BadVariantAccess`] if that slot is not live.
    #[inline]
    pub fn get_as_mut<T, I>(&mut self) -> Result<&mut T, BadVariantAccess>
    where
        L: Locate<T, I>,
    {
        self.get_if_as_mut::<T, I>().ok_or(BadVariantAccess)
    }

    /// Moves the value of slot `K` out, or hands the container back.
    ///
    /// # Errors
    /// Returns `self` unchanged when slot `K` is not live.
    pub fn into_inner<const K: usize>(mut self) -> Result<AlternativeAt<L, K>, Self>
    where
        L: At<K>,
    {
        if self.raw.index() != Some(K) {
            return Err(self);
        }
        match self.raw.take() {
            // SAFETY: slot `K` was live; `take` left `self` valueless, so the
            // value is read exactly once.
            Some((_, storage)) => Ok(unsafe { storage.read() }),
            None => Err(self),
        }
    }

    /// Destroys the current value and holds `value` in slot `K`.
    pub fn emplace<const K: usize>(&mut self, value: AlternativeAt<L, K>) -> &mut AlternativeAt<L, K>
    where
        L: At<K>,
    {
        trace!(from = self.index(), to = K, "emplace");
        self.raw.destroy();
        // SAFETY: valueless after `destroy`; slot `K` has the value's type.
        unsafe { self.raw.install(K, value) }
    }

    /// Destroys the current value, then holds the value built by `make` in
    /// slot `K`.
    ///
    /// If `make` panics, the container is left valueless.
    pub fn emplace_with<const K: usize, F>(&mut self, make: F) -> &mut AlternativeAt<L, K>
    where
        L: At<K>,
        F: FnOnce() -> AlternativeAt<L, K>,
    {
        trace!(from = self.index(), to = K, "emplace");
        self.raw.destroy();
        let value = make();
        // SAFETY: still valueless; `make` cannot reach `self`.
        unsafe { self.raw.install(K, value) }
    }

    /// Destroys the current value, then holds the value built by `make` in
    /// slot `K`.
    ///
    /// # Errors
    /// Returns the error of `make`. The old value is gone by then, so the
    /// container is left valueless.
    pub fn try_emplace_with<const K: usize, E, F>(&mut self, make: F) -> Result<&mut AlternativeAt<L, K>, E>
    where
        L: At<K>,
        F: FnOnce() -> Result<AlternativeAt<L, K>, E>,
    {
        trace!(from = self.index(), to = K, "emplace");
        self.raw.destroy();
        match make() {
            // SAFETY: still valueless; slot `K` has the value's type.
            Ok(value) => Ok(unsafe { self.raw.install(K, value) }),
            Err(err) => {
                trace!(slot = K, "construction failed, container is valueless");
                Err(err)
            }
        }
    }

    /// Destroys the current value and holds `value` in the unique slot of
    /// type `T`.
    pub fn emplace_as<T, I>(&mut self, value: T) -> &mut T
    where
        L: Locate<T, I>,
    {
        let index = <L as Locate<T, I>>::INDEX;
        trace!(from = self.index(), to = index, "emplace");
        self.raw.destroy();
        // SAFETY: valueless after `destroy`; `Locate` names the slot of `T`.
        unsafe { self.raw.install(index, value) }
    }

    /// Destroys the current value, then holds the value built by `make` in
    /// the unique slot of type `T`.
    ///
    /// If `make` panics, the container is left valueless.
    pub fn emplace_as_with<T, I, F>(&mut self, make: F) -> &mut T
    where
        L: Locate<T, I>,
        F: FnOnce() -> T,
    {
        let index = <L as Locate<T, I>>::INDEX;
        trace!(from = self.index(), to = index, "emplace");
        self.raw.destroy();
        let value = make();
        // SAFETY: still valueless; `Locate` names the slot of `T`.
        unsafe { self.raw.install(index, value) }
    }

    /// Calls `visitor` with the live value.
    ///
    /// # Errors
    /// [`BadVariantAccess`] if the container is valueless; the visitor is not
    /// called.
    #[inline]
    pub fn visit<V>(&self, visitor: &mut V) -> Result<<L as Visitable<V>>::Output, BadVariantAccess>
    where
        L: Visitable<V>,
    {
        self.raw.dispatch(visitor).ok_or(BadVariantAccess)
    }

    /// Calls `visitor` with the live value borrowed exclusively.
    ///
    /// # Errors
    /// [`BadVariantAccess`] if the container is valueless.
    #[inline]
    pub fn visit_mut<V>(&mut self, visitor: &mut V) -> Result<<L as VisitableMut<V>>::Output, BadVariantAccess>
    where
        L: VisitableMut<V>,
    {
        self.raw.dispatch_mut(visitor).ok_or(BadVariantAccess)
    }
}

impl<L> Default for Variant<L>
where
    L: At<0>,
    AlternativeAt<L, 0>: Default,
{
    /// Holds the default value of slot 0.
    fn default() -> Self {
        Self::in_place::<0>(Default::default())
    }
}

// SAFETY: a container is never `Copy`, and it is `Clone` exactly when every
// alternative is, which is what a non-`Unavailable` copy level reports.
unsafe impl<L: Alternatives> Alternative for Variant<L> {
    const COPY: Level = if L::CAPABILITIES.can_copy() {
        Level::Available
    } else {
        Level::Unavailable
    };
}
