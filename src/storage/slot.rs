//! Unsafe, centralized operations on the slot region.
//!
//! All reads, writes and drops of alternative values go through [`Storage`].
//! Writing is safe: any value whose layout fits the union can be placed in it,
//! and the storage never drops what it holds. Everything that interprets the
//! bytes as a particular type is `unsafe` and relies on the caller's tag.

use core::mem::{self, MaybeUninit};
use core::ptr;

/// An untyped buffer sized and aligned for the union `U`.
#[repr(transparent)]
pub struct Storage<U> {
    bytes: MaybeUninit<U>,
}

impl<U> Storage<U> {
    /// Storage holding no value.
    #[inline]
    #[must_use]
    pub const fn uninit() -> Self {
        Self {
            bytes: MaybeUninit::uninit(),
        }
    }

    /// Storage holding `value` at offset zero.
    #[inline]
    #[must_use]
    pub fn with_value<T>(value: T) -> Self {
        let mut storage = Self::uninit();
        storage.write(value);
        storage
    }

    /// Places `value` at offset zero, overwriting the previous bytes.
    ///
    /// The previous occupant, if any, is not dropped.
    #[inline]
    pub fn write<T>(&mut self, value: T) -> &mut T {
        const {
            assert!(mem::size_of::<T>() <= mem::size_of::<U>(), "value does not fit the slot union");
            assert!(mem::align_of::<T>() <= mem::align_of::<U>(), "value is over-aligned for the slot union");
        }
        let slot = self.as_mut_ptr().cast::<T>();
        // SAFETY: the assertions above guarantee `slot` is valid and aligned for `T`.
        unsafe {
            slot.write(value);
            &mut *slot
        }
    }

    /// Interprets the storage as a live `T`.
    ///
    /// # Safety
    /// A `T` must have been written and not yet moved out or dropped.
    #[inline]
    pub unsafe fn assume_ref<T>(&self) -> &T {
        // SAFETY: caller asserts a live `T` sits at offset zero.
        unsafe { &*self.as_ptr().cast::<T>() }
    }

    /// Interprets the storage as a live, exclusively borrowed `T`.
    ///
    /// # Safety
    /// Same as [`Storage::assume_ref`].
    #[inline]
    pub unsafe fn assume_mut<T>(&mut self) -> &mut T {
        // SAFETY: caller asserts a live `T` sits at offset zero.
        unsafe { &mut *self.as_mut_ptr().cast::<T>() }
    }

    /// Bitwise-moves the live `T` out.
    ///
    /// # Safety
    /// A live `T` must be present, and the caller must treat the slot as empty
    /// afterwards so the value is not dropped twice.
    #[inline]
    pub unsafe fn read<T>(&self) -> T {
        // SAFETY: caller asserts initialization and takes over ownership.
        unsafe { ptr::read(self.as_ptr().cast::<T>()) }
    }

    /// Base address of the region.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr().cast()
    }

    /// Mutable base address of the region.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr().cast()
    }
}

/// Drops the `T` at `slot`.
///
/// # Safety
/// `slot` must point at a live `T` that nobody else will drop.
pub(crate) unsafe fn drop_slot<T>(slot: *mut u8) {
    // SAFETY: forwarded from the caller.
    unsafe { ptr::drop_in_place(slot.cast::<T>()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Nil, Union};
    use std::cell::Cell;

    type Slots = Union<u8, Union<u64, Union<[u16; 7], Nil>>>;

    #[test]
    fn test_union_layout_is_max_of_members() {
        assert_eq!(mem::size_of::<Slots>(), 16);
        assert_eq!(mem::align_of::<Slots>(), mem::align_of::<u64>());
        assert_eq!(mem::size_of::<Storage<Slots>>(), mem::size_of::<Slots>());
    }

    #[test]
    fn test_write_read_round_trip() {
        let mut storage = Storage::<Slots>::uninit();
        *storage.write(7u64) += 1;
        // SAFETY: a `u64` was written above.
        assert_eq!(unsafe { *storage.assume_ref::<u64>() }, 8);

        storage.write([3u16; 7]);
        // SAFETY: the array overwrote the `u64`; neither needs dropping.
        let array = unsafe { storage.read::<[u16; 7]>() };
        assert_eq!(array, [3; 7]);
    }

    struct Tracked<'a>(&'a Cell<usize>);

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_storage_never_drops_on_its_own() {
        let drops = Cell::new(0);
        {
            let _storage = Storage::<Union<Tracked<'_>, Nil>>::with_value(Tracked(&drops));
        }
        assert_eq!(drops.get(), 0);

        let mut storage = Storage::<Union<Tracked<'_>, Nil>>::with_value(Tracked(&drops));
        // SAFETY: the `Tracked` written above is live and dropped exactly once.
        unsafe { drop_slot::<Tracked<'_>>(storage.as_mut_ptr()) };
        assert_eq!(drops.get(), 1);
    }
}
