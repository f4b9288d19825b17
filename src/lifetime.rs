//! The lifetime core: a tag and the slot storage it describes.
//!
//! ## Core invariant
//! When `tag` names slot `i`, exactly one live value of slot `i`'s type sits in
//! `storage`. When `tag` is [`Tag::VALUELESS`], `storage` holds nothing live.
//! Every method leaves this invariant intact on return and on unwind.

use core::marker::PhantomData;

use crate::list::Alternatives;
use crate::storage::Storage;

/// Index of the live slot, or the valueless sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Tag(u8);

impl Tag {
    pub(crate) const VALUELESS: Tag = Tag(u8::MAX);

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn new(index: usize) -> Self {
        debug_assert!(index < u8::MAX as usize);
        Tag(index as u8)
    }

    #[inline]
    pub(crate) const fn get(self) -> Option<usize> {
        if self.0 == u8::MAX {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

/// Owner of `{tag, storage}`.
pub(crate) struct RawVariant<L: Alternatives> {
    tag: Tag,
    storage: Storage<L::Union>,
    _owns: PhantomData<L>,
}

impl<L: Alternatives> RawVariant<L> {
    /// A container with no live value. Only used as a starting point that is
    /// immediately filled, or during recovery.
    #[inline]
    pub(crate) const fn valueless() -> Self {
        Self {
            tag: Tag::VALUELESS,
            storage: Storage::uninit(),
            _owns: PhantomData,
        }
    }

    /// # Safety
    /// `T` must be the type of slot `index`.
    #[inline]
    pub(crate) unsafe fn from_value<T>(index: usize, value: T) -> Self {
        Self {
            tag: Tag::new(index),
            storage: Storage::with_value(value),
            _owns: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn index(&self) -> Option<usize> {
        self.tag.get()
    }

    #[inline]
    pub(crate) fn is_valueless(&self) -> bool {
        self.tag == Tag::VALUELESS
    }

    /// Drops the live value, if any, and leaves the container valueless.
    ///
    /// The tag is cleared first: a destructor that panics still leaves a
    /// valueless container behind, never a dangling tag.
    pub(crate) fn destroy(&mut self) {
        let Some(index) = self.tag.get() else {
            return;
        };
        self.tag = Tag::VALUELESS;
        if L::CAPABILITIES.destroy.is_trivial() {
            return;
        }
        // SAFETY: `index` named the live slot until the line above, and the
        // table entry drops exactly that slot's type.
        unsafe { (L::DROP[index])(self.storage.as_mut_ptr()) }
    }

    /// Places `value` into slot `index` and returns it.
    ///
    /// # Safety
    /// The container must be valueless and `T` must be the type of slot `index`.
    #[inline]
    pub(crate) unsafe fn install<T>(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(self.is_valueless());
        let slot = self.storage.write(value);
        self.tag = Tag::new(index);
        slot
    }

    /// Adopts storage that already holds a live value of slot `index`.
    ///
    /// # Safety
    /// The container must be valueless and `storage` must hold a live value of
    /// slot `index`'s type.
    #[inline]
    pub(crate) unsafe fn install_storage(&mut self, index: usize, storage: Storage<L::Union>) {
        debug_assert!(self.is_valueless());
        self.storage = storage;
        self.tag = Tag::new(index);
    }

    /// Moves the live value out bitwise, leaving the container valueless.
    #[inline]
    pub(crate) fn take(&mut self) -> Option<(usize, Storage<L::Union>)> {
        let index = self.tag.get()?;
        self.tag = Tag::VALUELESS;
        let storage = core::mem::replace(&mut self.storage, Storage::uninit());
        Some((index, storage))
    }

    /// # Safety
    /// `T` must be the type of the live slot.
    #[inline]
    pub(crate) unsafe fn get_unchecked<T>(&self) -> &T {
        // SAFETY: forwarded from the caller.
        unsafe { self.storage.assume_ref() }
    }

    /// # Safety
    /// `T` must be the type of the live slot.
    #[inline]
    pub(crate) unsafe fn get_unchecked_mut<T>(&mut self) -> &mut T {
        // SAFETY: forwarded from the caller.
        unsafe { self.storage.assume_mut() }
    }

    #[inline]
    pub(crate) fn storage(&self) -> &Storage<L::Union> {
        &self.storage
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut Storage<L::Union> {
        &mut self.storage
    }

    /// Exchanges the raw storage of two containers without touching tags.
    #[inline]
    pub(crate) fn swap_storage(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.storage, &mut other.storage);
    }

    /// Adopts `storage` as the live value of slot `index`, then drops the
    /// previous value, if any.
    ///
    /// The new value is in place before the old one drops, so a panicking
    /// destructor leaves the container holding the new value.
    ///
    /// # Safety
    /// `storage` must hold a live value of slot `index`'s type which nobody
    /// else will drop.
    pub(crate) unsafe fn replace(&mut self, index: usize, storage: Storage<L::Union>) {
        let previous = Self {
            tag: core::mem::replace(&mut self.tag, Tag::new(index)),
            storage: core::mem::replace(&mut self.storage, storage),
            _owns: PhantomData,
        };
        drop(previous);
    }

    /// A bitwise duplicate of `{tag, storage}`.
    ///
    /// # Safety
    /// Every alternative of `L` must be `Copy`, so neither duplicate owns
    /// anything the other could drop.
    #[inline]
    pub(crate) unsafe fn bitwise_copy(&self) -> Self {
        Self {
            tag: self.tag,
            // SAFETY: the storage is plain bytes for `Copy` alternatives.
            storage: unsafe { core::ptr::read(core::ptr::from_ref(&self.storage)) },
            _owns: PhantomData,
        }
    }
}

impl<L: Alternatives> Drop for RawVariant<L> {
    fn drop(&mut self) {
        self.destroy();
    }
}
