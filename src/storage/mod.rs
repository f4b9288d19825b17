//! The shared slot region of a container.
//!
//! [`Union`] is a right-recursive `repr(C)` union over the alternatives of a
//! list: slot 0 is the head, the remainder recurses into the tail, and [`Nil`]
//! ends the recursion. Its size and alignment are therefore the maxima over the
//! alternatives, and because every field of a `repr(C)` union starts at offset
//! zero, descending K levels of the recursion lands on the base address. Slot
//! access is a pointer cast.
//!
//! [`Storage`] wraps the union in `MaybeUninit`. It never knows which slot is
//! live; the tag held by the lifetime layer is the only source of truth.

pub(crate) mod slot;

pub use slot::Storage;

use core::mem::ManuallyDrop;

/// One level of the recursive slot union.
#[repr(C)]
pub union Union<H, T> {
    #[allow(dead_code)]
    head: ManuallyDrop<H>,
    #[allow(dead_code)]
    tail: ManuallyDrop<T>,
}

/// End of a recursive union or of a type-level list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nil;
