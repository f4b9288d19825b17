//! Capability levels and their per-list fold.

use super::Alternative;

/// How an operation is available for a type or for a whole alternative list.
///
/// Levels are ordered by strictness, so the level of a list is the maximum
/// over its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// The operation is a bitwise copy or a no-op.
    TriviallyAvailable = 0,
    /// The operation runs type-specific code.
    Available = 1,
    /// The operation does not exist.
    Unavailable = 2,
}

impl Level {
    /// Returns the stricter of the two levels.
    #[inline]
    pub const fn max(self, other: Level) -> Level {
        if (self as u8) >= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Returns `true` unless the level is [`Level::Unavailable`].
    #[inline]
    pub const fn is_available(self) -> bool {
        !matches!(self, Level::Unavailable)
    }

    /// Returns `true` for [`Level::TriviallyAvailable`].
    #[inline]
    pub const fn is_trivial(self) -> bool {
        matches!(self, Level::TriviallyAvailable)
    }

    /// Builds a level from the two facts a type can report about itself.
    ///
    /// `trivial` wins over `available`; a type that is trivial is also available.
    #[inline]
    pub const fn from_flags(trivial: bool, available: bool) -> Level {
        if trivial {
            Level::TriviallyAvailable
        } else if available {
            Level::Available
        } else {
            Level::Unavailable
        }
    }
}

/// Per-operation classification of a type or of an alternative list.
///
/// Each operation is classified independently. A list can be trivially
/// destructible while its copy is merely available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Dropping the live value.
    pub destroy: Level,
    /// `Clone::clone`.
    pub copy_construct: Level,
    /// Moving the value into fresh storage.
    pub move_construct: Level,
    /// `Clone::clone_from` over a live value of the same type.
    pub copy_assign: Level,
    /// Moving a value over a live value of the same type.
    pub move_assign: Level,
}

impl Capabilities {
    /// The identity of [`Capabilities::join`].
    pub const TRIVIAL: Capabilities = Capabilities {
        destroy: Level::TriviallyAvailable,
        copy_construct: Level::TriviallyAvailable,
        move_construct: Level::TriviallyAvailable,
        copy_assign: Level::TriviallyAvailable,
        move_assign: Level::TriviallyAvailable,
    };

    /// Classifies a single alternative.
    ///
    /// Moves are bitwise in Rust, so `move_construct` is always trivial and
    /// `move_assign` only costs the drop of the overwritten value.
    pub const fn of<T: Alternative>() -> Capabilities {
        let destroy = if core::mem::needs_drop::<T>() {
            Level::Available
        } else {
            Level::TriviallyAvailable
        };
        Capabilities {
            destroy,
            copy_construct: T::COPY,
            move_construct: Level::TriviallyAvailable,
            copy_assign: T::COPY,
            move_assign: destroy,
        }
    }

    /// Field-wise maximum.
    pub const fn join(self, other: Capabilities) -> Capabilities {
        Capabilities {
            destroy: self.destroy.max(other.destroy),
            copy_construct: self.copy_construct.max(other.copy_construct),
            move_construct: self.move_construct.max(other.move_construct),
            copy_assign: self.copy_assign.max(other.copy_assign),
            move_assign: self.move_assign.max(other.move_assign),
        }
    }

    /// Folds a list of per-alternative classifications; the worst one wins.
    pub const fn fold(items: &[Capabilities]) -> Capabilities {
        let mut acc = Capabilities::TRIVIAL;
        let mut i = 0;
        while i < items.len() {
            acc = acc.join(items[i]);
            i += 1;
        }
        acc
    }

    /// Whether the container can be cloned at all.
    #[inline]
    pub const fn can_copy(self) -> bool {
        self.copy_construct.is_available()
    }

    /// Whether cloning is a bitwise copy.
    #[inline]
    pub const fn copy_is_trivial(self) -> bool {
        self.copy_construct.is_trivial()
    }

    /// Whether cloning is guaranteed not to panic.
    ///
    /// Only bitwise copies carry that guarantee; `Clone` impls may panic.
    #[inline]
    pub const fn copy_never_fails(self) -> bool {
        self.copy_construct.is_trivial()
    }

    /// Moves are bitwise and cannot fail.
    #[inline]
    pub const fn move_never_fails(self) -> bool {
        self.move_construct.is_available()
    }

    /// Swapping only moves values, so it cannot fail either.
    #[inline]
    pub const fn swap_never_fails(self) -> bool {
        self.move_never_fails()
    }

    /// Whether every operation is trivial.
    #[inline]
    pub const fn is_trivial(self) -> bool {
        self.destroy.is_trivial()
            && self.copy_construct.is_trivial()
            && self.move_construct.is_trivial()
            && self.copy_assign.is_trivial()
            && self.move_assign.is_trivial()
    }
}
