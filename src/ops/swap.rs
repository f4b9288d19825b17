use crate::list::Alternatives;
use crate::Variant;

impl<L: Alternatives> Variant<L> {
    /// Exchanges the values, and with them the live slots, of two containers.
    ///
    /// Two valueless containers stay as they are. Containers on the same slot
    /// exchange their values in place. Otherwise each value is rotated through
    /// a temporary into the other container. Every step is a bitwise move, so
    /// the exchange always completes.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.raw.index(), other.raw.index()) {
            (None, None) => {}
            (Some(a), Some(b)) if a == b => self.raw.swap_storage(&mut other.raw),
            _ => {
                trace!(lhs = self.index(), rhs = other.index(), "swap across slots");
                let held = self.raw.take();
                if let Some((index, storage)) = other.raw.take() {
                    // SAFETY: `self` is valueless after `take`; `storage` holds slot `index`.
                    unsafe { self.raw.install_storage(index, storage) };
                }
                if let Some((index, storage)) = held {
                    // SAFETY: as above, for `other`.
                    unsafe { other.raw.install_storage(index, storage) };
                }
            }
        }
    }
}
