use crate::list::{Alternatives, Locate};
use crate::storage::Storage;
use crate::Variant;

impl<L: Alternatives> Variant<L> {
    /// Converting assignment: stores `value` in the unique slot of type `T`.
    ///
    /// When that slot is already live the value is assigned over the old one;
    /// otherwise `value` takes the slot and the previous alternative is dropped
    /// afterwards. `value` is fully built before the container is touched, so a
    /// failure while building it leaves the current value in place.
    pub fn set<T, I>(&mut self, value: T) -> &mut T
    where
        L: Locate<T, I>,
    {
        let index = <L as Locate<T, I>>::INDEX;
        if self.raw.index() == Some(index) {
            // SAFETY: the slot of `T` is live.
            let slot = unsafe { self.raw.get_unchecked_mut::<T>() };
            *slot = value;
            slot
        } else {
            // SAFETY: `Locate` names the slot of `T`, and the storage owns the
            // only copy of `value`.
            unsafe {
                self.raw.replace(index, Storage::with_value(value));
                self.raw.get_unchecked_mut::<T>()
            }
        }
    }

    /// Like [`Variant::set`], building the value with `make` first.
    ///
    /// Unlike [`Variant::emplace_with`], a panic in `make` leaves the current
    /// value in place.
    pub fn set_with<T, I, F>(&mut self, make: F) -> &mut T
    where
        L: Locate<T, I>,
        F: FnOnce() -> T,
    {
        let value = make();
        self.set(value)
    }

    /// Move-assignment from another container.
    ///
    /// - both valueless: nothing happens;
    /// - `source` valueless: `self` drops its value and becomes valueless;
    /// - otherwise: `self` adopts the incoming value, then drops its old one.
    ///   A panicking destructor leaves `self` holding the incoming value.
    pub fn assign(&mut self, mut source: Self) {
        if L::CAPABILITIES.move_assign.is_trivial() {
            self.raw = source.raw;
            return;
        }
        match (self.raw.index(), source.raw.take()) {
            (None, None) => {}
            (Some(_), None) => self.raw.destroy(),
            (_, Some((index, storage))) => {
                // SAFETY: `take` left `source` valueless, so `storage` is the
                // single owner of a live value of slot `index`.
                unsafe { self.raw.replace(index, storage) };
            }
        }
    }
}
