//! Tuple implementations of the list traits, arities 1 through 12.
//!
//! Each tuple gets its union and cons-list types, one `At<K>` impl per slot,
//! the drop table and the four dispatch tables. The macros pass the full
//! parameter list as a single token tree so it can be repeated inside the
//! per-slot expansion.

use super::{Alternatives, At, Cons};
use crate::dispatch::{
    pair_mut_thunk, pair_thunk, visit_mut_thunk, visit_thunk, Diagonal, DiagonalMut, MutThunk, PairMutThunk,
    PairThunk, Thunk, Visit, VisitMut, VisitPair, VisitPairMut, Visitable, VisitableMut,
};
use crate::ops::{EqAlternatives, PartialEqAlternatives};
use crate::storage::slot::drop_slot;
use crate::storage::{Nil, Union};
use crate::traits::{Alternative, Capabilities};

macro_rules! union_of {
    ($head:ident) => { Union<$head, Nil> };
    ($head:ident, $($tail:ident),+) => { Union<$head, union_of!($($tail),+)> };
}

macro_rules! list_of {
    ($head:ident) => { Cons<$head, Nil> };
    ($head:ident, $($tail:ident),+) => { Cons<$head, list_of!($($tail),+)> };
}

macro_rules! tuple_impls {
    ($( $len:literal => ($($name:ident $idx:literal),+); )+) => {
        $( tuple_impls!(@impl $len [$($name),+] $($name $idx),+); )+
    };

    (@impl $len:literal $all:tt $($name:ident $idx:literal),+) => {
        tuple_impls!(@list $len $all);
        $( tuple_impls!(@at $all $name $idx); )+
    };

    (@at [$($all:ident),+] $name:ident $idx:literal) => {
        // SAFETY: slot `$idx` of the union is `$name`.
        unsafe impl<$($all: Alternative),+> At<$idx> for ($($all,)+) {
            type Output = $name;
        }
    };

    (@list $len:literal [$($all:ident),+]) => {
        // SAFETY: `union_of!` nests one field per alternative in order, and
        // every table below lists the alternatives in that same order.
        unsafe impl<$($all: Alternative),+> Alternatives for ($($all,)+) {
            const LEN: usize = $len;
            type Union = union_of!($($all),+);
            type List = list_of!($($all),+);
            const CAPABILITIES: Capabilities = Capabilities::fold(&[$(Capabilities::of::<$all>()),+]);
            const DROP: &'static [unsafe fn(*mut u8)] = &[$(drop_slot::<$all>),+];
        }

        // SAFETY: entry `i` is instantiated for slot `i` and writes an `R`.
        unsafe impl<W, R, $($all: Alternative),+> Visitable<W> for ($($all,)+)
        where
            $(W: Visit<$all, Output = R>),+
        {
            type Output = R;
            const TABLE: &'static [Thunk] = &[$(visit_thunk::<W, $all, R>),+];
        }

        // SAFETY: as above.
        unsafe impl<W, R, $($all: Alternative),+> VisitableMut<W> for ($($all,)+)
        where
            $(W: VisitMut<$all, Output = R>),+
        {
            type Output = R;
            const TABLE: &'static [MutThunk] = &[$(visit_mut_thunk::<W, $all, R>),+];
        }

        // SAFETY: as above.
        unsafe impl<W, R, $($all: Alternative),+> Diagonal<W> for ($($all,)+)
        where
            $(W: VisitPair<$all, Output = R>),+
        {
            type Output = R;
            const TABLE: &'static [PairThunk] = &[$(pair_thunk::<W, $all, R>),+];
        }

        // SAFETY: as above.
        unsafe impl<W, R, $($all: Alternative),+> DiagonalMut<W> for ($($all,)+)
        where
            $(W: VisitPairMut<$all, Output = R>),+
        {
            type Output = R;
            const TABLE: &'static [PairMutThunk] = &[$(pair_mut_thunk::<W, $all, R>),+];
        }

        impl<$($all: Alternative + Eq),+> EqAlternatives for ($($all,)+) where Self: PartialEqAlternatives {}
    };
}

tuple_impls! {
    1 => (A0 0);
    2 => (A0 0, A1 1);
    3 => (A0 0, A1 1, A2 2);
    4 => (A0 0, A1 1, A2 2, A3 3);
    5 => (A0 0, A1 1, A2 2, A3 3, A4 4);
    6 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5);
    7 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6);
    8 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7);
    9 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8);
    10 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9);
    11 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10);
    12 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11);
}

#[cfg(test)]
mod tests {
    use crate::list::{AlternativeAt, Alternatives, Locate};
    use crate::traits::Level;
    use core::any::TypeId;
    use core::mem;

    fn slot_type<L: crate::list::At<K>, const K: usize>() -> TypeId
    where
        AlternativeAt<L, K>: 'static,
    {
        TypeId::of::<AlternativeAt<L, K>>()
    }

    #[test]
    fn test_len_and_slot_types() {
        type L = (u8, String, Vec<u32>);
        assert_eq!(<L as Alternatives>::LEN, 3);
        assert_eq!(slot_type::<L, 0>(), TypeId::of::<u8>());
        assert_eq!(slot_type::<L, 1>(), TypeId::of::<String>());
        assert_eq!(slot_type::<L, 2>(), TypeId::of::<Vec<u32>>());
    }

    #[test]
    fn test_locate_unique_types() {
        type L = (u8, String, Vec<u32>, i64);
        assert_eq!(<L as Locate<u8, _>>::INDEX, 0);
        assert_eq!(<L as Locate<Vec<u32>, _>>::INDEX, 2);
        assert_eq!(<L as Locate<i64, _>>::INDEX, 3);
    }

    #[test]
    fn test_union_covers_largest_member() {
        type L = (u8, [u64; 3], u16);
        let union_size = mem::size_of::<<L as Alternatives>::Union>();
        assert_eq!(union_size, 24);
        assert_eq!(mem::align_of::<<L as Alternatives>::Union>(), 8);
    }

    #[test]
    fn test_twelve_slots() {
        type L = (u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, char, String);
        assert_eq!(<L as Alternatives>::LEN, 12);
        assert_eq!(<L as Locate<String, _>>::INDEX, 11);
        assert_eq!(<L as Alternatives>::CAPABILITIES.copy_construct, Level::Available);
        assert_eq!(slot_type::<L, 10>(), TypeId::of::<char>());
    }
}
