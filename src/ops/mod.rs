//! Copy, move and assignment, swapping, comparison, hashing and formatting.
//!
//! Each container trait exists only when every alternative supports the
//! corresponding operation. The `*Alternatives` traits name those conditions;
//! they are implemented automatically and only show up in bounds and error
//! messages.
//!
//! The operation types (`CloneInto`, `EqOp`, ...) are the visitors these impls
//! dispatch. They are public because they appear in those bounds, but cannot
//! be constructed outside this crate.

mod assign;
mod clone;
mod cmp;
mod fmt;
mod swap;

pub use clone::{CloneAlternatives, CloneFromOp, CloneInto};
pub use cmp::{
    CmpOp, EqAlternatives, EqOp, HashAlternatives, HashOp, OrdAlternatives, PartialCmpOp, PartialEqAlternatives,
    PartialOrdAlternatives,
};
pub use fmt::{DebugAlternatives, DebugOp};
