//! Trait classification of alternatives.
//!
//! Every alternative reports a [`Level`] per operation through
//! [`Capabilities::of`]; a list folds those with [`Capabilities::fold`] so that
//! the strictest member decides the level of the whole container.

mod alternative;
pub mod detect;
mod level;

pub use alternative::Alternative;
pub use level::{Capabilities, Level};
