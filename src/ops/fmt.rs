use core::fmt;

use crate::dispatch::{Visit, Visitable};
use crate::Variant;

/// Writes the visited value as `Variant(index, value)`.
#[doc(hidden)]
pub struct DebugOp<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    index: usize,
    result: fmt::Result,
}

impl<A: fmt::Debug> Visit<A> for DebugOp<'_, '_> {
    type Output = ();

    fn visit(&mut self, value: &A) {
        self.result = self.f.debug_tuple("Variant").field(&self.index).field(value).finish();
    }
}

/// Lists whose every alternative is `Debug`.
pub trait DebugAlternatives: for<'a, 'b> Visitable<DebugOp<'a, 'b>> {}

impl<L> DebugAlternatives for L where L: for<'a, 'b> Visitable<DebugOp<'a, 'b>> {}

impl<L: DebugAlternatives> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(index) = self.raw.index() else {
            return f.write_str("Variant(<valueless>)");
        };
        let mut op = DebugOp { f, index, result: Ok(()) };
        let _ = self.raw.dispatch(&mut op);
        op.result
    }
}
