//! Error types.

/// The error returned when index- or type-directed access targets an
/// alternative that is not currently active.
///
/// A valueless container reports this error for every access and for every
/// visitation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BadVariantAccess;

impl core::fmt::Display for BadVariantAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("variant does not hold the requested alternative")
    }
}

impl std::error::Error for BadVariantAccess {}
