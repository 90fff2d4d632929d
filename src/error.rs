//! Error type.

use core::fmt::{self, Display};

/// Error returned when parsing a curve name that denotes no supported
/// curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnknownCurveError;

impl Display for UnknownCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown elliptic curve")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownCurveError {}
