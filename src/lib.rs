#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "std")]
extern crate std;

mod error;
mod params;

pub mod p256;
pub mod p384;
pub mod p521;

pub use crate::{error::UnknownCurveError, params::DomainParameters};
pub use elliptic_curve::{self, bigint::U576};

#[cfg(feature = "pkcs8")]
use elliptic_curve::pkcs8::ObjectIdentifier;

use core::{fmt, str::FromStr};

/// Elliptic curves usable with EC JSON Web Keys, as enumerated in
/// RFC 7518, section 6.2.1.1.
///
/// The set is closed: every variant has exactly one canonical set of
/// [`DomainParameters`], fixed at compile time, and no other curve is
/// representable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum NamedCurve {
    /// NIST P-256, a.k.a. secp256r1 (SECG) and prime256v1 (ANSI X9.62).
    P256,

    /// NIST P-384, a.k.a. secp384r1 (SECG).
    P384,

    /// NIST P-521, a.k.a. secp521r1 (SECG).
    P521,
}

impl NamedCurve {
    /// All supported curves, in the fixed order used by
    /// [`NamedCurve::from_parameters`] when scanning for a match.
    ///
    /// The three canonical parameter sets are pairwise distinct in every
    /// compared field, so at most one candidate can ever match; the fixed
    /// order only makes the scan deterministic.
    pub const ALL: [Self; 3] = [Self::P256, Self::P384, Self::P521];

    /// Returns the canonical domain parameters for this curve.
    ///
    /// The returned reference points at process-wide constant data which
    /// never changes; lookups with an absent curve are expressed at the
    /// call site, e.g. `curve.map(NamedCurve::parameters)`.
    pub const fn parameters(self) -> &'static DomainParameters {
        match self {
            Self::P256 => &p256::PARAMS,
            Self::P384 => &p384::PARAMS,
            Self::P521 => &p521::PARAMS,
        }
    }

    /// Identifies the named curve whose canonical parameters exactly match
    /// `params`, or `None` if no curve matches.
    ///
    /// Candidates are scanned in [`NamedCurve::ALL`] order and tested with
    /// [`DomainParameters::matches`]: exact arbitrary-precision equality of
    /// every compared field, with no tolerance. A mismatch in any single
    /// field rejects the candidate; there is no closest-match behavior.
    ///
    /// An unmatched input is an expected outcome (e.g. probing an
    /// externally supplied key against the known-curve table), not an
    /// error.
    pub fn from_parameters(params: &DomainParameters) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|curve| curve.parameters().matches(params))
    }

    /// Returns the JWK `crv` parameter value for this curve, e.g. `P-256`.
    pub const fn crv(self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }

    /// Returns the SEC 1 name of this curve, e.g. `secp256r1`.
    pub const fn sec1_name(self) -> &'static str {
        match self {
            Self::P256 => "secp256r1",
            Self::P384 => "secp384r1",
            Self::P521 => "secp521r1",
        }
    }

    /// Returns the ASN.1 object identifier of this curve.
    #[cfg(feature = "pkcs8")]
    pub const fn oid(self) -> ObjectIdentifier {
        match self {
            Self::P256 => ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"),
            Self::P384 => ObjectIdentifier::new_unwrap("1.3.132.0.34"),
            Self::P521 => ObjectIdentifier::new_unwrap("1.3.132.0.35"),
        }
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.crv())
    }
}

impl FromStr for NamedCurve {
    type Err = UnknownCurveError;

    /// Parses a curve from its JWK `crv` value or its SEC 1 / ANSI X9.62
    /// alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P-256" | "secp256r1" | "prime256v1" => Ok(Self::P256),
            "P-384" | "secp384r1" => Ok(Self::P384),
            "P-521" | "secp521r1" => Ok(Self::P521),
            _ => Err(UnknownCurveError),
        }
    }
}
