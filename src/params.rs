//! Domain parameter record and the structural match predicate.

use elliptic_curve::bigint::U576;

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b` over
/// a prime field.
///
/// All big-integer fields are stored as 576-bit unsigned integers (the
/// width required by P-521), zero-extended for the narrower curves.
/// Zero-extension does not affect equality, and `field_size` records the
/// actual bit length of the underlying field.
///
/// Values are plain data: callers may construct their own records (e.g.
/// from an externally supplied key) and probe them against the canonical
/// table with [`NamedCurve::from_parameters`]. The canonical records
/// themselves are `const` and can never be mutated.
///
/// [`NamedCurve::from_parameters`]: crate::NamedCurve::from_parameters
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DomainParameters {
    /// Bit length of the prime field.
    pub field_size: u32,

    /// Prime modulus `p` of the field.
    pub field_prime: U576,

    /// Curve coefficient `a`. For the NIST curves this is `p - 3`.
    pub a: U576,

    /// Curve coefficient `b`.
    pub b: U576,

    /// Affine x-coordinate of the base point.
    pub gx: U576,

    /// Affine y-coordinate of the base point.
    pub gy: U576,

    /// Order of the subgroup generated by the base point.
    pub order: U576,

    /// Cofactor of the subgroup. 1 for all three NIST curves.
    pub cofactor: u32,
}

impl DomainParameters {
    /// Tests `other` for an exact structural match against `self`.
    ///
    /// Compares the field size, `a`, `b`, both generator coordinates, the
    /// order, and the cofactor. Every comparison is exact: no modular
    /// reduction, no truncation, no tolerance. The prime modulus itself is
    /// not compared; the field size stands in for it, matching the
    /// comparison JOSE implementations perform on `ECParameterSpec`
    /// values.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.field_size == other.field_size
            && self.a == other.a
            && self.b == other.b
            && self.gx == other.gx
            && self.gy == other.gy
            && self.order == other.order
            && self.cofactor == other.cofactor
    }
}
