//! NIST P-384 canonical domain parameters.
//!
//! This curve is also known as secp384r1 (SECG) and is specified in
//! [NIST SP 800-186]. Its equation is `y² = x³ - 3x + b` over a ~384-bit
//! prime field.
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

use crate::{DomainParameters, U576};

/// Prime modulus of the P-384 base field serialized as hexadecimal,
/// zero-extended to 576 bits.
///
/// ```text
/// p = 2^384 - 2^128 - 2^96 + 2^32 - 1
/// ```
const FIELD_PRIME_HEX: &str = "000000000000000000000000000000000000000000000000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff";

/// Coefficient `a = p - 3`.
const EQUATION_A_HEX: &str = "000000000000000000000000000000000000000000000000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc";

/// Coefficient `b`.
const EQUATION_B_HEX: &str = "000000000000000000000000000000000000000000000000b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef";

/// Base point x-coordinate.
const GENERATOR_X_HEX: &str = "000000000000000000000000000000000000000000000000aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7";

/// Base point y-coordinate.
const GENERATOR_Y_HEX: &str = "0000000000000000000000000000000000000000000000003617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f";

/// Order of P-384's elliptic curve group (i.e. scalar modulus).
const ORDER_HEX: &str = "000000000000000000000000000000000000000000000000ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973";

/// Canonical P-384 domain parameters.
pub const PARAMS: DomainParameters = DomainParameters {
    field_size: 384,
    field_prime: U576::from_be_hex(FIELD_PRIME_HEX),
    a: U576::from_be_hex(EQUATION_A_HEX),
    b: U576::from_be_hex(EQUATION_B_HEX),
    gx: U576::from_be_hex(GENERATOR_X_HEX),
    gy: U576::from_be_hex(GENERATOR_Y_HEX),
    order: U576::from_be_hex(ORDER_HEX),
    cofactor: 1,
};
