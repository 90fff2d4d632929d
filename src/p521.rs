//! NIST P-521 canonical domain parameters.
//!
//! This curve is also known as secp521r1 (SECG) and is specified in
//! [NIST SP 800-186]. Its equation is `y² = x³ - 3x + b` over a ~521-bit
//! prime field (a Mersenne prime).
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

use crate::{DomainParameters, U576};

/// Prime modulus of the P-521 base field serialized as hexadecimal,
/// zero-extended to 576 bits.
///
/// ```text
/// p = 2^521 - 1
/// ```
const FIELD_PRIME_HEX: &str = "00000000000001ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// Coefficient `a = p - 3`.
const EQUATION_A_HEX: &str = "00000000000001fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc";

/// Coefficient `b`.
const EQUATION_B_HEX: &str = "0000000000000051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00";

/// Base point x-coordinate.
const GENERATOR_X_HEX: &str = "00000000000000c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66";

/// Base point y-coordinate.
const GENERATOR_Y_HEX: &str = "000000000000011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650";

/// Order of P-521's elliptic curve group (i.e. scalar modulus).
const ORDER_HEX: &str = "00000000000001fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409";

/// Canonical P-521 domain parameters.
pub const PARAMS: DomainParameters = DomainParameters {
    field_size: 521,
    field_prime: U576::from_be_hex(FIELD_PRIME_HEX),
    a: U576::from_be_hex(EQUATION_A_HEX),
    b: U576::from_be_hex(EQUATION_B_HEX),
    gx: U576::from_be_hex(GENERATOR_X_HEX),
    gy: U576::from_be_hex(GENERATOR_Y_HEX),
    order: U576::from_be_hex(ORDER_HEX),
    cofactor: 1,
};
