//! NIST P-256 canonical domain parameters.
//!
//! This curve is also known as prime256v1 (ANSI X9.62) and secp256r1
//! (SECG) and is specified in [NIST SP 800-186]. Its equation is
//! `y² = x³ - 3x + b` over a ~256-bit prime field.
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

use crate::{DomainParameters, U576};

/// Prime modulus of the P-256 base field serialized as hexadecimal,
/// zero-extended to 576 bits.
///
/// ```text
/// p = 2^256 - 2^224 + 2^192 + 2^96 - 1
/// ```
const FIELD_PRIME_HEX: &str = "00000000000000000000000000000000000000000000000000000000000000000000000000000000ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// Coefficient `a = p - 3`.
const EQUATION_A_HEX: &str = "00000000000000000000000000000000000000000000000000000000000000000000000000000000ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";

/// Coefficient `b`, the "verifiably random" constant (the SHA-1 digest of
/// an undisclosed seed).
const EQUATION_B_HEX: &str = "000000000000000000000000000000000000000000000000000000000000000000000000000000005ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";

/// Base point x-coordinate.
const GENERATOR_X_HEX: &str = "000000000000000000000000000000000000000000000000000000000000000000000000000000006b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// Base point y-coordinate.
const GENERATOR_Y_HEX: &str = "000000000000000000000000000000000000000000000000000000000000000000000000000000004fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// Order of P-256's elliptic curve group (i.e. scalar modulus).
///
/// ```text
/// n = FFFFFFFF 00000000 FFFFFFFF FFFFFFFF BCE6FAAD A7179E84 F3B9CAC2 FC632551
/// ```
const ORDER_HEX: &str = "00000000000000000000000000000000000000000000000000000000000000000000000000000000ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

/// Canonical P-256 domain parameters.
pub const PARAMS: DomainParameters = DomainParameters {
    field_size: 256,
    field_prime: U576::from_be_hex(FIELD_PRIME_HEX),
    a: U576::from_be_hex(EQUATION_A_HEX),
    b: U576::from_be_hex(EQUATION_B_HEX),
    gx: U576::from_be_hex(GENERATOR_X_HEX),
    gy: U576::from_be_hex(GENERATOR_Y_HEX),
    order: U576::from_be_hex(ORDER_HEX),
    cofactor: 1,
};
