//! Canonical parameter table tests.

use ec_domain_params::{DomainParameters, NamedCurve, U576};
use hex_literal::hex;
use proptest::prelude::*;

const P256_GENERATOR_X: &[u8] = &hex!(
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000
     6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
);

const P256_GENERATOR_Y: &[u8] = &hex!(
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000
     4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
);

#[test]
fn canonical_constants() {
    for (curve, size) in [
        (NamedCurve::P256, 256),
        (NamedCurve::P384, 384),
        (NamedCurve::P521, 521),
    ] {
        let params = curve.parameters();
        assert_eq!(params.field_size, size, "{curve}");
        assert_eq!(params.cofactor, 1, "{curve}");
        assert_eq!(params.field_prime.bits() as u32, size, "{curve}");
        assert_eq!(params.order.bits() as u32, size, "{curve}");

        // All three NIST curves use a = p - 3.
        let three = U576::from_u64(3);
        assert_eq!(params.a.wrapping_add(&three), params.field_prime, "{curve}");

        // Generator coordinates are reduced field elements.
        assert!(params.gx < params.field_prime, "{curve}");
        assert!(params.gy < params.field_prime, "{curve}");
        assert_ne!(params.b, U576::ZERO, "{curve}");
    }
}

#[test]
fn p256_generator() {
    let params = NamedCurve::P256.parameters();
    assert_eq!(params.gx, U576::from_be_slice(P256_GENERATOR_X));
    assert_eq!(params.gy, U576::from_be_slice(P256_GENERATOR_Y));
}

#[test]
fn round_trip() {
    for curve in NamedCurve::ALL {
        assert_eq!(NamedCurve::from_parameters(curve.parameters()), Some(curve));
    }
}

#[test]
fn absent_input() {
    assert!(None::<NamedCurve>.map(NamedCurve::parameters).is_none());
    assert_eq!(
        None::<&DomainParameters>.and_then(NamedCurve::from_parameters),
        None
    );
}

#[test]
fn parameter_sets_pairwise_distinct() {
    let [p256, p384, p521] = NamedCurve::ALL.map(NamedCurve::parameters);
    for (x, y) in [(p256, p384), (p256, p521), (p384, p521)] {
        assert_ne!(x.field_size, y.field_size);
        assert_ne!(x.field_prime, y.field_prime);
        assert_ne!(x.a, y.a);
        assert_ne!(x.b, y.b);
        assert_ne!(x.gx, y.gx);
        assert_ne!(x.gy, y.gy);
        assert_ne!(x.order, y.order);
        assert!(!x.matches(y));
    }
}

#[test]
fn generator_x_off_by_one_rejected() {
    let mut params = *NamedCurve::P256.parameters();
    params.gx = params.gx.wrapping_add(&U576::ONE);
    assert_eq!(NamedCurve::from_parameters(&params), None);
}

#[test]
fn coefficient_a_off_by_one_rejected() {
    let mut params = *NamedCurve::P384.parameters();
    params.a = params.a.wrapping_add(&U576::ONE);
    assert_eq!(params.field_size, 384);
    assert_eq!(NamedCurve::from_parameters(&params), None);
}

#[test]
fn cofactor_mismatch_rejected() {
    let mut params = *NamedCurve::P521.parameters();
    params.cofactor = 2;
    assert_eq!(NamedCurve::from_parameters(&params), None);
}

#[test]
fn field_size_mismatch_rejected() {
    let mut params = *NamedCurve::P256.parameters();
    params.field_size = 384;
    assert_eq!(NamedCurve::from_parameters(&params), None);
}

#[test]
fn lookups_are_deterministic() {
    for curve in NamedCurve::ALL {
        assert_eq!(curve.parameters(), curve.parameters());
        assert_eq!(
            NamedCurve::from_parameters(curve.parameters()),
            NamedCurve::from_parameters(curve.parameters())
        );
    }
}

#[test]
fn curve_names() {
    assert_eq!(NamedCurve::P256.crv(), "P-256");
    assert_eq!(NamedCurve::P384.crv(), "P-384");
    assert_eq!(NamedCurve::P521.crv(), "P-521");
    assert_eq!(NamedCurve::P256.sec1_name(), "secp256r1");
    assert_eq!(NamedCurve::P521.to_string(), "P-521");

    for curve in NamedCurve::ALL {
        assert_eq!(curve.crv().parse(), Ok(curve));
        assert_eq!(curve.sec1_name().parse(), Ok(curve));
    }

    assert_eq!("prime256v1".parse(), Ok(NamedCurve::P256));
    assert!("P-224".parse::<NamedCurve>().is_err());
    assert!("".parse::<NamedCurve>().is_err());
}

proptest! {
    /// Perturbing any single compared field of a canonical record makes
    /// reverse lookup reject it, no matter how close the other fields are.
    #[test]
    fn single_field_perturbation_rejected(field in 0usize..6, delta in 1u64..) {
        for curve in NamedCurve::ALL {
            let mut params = *curve.parameters();
            let d = U576::from_u64(delta);
            match field {
                0 => params.a = params.a.wrapping_add(&d),
                1 => params.b = params.b.wrapping_add(&d),
                2 => params.gx = params.gx.wrapping_add(&d),
                3 => params.gy = params.gy.wrapping_add(&d),
                4 => params.order = params.order.wrapping_add(&d),
                _ => {
                    let bump = (delta % u64::from(u32::MAX)) as u32 + 1;
                    params.cofactor = params.cofactor.wrapping_add(bump);
                }
            }
            prop_assert_eq!(NamedCurve::from_parameters(&params), None);
        }
    }
}
