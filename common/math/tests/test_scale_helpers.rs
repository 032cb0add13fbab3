// Standalone tests for the SCALE fixed-point helpers.
// Run with: cargo test --test test_scale_helpers

use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

use common_constants::SCALE;
use common_math::SharedMathModule;

pub struct MathTester;

impl multiversx_sc::contract_base::ContractBase for MathTester {
    type Api = StaticApi;
}

impl SharedMathModule for MathTester {}

fn scale() -> BigUint<StaticApi> {
    BigUint::from(SCALE)
}

#[test]
fn test_scale_constant() {
    let tester = MathTester;
    assert_eq!(tester.scale(), BigUint::from(10u64).pow(30));
}

#[test]
fn test_mul_scale_identity() {
    let tester = MathTester;

    // 100% of an amount is the amount itself
    let amount = BigUint::<StaticApi>::from(123_456u64);
    assert_eq!(tester.mul_scale(&amount, &scale()), amount);
}

#[test]
fn test_mul_scale_fraction() {
    let tester = MathTester;

    // 10% of 1000
    let amount = BigUint::<StaticApi>::from(1_000u64);
    let ten_percent = scale() / 10u64;
    assert_eq!(
        tester.mul_scale(&amount, &ten_percent),
        BigUint::from(100u64)
    );
}

#[test]
fn test_div_scale_round_trip() {
    let tester = MathTester;

    let a = BigUint::<StaticApi>::from(30u64);
    let b = BigUint::<StaticApi>::from(120u64);
    let ratio = tester.div_scale(&a, &b);

    // 30 / 120 = 25%
    assert_eq!(ratio, scale() / 4u64);
    assert_eq!(tester.mul_scale(&b, &ratio), a);
}

#[test]
fn test_mul_div_full_precision() {
    let tester = MathTester;

    // (SCALE * SCALE) / SCALE does not overflow and is exact
    let result = tester.mul_div(&scale(), &scale(), &scale());
    assert_eq!(result, scale());
}

#[test]
fn test_fraction_of_and_complement() {
    let tester = MathTester;

    let amount = BigUint::<StaticApi>::from(500u64);
    let fee = scale() / 100u64; // 1%

    assert_eq!(tester.fraction_of(&amount, &fee), BigUint::from(5u64));
    assert_eq!(tester.after_fraction(&amount, &fee), BigUint::from(495u64));
}

#[test]
fn test_min_biguint() {
    let tester = MathTester;

    let a = BigUint::<StaticApi>::from(7u64);
    let b = BigUint::<StaticApi>::from(9u64);
    assert_eq!(tester.min_biguint(a.clone(), b.clone()), a.clone());
    assert_eq!(tester.min_biguint(b.clone(), a.clone()), a);
}

#[test]
#[should_panic]
fn test_div_scale_by_zero_panics() {
    let tester = MathTester;

    let a = BigUint::<StaticApi>::from(1u64);
    let _ = tester.div_scale(&a, &BigUint::zero());
}
