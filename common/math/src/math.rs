#![no_std]

use common_constants::SCALE;
use common_errors::ERROR_DIVISION_BY_ZERO;

multiversx_sc::imports!();

/// Fixed-point arithmetic over `BigUint` with SCALE = 10^30.
///
/// Every division in the protocol truncates toward zero; the helpers here are
/// the only place raw `/` on scaled quantities is allowed, so the rounding
/// direction is uniform and auditable.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn scale(&self) -> BigUint {
        BigUint::from(SCALE)
    }

    /// `a * b / SCALE`, truncated toward zero. `b` is a SCALE-scaled rate or
    /// fraction; the result carries `a`'s unit.
    fn mul_scale(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b / self.scale()
    }

    /// `a * SCALE / b`, truncated toward zero. Produces a SCALE-scaled ratio.
    fn div_scale(&self, a: &BigUint, b: &BigUint) -> BigUint {
        require!(*b != BigUint::zero(), ERROR_DIVISION_BY_ZERO);
        a * &self.scale() / b
    }

    /// `a * b / denominator`, truncated toward zero, with the product taken
    /// at full precision before the division.
    fn mul_div(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        require!(*denominator != BigUint::zero(), ERROR_DIVISION_BY_ZERO);
        a * b / denominator.clone()
    }

    /// Applies a SCALE-scaled fraction to a raw amount.
    fn fraction_of(&self, amount: &BigUint, fraction: &BigUint) -> BigUint {
        self.mul_scale(amount, fraction)
    }

    /// The complement `amount - fraction_of(amount, fraction)`, i.e. the part
    /// kept after deducting a SCALE-scaled fraction.
    fn after_fraction(&self, amount: &BigUint, fraction: &BigUint) -> BigUint {
        amount - &self.fraction_of(amount, fraction)
    }

    fn min_biguint(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
