//! Arithmetic helpers behind the hint set: modular square roots over the
//! VM's prime field.

mod is_prime;
pub use is_prime::is_prime;

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{rngs::SmallRng, SeedableRng};

use crate::types::errors::math_errors::MathError;
use crate::utils::CAIRO_PRIME;
use crate::Felt252;

/// Computes the canonical modular square root of `value`.
///
/// Every quadratic residue has two roots, r and P - r; the smaller
/// canonical representative is the one returned. Returns None when `value`
/// is not a quadratic residue of the field.
pub fn sqrt(value: &Felt252) -> Option<Felt252> {
    sqrt_prime_power(&value.to_biguint(), &CAIRO_PRIME).map(Felt252::from)
}

// Adapted from sympy _sqrt_prime_power with k == 1
pub fn sqrt_prime_power(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    if p.is_zero() || !is_prime(p) {
        return None;
    }
    let two = BigUint::from(2_u32);
    let a = a.mod_floor(p);
    if p == &two {
        return Some(a);
    }
    if !(a < two || (a.modpow(&(p - 1_u32).div_floor(&two), p)).is_one()) {
        return None;
    };

    if p.mod_floor(&BigUint::from(4_u32)) == 3_u32.into() {
        let res = a.modpow(&(p + 1_u32).div_floor(&BigUint::from(4_u32)), p);
        return Some(core::cmp::min(res.clone(), p - res));
    };

    if p.mod_floor(&BigUint::from(8_u32)) == 5_u32.into() {
        let sign = a.modpow(&(p - 1_u32).div_floor(&BigUint::from(4_u32)), p);
        if sign.is_one() {
            let res = a.modpow(&(p + 3_u32).div_floor(&BigUint::from(8_u32)), p);
            return Some(core::cmp::min(res.clone(), p - res));
        } else {
            let b = (4_u32 * &a).modpow(&(p - 5_u32).div_floor(&BigUint::from(8_u32)), p);
            let x = (2_u32 * &a * b).mod_floor(p);
            if x.modpow(&two, p) == a {
                return Some(x);
            }
        }
    };

    Some(sqrt_tonelli_shanks(&a, p))
}

fn sqrt_tonelli_shanks(n: &BigUint, prime: &BigUint) -> BigUint {
    // Based on Tonelli-Shanks' algorithm for finding square roots
    // and sympy's library implementation of said algorithm.
    if n.is_zero() || n.is_one() {
        return n.clone();
    }
    let s = (prime - 1_u32).trailing_zeros().unwrap_or_default();
    let t = prime >> s;
    let a = n.modpow(&t, prime);
    // Rng is not critical here so its safe to use a seeded value
    let mut rng = SmallRng::seed_from_u64(11480028852697973135);
    let mut d;
    loop {
        d = RandBigInt::gen_biguint_range(&mut rng, &BigUint::from(2_u32), &(prime - 1_u32));
        let r = legendre_symbol(&d, prime);
        if r == -1 {
            break;
        };
    }
    d = d.modpow(&t, prime);
    let mut m = BigUint::zero();
    let mut exponent = BigUint::one() << (s - 1);
    let mut adm;
    for i in 0..s as u32 {
        adm = &a * &d.modpow(&m, prime);
        adm = adm.modpow(&exponent, prime);
        exponent >>= 1;
        if adm == (prime - 1_u32) {
            m += BigUint::from(1_u32) << i;
        }
    }
    let root_1 =
        (n.modpow(&((t + 1_u32) >> 1), prime) * d.modpow(&(m >> 1), prime)).mod_floor(prime);
    let root_2 = prime - &root_1;
    if root_1 < root_2 {
        root_1
    } else {
        root_2
    }
}

/// Returns the Legendre symbol `(a / p)`, assuming p is an odd prime and
/// `a.mod_floor(p) == a`.
fn legendre_symbol(a: &BigUint, p: &BigUint) -> i8 {
    if a.is_zero() {
        return 0;
    };
    if is_quad_residue(a, p).unwrap_or_default() {
        1
    } else {
        -1
    }
}

// Ported from sympy implementation
// Simplified as a & p are nonnegative
// Asumes p is a prime number
pub(crate) fn is_quad_residue(a: &BigUint, p: &BigUint) -> Result<bool, MathError> {
    if p.is_zero() {
        return Err(MathError::IsQuadResidueZeroPrime);
    }
    let a = if a >= p { a.mod_floor(p) } else { a.clone() };
    if a < BigUint::from(2_u8) || p < &BigUint::from(3_u8) {
        return Ok(true);
    }
    Ok(
        a.modpow(&(p - BigUint::one()).div_floor(&BigUint::from(2_u8)), p)
            .is_one(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sqrt_of_small_squares() {
        assert_eq!(sqrt(&Felt252::from(36)), Some(Felt252::from(6)));
        assert_eq!(sqrt(&Felt252::from(0)), Some(Felt252::from(0)));
        assert_eq!(sqrt(&Felt252::from(1)), Some(Felt252::from(1)));
    }

    #[test]
    fn sqrt_returns_the_smaller_root() {
        // Of the two roots of 4, the canonical one is 2, not P - 2.
        assert_eq!(sqrt(&Felt252::from(4)), Some(Felt252::from(2)));
    }

    #[test]
    fn sqrt_of_non_residue() {
        // 3 generates the multiplicative group of the field, so it has no
        // square root.
        assert_eq!(sqrt(&Felt252::from(3)), None);
    }

    #[test]
    fn test_sqrt_prime_power() {
        let n: BigUint = 25_u32.into();
        let p: BigUint = 18446744069414584321_u128.into();
        assert_eq!(sqrt_prime_power(&n, &p), Some(5_u32.into()));
    }

    #[test]
    fn test_sqrt_prime_power_p_is_zero() {
        let n = BigUint::one();
        let p: BigUint = BigUint::zero();
        assert_eq!(sqrt_prime_power(&n, &p), None);
    }

    #[test]
    fn test_sqrt_prime_power_non_prime() {
        let n: BigUint = 25_u32.into();
        let p: BigUint = 24_u32.into();
        assert_eq!(sqrt_prime_power(&n, &p), None);
    }

    #[test]
    fn is_quad_residue_zero_prime() {
        assert_eq!(
            is_quad_residue(&BigUint::one(), &BigUint::zero()),
            Err(MathError::IsQuadResidueZeroPrime)
        );
    }

    proptest! {
        #[test]
        fn sqrt_of_a_square_squares_back(x in any::<u128>()) {
            let square = Felt252::from(x) * Felt252::from(x);
            let root = sqrt(&square).unwrap();
            prop_assert_eq!(root * root, square);
        }
    }
}
