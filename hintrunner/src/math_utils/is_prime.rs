use num_bigint::BigUint;

/// Probabilistic primality check, used to guard the modular square root.
pub fn is_prime(n: &BigUint) -> bool {
    num_prime::nt_funcs::is_prime::<BigUint>(n, None).probably()
}
