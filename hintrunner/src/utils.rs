use crate::Felt252;
use lazy_static::lazy_static;
use num_bigint::BigUint;

#[macro_export]
macro_rules! relocatable {
    ($val1 : expr, $val2 : expr) => {
        $crate::types::relocatable::Relocatable {
            segment_index: $val1,
            offset: $val2,
        }
    };
}

lazy_static! {
    pub static ref CAIRO_PRIME: BigUint = Felt252::prime();
}


#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn cairo_prime_matches_the_stark_field() {
        // 2**251 + 17 * 2**192 + 1
        let expected =
            (BigUint::one() << 251u32) + BigUint::from(17_u32) * (BigUint::one() << 192u32) + 1_u32;
        assert_eq!(*CAIRO_PRIME, expected);
    }
}
