use std::cmp::Ordering;

use crate::bigint::cmp::cmp_magnitudes;
use crate::bigint::sub::sub_magnitudes;
use crate::bigint::{BigInt, LIMB_BASE};

/// Schoolbook addition of two magnitudes, propagating the carry upwards.
pub(crate) fn add_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u32;
    for (i, &limb) in long.iter().enumerate() {
        let mut digit = limb + short.get(i).copied().unwrap_or(0) + carry;
        if digit >= LIMB_BASE {
            digit -= LIMB_BASE;
            carry = 1;
        } else {
            carry = 0;
        }
        sum.push(digit);
    }
    if carry > 0 {
        sum.push(carry);
    }
    sum
}

impl BigInt {
    pub fn add(&self, rhs: &BigInt) -> BigInt {
        if self.sign == rhs.sign {
            BigInt::from_limbs(self.sign, add_magnitudes(&self.limbs, &rhs.limbs))
        } else {
            // the result takes the sign of the larger magnitude
            match cmp_magnitudes(&self.limbs, &rhs.limbs) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => {
                    BigInt::from_limbs(self.sign, sub_magnitudes(&self.limbs, &rhs.limbs))
                }
                Ordering::Less => {
                    BigInt::from_limbs(rhs.sign, sub_magnitudes(&rhs.limbs, &self.limbs))
                }
            }
        }
    }

    pub fn increment(&mut self) { *self = self.add(&BigInt::one()); }
}

#[cfg(test)]
mod test {
    use super::add_magnitudes;
    use crate::bigint::BigInt;
    use num_bigint::RandomBits;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_add_magnitudes() {
        assert_eq!(add_magnitudes(&[999_999_999, 999_999_999], &[1]), vec![0, 0, 1]);
        assert_eq!(add_magnitudes(&[], &[5]), vec![5]);
        assert_eq!(add_magnitudes(&[], &[]), Vec::<u32>::new());
    }

    #[test]
    fn test_add_signs() {
        let a = BigInt::from(1024);
        let b = BigInt::from(-1024);
        assert_eq!(a.add(&a), BigInt::from(2048));
        assert_eq!(a.add(&b), BigInt::zero());
        assert_eq!(b.add(&a), BigInt::zero());
        assert_eq!(b.add(&b), BigInt::from(-2048));
        assert!(b.add(&a).is_positive());
        assert_eq!(BigInt::from(-5).add(&BigInt::from(3)), BigInt::from(-2));
        assert_eq!(BigInt::from(5).add(&BigInt::from(-8)), BigInt::from(-3));

        let zero = BigInt::zero();
        assert_eq!(BigInt::from(-5).add(&zero), BigInt::from(-5));
        assert_eq!(zero.add(&BigInt::from(-5)), BigInt::from(-5));
        assert_eq!(zero.add(&zero), zero);
        assert_eq!(BigInt::from(-1_000_000_000i64).add(&zero), BigInt::from(-1_000_000_000i64));
    }

    #[test]
    fn test_add() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let a: num_bigint::BigInt = prng.sample(RandomBits::new(254));
            let b: num_bigint::BigInt = prng.sample(RandomBits::new(500));
            let c = &a + &b;

            let sum = BigInt::from(&a).add(&BigInt::from(&b));
            assert_eq!(sum, BigInt::from(&c));
            assert_eq!(BigInt::from(&b).add(&BigInt::from(&a)), sum);
        }
    }

    #[test]
    fn test_add_edge_values() {
        let edges = [0i64, 1, -1, 999_999_999, -999_999_999, 1_000_000_000, -1_000_000_000];
        for &a in edges.iter() {
            for &b in edges.iter() {
                let expected = num_bigint::BigInt::from(a) + num_bigint::BigInt::from(b);
                assert_eq!(BigInt::from(a).add(&BigInt::from(b)), BigInt::from(&expected));
            }
        }
    }

    #[test]
    fn test_increment() {
        let mut a = BigInt::from(256);
        a.increment();
        assert_eq!(a, BigInt::from(257));

        let mut b = BigInt::from(-1);
        b.increment();
        assert_eq!(b, BigInt::zero());

        let mut c = BigInt::from(999_999_999);
        c.increment();
        assert_eq!(c.to_string(), "1000000000");
    }
}
