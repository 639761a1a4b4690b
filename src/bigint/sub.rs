use crate::bigint::{BigInt, LIMB_BASE};

/// Schoolbook subtraction `a - b`; requires `a >= b`.
pub(crate) fn sub_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(a.len() >= b.len());

    let mut difference = Vec::with_capacity(a.len());
    let mut borrow = 0u32;
    for (i, &limb) in a.iter().enumerate() {
        let subtrahend = b.get(i).copied().unwrap_or(0) + borrow;
        if limb >= subtrahend {
            difference.push(limb - subtrahend);
            borrow = 0;
        } else {
            difference.push(limb + LIMB_BASE - subtrahend);
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0);
    difference
}

impl BigInt {
    pub fn subtract(&self, rhs: &BigInt) -> BigInt { self.add(&rhs.negate()) }

    pub fn decrement(&mut self) { *self = self.subtract(&BigInt::one()); }
}

#[cfg(test)]
mod test {
    use super::sub_magnitudes;
    use crate::bigint::BigInt;
    use num_bigint::RandomBits;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_sub_magnitudes() {
        assert_eq!(sub_magnitudes(&[0, 0, 1], &[1]), vec![999_999_999, 999_999_999, 0]);
        assert_eq!(sub_magnitudes(&[7], &[7]), vec![0]);
    }

    #[test]
    fn test_subtract_signs() {
        let a = BigInt::from(1024);
        let b = BigInt::from(-1024);
        assert_eq!(a.subtract(&a), BigInt::zero());
        assert_eq!(a.subtract(&b), BigInt::from(2048));
        assert_eq!(b.subtract(&a), BigInt::from(-2048));
        assert_eq!(b.subtract(&b), BigInt::zero());
        assert!(b.subtract(&b).is_positive());

        // (-a) - (-b) with |a| < |b| flips the sign
        assert_eq!(BigInt::from(-3).subtract(&BigInt::from(-10)), BigInt::from(7));
        assert_eq!(BigInt::from(-10).subtract(&BigInt::from(-3)), BigInt::from(-7));
        assert_eq!(BigInt::from(3).subtract(&BigInt::from(10)), BigInt::from(-7));

        let zero = BigInt::zero();
        assert_eq!(BigInt::from(-5).subtract(&zero), BigInt::from(-5));
        assert_eq!(zero.subtract(&BigInt::from(-5)), BigInt::from(5));
        assert_eq!(zero.subtract(&BigInt::from(5)), BigInt::from(-5));
        assert!(zero.subtract(&zero).is_positive());
    }

    #[test]
    fn test_subtract() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let a: num_bigint::BigInt = prng.sample(RandomBits::new(400));
            let b: num_bigint::BigInt = prng.sample(RandomBits::new(254));
            let c = &a - &b;

            let (x, y) = (BigInt::from(&a), BigInt::from(&b));
            assert_eq!(x.subtract(&y), BigInt::from(&c));
            assert_eq!(x.add(&y).subtract(&y), x);
            assert_eq!(x.subtract(&x), BigInt::zero());
        }
    }

    #[test]
    fn test_subtract_edge_values() {
        let edges = [0i64, 1, -1, 999_999_999, -999_999_999, 1_000_000_000, -1_000_000_000];
        for &a in edges.iter() {
            for &b in edges.iter() {
                let expected = num_bigint::BigInt::from(a) - num_bigint::BigInt::from(b);
                assert_eq!(BigInt::from(a).subtract(&BigInt::from(b)), BigInt::from(&expected));
            }
        }
    }

    #[test]
    fn test_decrement() {
        let mut a = BigInt::from(512);
        a.decrement();
        assert_eq!(a, BigInt::from(511));

        let mut b = BigInt::zero();
        b.decrement();
        assert_eq!(b, BigInt::from(-1));

        let mut c = BigInt::from(1_000_000_000u64);
        c.decrement();
        assert_eq!(c, BigInt::from(999_999_999));
    }
}
