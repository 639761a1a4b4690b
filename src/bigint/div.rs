use std::cmp::Ordering;

use crate::bigint::cmp::cmp_magnitudes;
use crate::bigint::mul::mul_small;
use crate::bigint::sub::sub_magnitudes;
use crate::bigint::{trim, BigInt, LIMB_BASE};
use crate::error::Error;

const BASE: u64 = LIMB_BASE as u64;

/// Short division by a single word, returning the quotient and remainder.
pub(crate) fn div_rem_small(a: &[u32], divisor: u32) -> (Vec<u32>, u32) {
    debug_assert!(divisor != 0);

    let divisor = divisor as u64;
    let mut quotient = vec![0u32; a.len()];
    let mut remainder = 0u64;
    for i in (0..a.len()).rev() {
        let current = remainder * BASE + a[i] as u64;
        quotient[i] = (current / divisor) as u32;
        remainder = current % divisor;
    }
    trim(&mut quotient);
    (quotient, remainder as u32)
}

/// Long division of magnitudes, bringing down one limb at a time.
///
/// For every limb of `a` (most significant first) the running dividend is
/// extended by that limb and the largest quotient limb `q` with
/// `b * q <= dividend` is found by binary search.
pub(crate) fn div_rem_magnitudes(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!b.is_empty());

    if cmp_magnitudes(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let (quotient, remainder) = div_rem_small(a, b[0]);
        let mut remainder = vec![remainder];
        trim(&mut remainder);
        return (quotient, remainder);
    }

    let _scope = tracing::trace_span!(
        "long division",
        dividend_limbs = a.len(),
        divisor_limbs = b.len(),
    )
    .entered();

    let mut quotient = Vec::with_capacity(a.len());
    let mut current: Vec<u32> = Vec::with_capacity(b.len() + 1);
    for &limb in a.iter().rev() {
        current.insert(0, limb);
        trim(&mut current);

        if cmp_magnitudes(&current, b) == Ordering::Less {
            quotient.push(0);
            continue;
        }

        let (mut lo, mut hi) = (1u32, LIMB_BASE - 1);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if cmp_magnitudes(&mul_small(b, mid), &current) == Ordering::Greater {
                hi = mid - 1;
            } else {
                lo = mid;
            }
        }
        quotient.push(lo);
        current = sub_magnitudes(&current, &mul_small(b, lo));
        trim(&mut current);
    }
    quotient.reverse();
    trim(&mut quotient);
    (quotient, current)
}

impl BigInt {
    /// Truncating division: the quotient is rounded toward zero.
    pub fn divide(&self, rhs: &BigInt) -> Result<BigInt, Error> {
        if rhs.limbs.is_empty() {
            return Err(Error::DivideByZero);
        }
        let sign = self.sign.combine(rhs.sign);
        if rhs.limbs == [1] {
            return Ok(BigInt::from_limbs(sign, self.limbs.clone()));
        }
        if self.cmp_abs(rhs) == Ordering::Equal {
            return Ok(BigInt::from_limbs(sign, vec![1]));
        }
        let (quotient, _) = div_rem_magnitudes(&self.limbs, &rhs.limbs);
        Ok(BigInt::from_limbs(sign, quotient))
    }

    /// Remainder of the truncating division, `self - rhs * (self / rhs)`.
    ///
    /// The result is zero or carries the sign of `self`.
    pub fn modulus(&self, rhs: &BigInt) -> Result<BigInt, Error> {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => Ok(remainder),
            Err(Error::DivideByZero) => Err(Error::ModuloByZero),
            Err(e) => Err(e),
        }
    }

    /// Quotient and remainder of the truncating division in one pass.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if rhs.limbs.is_empty() {
            return Err(Error::DivideByZero);
        }
        let (quotient, remainder) = div_rem_magnitudes(&self.limbs, &rhs.limbs);
        Ok((
            BigInt::from_limbs(self.sign.combine(rhs.sign), quotient),
            BigInt::from_limbs(self.sign, remainder),
        ))
    }
}
