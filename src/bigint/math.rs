use crate::bigint::div::{div_rem_magnitudes, div_rem_small};
use crate::bigint::{decimal_width, BigInt, Sign};
use crate::error::Error;

impl BigInt {
    /// Flips the sign; zero stays positive.
    pub fn negate(&self) -> BigInt { BigInt::from_limbs(self.sign.flip(), self.limbs.clone()) }

    pub fn abs(&self) -> BigInt { BigInt::from_limbs(Sign::Positive, self.limbs.clone()) }

    /// Raises the value to `exponent` by repeated squaring.
    ///
    /// Negative exponents follow integer truncation: only a base of `±1`
    /// yields a non-zero result, and that result is the base itself.
    pub fn pow(&self, exponent: &BigInt) -> BigInt {
        if exponent.limbs.is_empty() {
            return BigInt::one();
        }
        if self.limbs.is_empty() {
            return BigInt::zero();
        }
        if exponent.is_negative() {
            return if self.limbs == [1] { self.clone() } else { BigInt::zero() };
        }

        let _scope = tracing::trace_span!(
            "pow",
            base_digits = self.digit_count(),
            exponent_digits = exponent.digit_count(),
        )
        .entered();

        let mut remaining = exponent.limbs.clone();
        let mut base = self.clone();
        let mut result = BigInt::one();
        while !remaining.is_empty() {
            if remaining[0] & 1 == 1 {
                result = result.multiply(&base);
            }
            remaining = div_rem_small(&remaining, 2).0;
            if !remaining.is_empty() {
                base = base.multiply(&base);
            }
        }
        result
    }

    /// `10` raised to this value.
    pub fn pow10(&self) -> BigInt { BigInt::from(10).pow(self) }

    /// Integer square root, rounded down.
    pub fn sqrt(&self) -> Result<BigInt, Error> {
        if self.is_negative() {
            return Err(Error::NegativeSqrt);
        }
        if self.limbs.is_empty() {
            return Ok(BigInt::zero());
        }
        for (bound, root) in [(4u32, 1u32), (9, 2), (16, 3)] {
            if *self < BigInt::from(bound) {
                return Ok(BigInt::from(root));
            }
        }

        let _scope = tracing::trace_span!("sqrt", digits = self.digit_count()).entered();

        let one = BigInt::one();
        let two = BigInt::from(2);
        let mut previous = BigInt::from(-1);
        let mut current = BigInt::from(self.digit_count() / 2 - 1).pow10();
        let mut iterations = 0usize;
        while current.subtract(&previous).abs() > one {
            previous = current;
            current = self.divide(&previous)?.add(&previous).divide(&two)?;
            iterations += 1;
        }
        tracing::trace!(iterations, "newton iteration settled");

        // The iteration stops within one of the root; settle on the floor.
        while current.multiply(&current) > *self {
            current.decrement();
        }
        loop {
            let next = current.add(&one);
            if next.multiply(&next) > *self {
                break;
            }
            current = next;
        }
        Ok(current)
    }

    /// Greatest common divisor of the absolute values.
    ///
    /// A zero operand yields the absolute value of the other one.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.limbs.is_empty() {
            let (_, remainder) = div_rem_magnitudes(&a.limbs, &b.limbs);
            a = b;
            b = BigInt::from_limbs(Sign::Positive, remainder);
        }
        a
    }

    /// Least common multiple, zero when either operand is zero.
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        if self.limbs.is_empty() || other.limbs.is_empty() {
            return BigInt::zero();
        }
        let product = self.multiply(other);
        let (quotient, _) = div_rem_magnitudes(&product.limbs, &self.gcd(other).limbs);
        BigInt::from_limbs(Sign::Positive, quotient)
    }

    /// `true` if the decimal magnitude is a one followed only by zeros.
    pub fn is_pow10(&self) -> bool {
        match self.limbs.split_last() {
            None => false,
            Some((top, rest)) => {
                rest.iter().all(|&limb| limb == 0)
                    && 10u32.pow(decimal_width(*top) as u32 - 1) == *top
            }
        }
    }
}
