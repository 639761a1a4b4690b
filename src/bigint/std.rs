use std::fmt;
use std::str::FromStr;

use num_traits::{Float, NumCast, ToPrimitive};

use crate::bigint::div::div_rem_small;
use crate::bigint::mul::mul_add_small;
use crate::bigint::{BigInt, Sign, DIGIT_CHARS, LIMB_BASE, LIMB_DIGITS, MAX_RADIX, MIN_RADIX};
use crate::error::Error;

pub(crate) fn check_radix(radix: u32) -> Result<(), Error> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Error::InvalidRadix(radix))
    }
}

impl BigInt {
    /// Parses `text` as a signed numeral in `radix` (2 to 16).
    ///
    /// A single leading `-` marks a negative value. Digits above 9 are
    /// accepted in either case. Leading zeros are ignored and `-0` is zero.
    pub fn parse(text: &str, radix: u32) -> Result<BigInt, Error> {
        check_radix(radix)?;

        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, text),
        };
        if digits.is_empty() {
            return Err(Error::InvalidFormat(text.to_string()));
        }
        let values = digits
            .chars()
            .map(|c| c.to_digit(radix))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| Error::InvalidFormat(text.to_string()))?;

        if radix == 10 {
            let limbs = values
                .rchunks(LIMB_DIGITS)
                .map(|chunk| chunk.iter().fold(0u32, |acc, d| acc * 10 + d))
                .collect();
            return Ok(BigInt::from_limbs(sign, limbs));
        }

        // Horner evaluation straight into base 10^9 limbs.
        let mut limbs = Vec::with_capacity(values.len() / LIMB_DIGITS + 1);
        for value in values {
            mul_add_small(&mut limbs, radix, value);
        }
        Ok(BigInt::from_limbs(sign, limbs))
    }

    /// Formats the value in `radix` (2 to 16) with upper-case digits.
    pub fn to_string_radix(&self, radix: u32) -> Result<String, Error> {
        check_radix(radix)?;

        let mut text = String::new();
        if self.is_negative() {
            text.push('-');
        }
        if radix == 10 {
            text.push_str(&self.magnitude_decimal());
            return Ok(text);
        }
        if self.limbs.is_empty() {
            text.push('0');
            return Ok(text);
        }

        let _scope = tracing::trace_span!(
            "radix conversion",
            radix = radix,
            limbs = self.limbs.len(),
        )
        .entered();

        let mut digits = Vec::new();
        let mut rest = self.limbs.clone();
        while !rest.is_empty() {
            let (quotient, remainder) = div_rem_small(&rest, radix);
            digits.push(DIGIT_CHARS[remainder as usize]);
            rest = quotient;
        }
        text.extend(digits.iter().rev().map(|&d| d as char));
        Ok(text)
    }

    fn magnitude_decimal(&self) -> String {
        let mut limbs = self.limbs.iter().rev();
        let mut text = match limbs.next() {
            Some(top) => top.to_string(),
            None => return "0".to_string(),
        };
        for limb in limbs {
            text.push_str(&format!("{:09}", limb));
        }
        text
    }

    /// Converts into any primitive number type, `None` when it does not fit.
    pub fn to_integer<T: NumCast>(&self) -> Option<T> { <T as NumCast>::from(self.clone()) }

    /// Converts into a float, `None` when the value is not finite in `T`.
    pub fn to_floating<T: Float + FromStr>(&self) -> Option<T> {
        self.to_string()
            .parse::<T>()
            .ok()
            .filter(|value| value.is_finite())
    }

    fn magnitude_u128(&self) -> Option<u128> {
        self.limbs.iter().rev().try_fold(0u128, |acc, &limb| {
            acc.checked_mul(LIMB_BASE as u128)?.checked_add(limb as u128)
        })
    }

    fn from_u128(sign: Sign, mut value: u128) -> BigInt {
        let mut limbs = Vec::new();
        while value > 0 {
            limbs.push((value % LIMB_BASE as u128) as u32);
            value /= LIMB_BASE as u128;
        }
        BigInt::from_limbs(sign, limbs)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self { BigInt::from_u128(Sign::Positive, value as u128) }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                    BigInt::from_u128(sign, (value as i128).unsigned_abs())
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<&BigInt> for bool {
    fn from(value: &BigInt) -> Self { !value.limbs.is_empty() }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> { self.to_i128().and_then(|v| v.to_i64()) }

    fn to_u64(&self) -> Option<u64> { self.to_u128().and_then(|v| v.to_u64()) }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        match self.sign {
            Sign::Positive => i128::try_from(magnitude).ok(),
            Sign::Negative if magnitude == i128::MIN.unsigned_abs() => Some(i128::MIN),
            Sign::Negative => i128::try_from(magnitude).ok().map(|v| -v),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Sign::Positive => self.magnitude_u128(),
            Sign::Negative => None,
        }
    }

    fn to_f64(&self) -> Option<f64> { self.to_floating() }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { BigInt::parse(s, 10) }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.is_positive(), "", &self.magnitude_decimal())
    }
}

impl From<&num_bigint::BigInt> for BigInt {
    fn from(value: &num_bigint::BigInt) -> Self {
        let (sign, digits) = value.to_u32_digits();
        let mut limbs = Vec::new();
        for digit in digits.iter().rev() {
            mul_add_small(&mut limbs, 1 << 16, digit >> 16);
            mul_add_small(&mut limbs, 1 << 16, digit & 0xffff);
        }
        let sign = match sign {
            num_bigint::Sign::Minus => Sign::Negative,
            _ => Sign::Positive,
        };
        BigInt::from_limbs(sign, limbs)
    }
}

impl From<&BigInt> for num_bigint::BigInt {
    fn from(value: &BigInt) -> Self {
        let magnitude = value
            .limbs
            .iter()
            .rev()
            .fold(num_bigint::BigUint::default(), |acc, &limb| {
                acc * LIMB_BASE + limb
            });
        let sign = match value.sign {
            Sign::Positive => num_bigint::Sign::Plus,
            Sign::Negative => num_bigint::Sign::Minus,
        };
        num_bigint::BigInt::from_biguint(sign, magnitude)
    }
}
