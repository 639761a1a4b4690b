mod add;
mod bits;
mod cmp;
mod div;
mod math;
mod mul;
mod ops;
mod serialization;
mod std;
mod sub;

/// Each limb holds nine decimal digits.
pub const LIMB_DIGITS: usize = 9;
pub const LIMB_BASE: u32 = 1_000_000_000;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 16;
pub const DIGIT_CHARS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Sign of a product or quotient of two operands.
    pub fn combine(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Arbitrary precision signed integer.
///
/// The magnitude is kept as little-endian limbs in base `10^9` with no
/// most-significant zero limbs; zero is the empty limb vector and is always
/// [`Sign::Positive`]. Every operation returns a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    limbs: Vec<u32>,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt {
            sign: Sign::Positive,
            limbs: Vec::new(),
        }
    }

    pub fn one() -> Self { BigInt::from_limbs(Sign::Positive, vec![1]) }

    /// Builds a value from raw limbs, restoring the canonical form.
    pub(crate) fn from_limbs(sign: Sign, mut limbs: Vec<u32>) -> Self {
        trim(&mut limbs);
        let sign = if limbs.is_empty() { Sign::Positive } else { sign };
        BigInt { sign, limbs }
    }

    pub fn sign(&self) -> Sign { self.sign }

    pub fn is_positive(&self) -> bool { self.sign == Sign::Positive }

    pub fn is_negative(&self) -> bool { self.sign == Sign::Negative }

    /// Number of decimal digits of the magnitude, at least one.
    pub fn digit_count(&self) -> usize {
        match self.limbs.last() {
            None => 1,
            Some(top) => (self.limbs.len() - 1) * LIMB_DIGITS + decimal_width(*top),
        }
    }

    pub fn swap(&mut self, other: &mut BigInt) { ::std::mem::swap(self, other); }
}

/// Drops most-significant zero limbs.
pub(crate) fn trim(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

pub(crate) fn decimal_width(mut limb: u32) -> usize {
    let mut width = 1;
    while limb >= 10 {
        limb /= 10;
        width += 1;
    }
    width
}
