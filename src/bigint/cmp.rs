use std::cmp::Ordering;

use crate::bigint::{BigInt, Sign};

/// Compares two normalized magnitudes.
pub(crate) fn cmp_magnitudes(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

impl BigInt {
    /// Three-way comparison with signed integer semantics.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => cmp_magnitudes(&self.limbs, &other.limbs),
            (Sign::Negative, Sign::Negative) => cmp_magnitudes(&other.limbs, &self.limbs),
        }
    }

    pub(crate) fn cmp_abs(&self, other: &BigInt) -> Ordering {
        cmp_magnitudes(&self.limbs, &other.limbs)
    }

    pub fn is_one(&self) -> bool { self.is_positive() && self.limbs == [1] }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering { self.compare(other) }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
