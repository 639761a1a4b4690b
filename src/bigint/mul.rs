use crate::bigint::{trim, BigInt, LIMB_BASE};

const BASE: u64 = LIMB_BASE as u64;

/// Schoolbook long multiplication, O(n·m) limb products.
pub(crate) fn mul_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut product = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        // partial product x * b, shifted by i limbs
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let t = product[i + j] as u64 + x as u64 * y as u64 + carry;
            product[i + j] = (t % BASE) as u32;
            carry = t / BASE;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let t = product[k] as u64 + carry;
            product[k] = (t % BASE) as u32;
            carry = t / BASE;
            k += 1;
        }
    }
    trim(&mut product);
    product
}

/// `a * multiplier` for a single-word multiplier.
pub(crate) fn mul_small(a: &[u32], multiplier: u32) -> Vec<u32> {
    let mut product = a.to_vec();
    mul_add_small(&mut product, multiplier, 0);
    product
}

/// In-place `limbs = limbs * multiplier + addend`.
pub(crate) fn mul_add_small(limbs: &mut Vec<u32>, multiplier: u32, addend: u32) {
    let mut carry = addend as u64;
    for limb in limbs.iter_mut() {
        let t = *limb as u64 * multiplier as u64 + carry;
        *limb = (t % BASE) as u32;
        carry = t / BASE;
    }
    while carry > 0 {
        limbs.push((carry % BASE) as u32);
        carry /= BASE;
    }
    trim(limbs);
}

impl BigInt {
    pub fn multiply(&self, rhs: &BigInt) -> BigInt {
        BigInt::from_limbs(
            self.sign.combine(rhs.sign),
            mul_magnitudes(&self.limbs, &rhs.limbs),
        )
    }
}
