use crate::bigint::div::{div_rem_magnitudes, div_rem_small};
use crate::bigint::BigInt;
use crate::error::Error;

impl BigInt {
    /// Number of binary digits of the magnitude; zero has one digit.
    pub fn bit_length(&self) -> usize {
        if self.limbs.is_empty() {
            return 1;
        }
        let mut bits = 0;
        let mut rest = self.limbs.clone();
        while rest.len() > 1 {
            rest = div_rem_small(&rest, 1 << 16).0;
            bits += 16;
        }
        bits + (u32::BITS - rest[0].leading_zeros()) as usize
    }

    /// Appends `n` zero digits to the binary form, keeping the sign.
    pub fn shift_left(&self, n: &BigInt) -> Result<BigInt, Error> {
        if n.is_negative() {
            return Err(Error::InvalidArgument("negative shift amount"));
        }
        Ok(self.multiply(&BigInt::from(2).pow(n)))
    }

    /// Drops the last `n` digits of the binary form, keeping the sign.
    /// Dropping every digit leaves zero.
    pub fn shift_right(&self, n: &BigInt) -> Result<BigInt, Error> {
        if n.is_negative() {
            return Err(Error::InvalidArgument("negative shift amount"));
        }
        let (quotient, _) = div_rem_magnitudes(&self.limbs, &BigInt::from(2).pow(n).limbs);
        Ok(BigInt::from_limbs(self.sign, quotient))
    }
}
