use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::bigint::BigInt;

// Operators forward to the inherent methods; compound assignment rebinds.
// Division, remainder and shifts can fail, so they stay inherent-only
// (`divide`, `modulus`, `div_rem`, `shift_left`, `shift_right`).
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $inherent:ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt { BigInt::$inherent(self, rhs) }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt { BigInt::$inherent(self, &rhs) }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt { BigInt::$inherent(&self, rhs) }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt { BigInt::$inherent(&self, &rhs) }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) { *self = BigInt::$inherent(self, rhs); }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) { *self = BigInt::$inherent(self, &rhs); }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add);
forward_binop!(Sub, sub, SubAssign, sub_assign, subtract);
forward_binop!(Mul, mul, MulAssign, mul_assign, multiply);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt { self.negate() }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt { self.negate() }
}

impl Zero for BigInt {
    fn zero() -> Self { BigInt::zero() }

    fn is_zero(&self) -> bool { self.limbs.is_empty() }
}

impl One for BigInt {
    fn one() -> Self { BigInt::one() }
}
