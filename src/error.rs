use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input contains a character that is not a digit of the declared radix.
    InvalidFormat(String),
    /// The radix is outside of `2..=16`.
    InvalidRadix(u32),
    DivideByZero,
    ModuloByZero,
    NegativeSqrt,
    InvalidArgument(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:?}", self) }
}

impl std::error::Error for Error {}
