pub mod bigint;
pub mod error;

pub use bigint::{BigInt, Sign};
pub use error::Error;
