use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bigint::BigInt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal integer or a string holding one")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> { Ok(BigInt::from(v)) }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> { Ok(BigInt::from(v)) }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<BigInt, E> { Ok(BigInt::from(v)) }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> { Ok(BigInt::from(v)) }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
