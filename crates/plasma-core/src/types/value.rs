use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{CheckedSub, Num, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Arbitrary-precision, non-negative token amount.
///
/// For non-fungible colors the same field carries the token id, so selection
/// code compares values for exact equality rather than summing them.
///
/// JSON renders values as decimal strings. Bare numbers are accepted up to
/// u64; larger values must arrive as strings.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Value(BigUint);

/// Token ids share the amount representation
pub type TokenId = Value;

impl Value {
    pub fn zero() -> Self {
        Value(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// `self - other`, or `None` if the result would be negative
    pub fn checked_sub(&self, other: &Value) -> Option<Value> {
        self.0.checked_sub(&other.0).map(Value)
    }

    /// Big-endian magnitude bytes
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// Parse a decimal string or a `0x`-prefixed hex string
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => BigUint::from_str_radix(hex, 16),
            None => BigUint::from_str_radix(s, 10),
        };
        parsed
            .map(Value)
            .map_err(|e| CoreError::InvalidValue(format!("{}: {}", s, e)))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value(BigUint::from(v))
    }
}

impl From<BigUint> for Value {
    fn from(v: BigUint) -> Self {
        Value(v)
    }
}

impl FromStr for Value {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::parse(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.0)
    }
}

impl<'a> Add<&'a Value> for &Value {
    type Output = Value;

    fn add(self, rhs: &'a Value) -> Value {
        Value(&self.0 + &rhs.0)
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl<'a> AddAssign<&'a Value> for Value {
    fn add_assign(&mut self, rhs: &'a Value) {
        self.0 += &rhs.0;
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::zero(), |mut acc, v| {
            acc += v;
            acc
        })
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.0.to_str_radix(10))
        } else {
            serializer.serialize_bytes(&self.0.to_bytes_be())
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(ValueVisitor)
        } else {
            deserializer.deserialize_byte_buf(ValueVisitor)
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer, decimal string or 0x-prefixed hex string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        u64::try_from(v)
            .map(Value::from)
            .map_err(|_| E::custom(format!("negative value {}", v)))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Value, E> {
        Ok(Value(BigUint::from(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Value, E> {
        u128::try_from(v)
            .map(|v| Value(BigUint::from(v)))
            .map_err(|_| E::custom(format!("negative value {}", v)))
    }

    // JSON parsers hand integers above u64 over as floats, which have
    // already lost precision.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Err(E::custom(format!(
            "number {} is not an exact integer; send values above u64 as decimal strings",
            v
        )))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Value::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Value, E> {
        Ok(Value(BigUint::from_bytes_be(v)))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Value, E> {
        self.visit_bytes(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_and_hex() {
        assert_eq!(Value::parse("255").unwrap(), Value::from(255));
        assert_eq!(Value::parse("0xff").unwrap(), Value::from(255));
        assert!(Value::parse("-1").is_err());
        assert!(Value::parse("ten").is_err());
    }

    #[test]
    fn test_exceeds_u64() {
        let big = Value::parse("340282366920938463463374607431768211456").unwrap();
        let sum = &big + &Value::from(1);
        assert!(sum > big);
        assert_eq!(sum.to_string(), "340282366920938463463374607431768211457");
    }

    #[test]
    fn test_checked_sub() {
        let a = Value::from(15);
        let b = Value::from(12);
        assert_eq!(a.checked_sub(&b), Some(Value::from(3)));
        assert_eq!(b.checked_sub(&a), None);
    }

    #[test]
    fn test_sum_refs() {
        let values = vec![Value::from(10), Value::from(5), Value::from(7)];
        let total: Value = values.iter().sum();
        assert_eq!(total, Value::from(22));
    }

    #[test]
    fn test_json_accepts_number_or_string() {
        let from_num: Value = serde_json::from_str("12").unwrap();
        let from_str: Value = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(from_num, from_str);
        assert_eq!(serde_json::to_string(&from_num).unwrap(), "\"12\"");
        assert!(serde_json::from_str::<Value>("-3").is_err());
    }

    #[test]
    fn test_json_large_number_needs_string() {
        let err = serde_json::from_str::<Value>("18446744073709551616").unwrap_err();
        assert!(err.to_string().contains("decimal strings"));
        assert!(serde_json::from_str::<Value>("1.5").is_err());

        let from_str: Value = serde_json::from_str("\"18446744073709551616\"").unwrap();
        assert_eq!(from_str, &Value::from(u64::MAX) + &Value::from(1));
    }

    #[test]
    fn test_bincode_keeps_magnitude() {
        let v = Value::parse("123456789012345678901234567890").unwrap();
        let bytes = crate::serialize::to_bytes(&v).unwrap();
        let back: Value = crate::serialize::from_bytes(&bytes).unwrap();
        assert_eq!(back, v);
    }
}
