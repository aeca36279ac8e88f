use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::serialize::decode_hex;

/// Account address, stored lowercase so that comparisons ignore checksum casing
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(s: impl AsRef<str>) -> Self {
        Address(s.as_ref().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw address string
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    /// Decode the hex form into raw bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        decode_hex(&self.0)
    }

    /// Bytes carried as message data. Hex digits are left-padded to whole
    /// bytes; an address that is not hex is carried as its text.
    pub fn to_payload(&self) -> Vec<u8> {
        let digits = self.0.strip_prefix("0x").unwrap_or(&self.0);
        let decoded = if digits.len() % 2 == 1 {
            hex::decode(format!("0{}", digits))
        } else {
            hex::decode(digits)
        };
        decoded.unwrap_or_else(|_| self.0.as_bytes().to_vec())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Address::new(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Address::new(s)
    }
}

impl From<Address> for String {
    fn from(a: Address) -> Self {
        a.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_normalized() {
        let a = Address::new("0xAbCdEf");
        let b = Address::from("0xabcdef");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "0xabcdef");
        assert!(a.matches("0XABCDEF"));
    }

    #[test]
    fn test_address_json_lowercases() {
        let a: Address = serde_json::from_str("\"0xDEAD\"").unwrap();
        assert_eq!(a.as_str(), "0xdead");
        assert_eq!(a.to_bytes().unwrap(), vec![0xde, 0xad]);
    }

    #[test]
    fn test_payload_accepts_any_address() {
        assert_eq!(Address::new("0xB").to_payload(), vec![0x0b]);
        assert_eq!(Address::new("0xDEAD").to_payload(), vec![0xde, 0xad]);
        assert_eq!(Address::new("0x").to_payload(), Vec::<u8>::new());
        assert_eq!(Address::new("alice").to_payload(), b"alice".to_vec());
    }
}
