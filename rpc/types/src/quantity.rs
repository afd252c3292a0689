//! Hex-string wrappers for the JSON-RPC wire forms of integers and byte
//! strings.

use std::fmt;
use std::str::FromStr;

use derive_more::{Deref, From, Into};
use ethkit_primitives::{ParseUintError, U256};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// A JSON-RPC quantity: a `0x`-prefixed, minimum-width, lower-case
/// big-endian hex integer. Zero is `"0x0"`.
///
/// Decoding accepts either case and redundant leading zeros; encoding always
/// emits the canonical form.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Into,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Quantity(pub U256);

impl Quantity {
    /// The wrapped word.
    pub fn into_inner(self) -> U256 {
        self.0
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(HexParseError::MissingPrefix)?;
        U256::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|e| match e {
                ParseUintError::Empty => HexParseError::Empty,
                ParseUintError::InvalidDigit => HexParseError::InvalidDigit,
                ParseUintError::Overflow => HexParseError::Overflow,
            })
    }
}

/// A JSON-RPC data value: a `0x`-prefixed, even-length hex byte string.
/// Empty data is `"0x"`.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Deref, From, Into, SerializeDisplay, DeserializeFromStr,
)]
pub struct Data(pub Vec<u8>);

impl Data {
    /// The wrapped bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<&[u8]> for Data {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl FromStr for Data {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(HexParseError::MissingPrefix)?;
        if digits.len() % 2 != 0 {
            return Err(HexParseError::OddLength);
        }
        hex::decode(digits)
            .map(Self)
            .map_err(|_| HexParseError::InvalidDigit)
    }
}

/// Failure to parse a hex quantity or data string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexParseError {
    /// The string does not start with `0x`.
    #[error("missing 0x prefix")]
    MissingPrefix,
    /// No digits after the prefix where at least one is required.
    #[error("no digits after 0x prefix")]
    Empty,
    /// A data string with an odd number of digits.
    #[error("odd number of hex digits")]
    OddLength,
    /// A character that is not a hex digit.
    #[error("invalid hex digit")]
    InvalidDigit,
    /// A quantity wider than 256 bits.
    #[error("quantity exceeds 256 bits")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_canonical_form() {
        assert_eq!(Quantity::from(0u64).to_string(), "0x0");
        assert_eq!(Quantity::from(0x41u64).to_string(), "0x41");
        assert_eq!(Quantity::from(0x400u64).to_string(), "0x400");
        // no leading zeros, lower case
        assert_eq!(Quantity::from(0xDEADu64).to_string(), "0xdead");
    }

    #[test]
    fn quantity_parse() {
        assert_eq!("0x0".parse::<Quantity>().unwrap(), Quantity::from(0u64));
        assert_eq!("0x41".parse::<Quantity>().unwrap(), Quantity::from(0x41u64));
        // either case and leading zeros accepted
        assert_eq!("0X41".parse::<Quantity>().unwrap(), Quantity::from(0x41u64));
        assert_eq!("0x0041".parse::<Quantity>().unwrap(), Quantity::from(0x41u64));
        assert_eq!("0xDeAdBeEf".parse::<Quantity>().unwrap(), Quantity::from(0xdeadbeefu64));

        assert_eq!("41".parse::<Quantity>(), Err(HexParseError::MissingPrefix));
        assert_eq!("0x".parse::<Quantity>(), Err(HexParseError::Empty));
        assert_eq!("0xzz".parse::<Quantity>(), Err(HexParseError::InvalidDigit));
        // 65 digits
        let too_wide = format!("0x1{}", "0".repeat(64));
        assert_eq!(too_wide.parse::<Quantity>(), Err(HexParseError::Overflow));
    }

    #[test]
    fn quantity_serde() {
        let q: Quantity = serde_json::from_str(r#""0x25e1a2b4b4""#).unwrap();
        assert_eq!(q, Quantity::from(0x25e1a2b4b4u64));
        assert_eq!(serde_json::to_string(&q).unwrap(), r#""0x25e1a2b4b4""#);
    }

    #[test]
    fn data_round_trip() {
        assert_eq!(Data::default().to_string(), "0x");
        assert_eq!("0x".parse::<Data>().unwrap(), Data::default());

        let data = Data(vec![0xaa, 0xbb, 0xcc]);
        assert_eq!(data.to_string(), "0xaabbcc");
        assert_eq!("0xAABBCC".parse::<Data>().unwrap(), data);

        assert_eq!("0xabc".parse::<Data>(), Err(HexParseError::OddLength));
        assert_eq!("abcd".parse::<Data>(), Err(HexParseError::MissingPrefix));
    }

    #[test]
    fn data_serde() {
        let data: Data = serde_json::from_str(r#""0x60806040""#).unwrap();
        assert_eq!(data, Data(vec![0x60, 0x80, 0x60, 0x40]));
        assert_eq!(serde_json::to_string(&data).unwrap(), r#""0x60806040""#);
    }
}
