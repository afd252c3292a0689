//! Block height parameters.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::HexParseError;

/// The block height argument of state-reading calls: a tag or an explicit
/// number, rendered in the JSON-RPC string forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum BlockNumber {
    /// The most recent block.
    #[default]
    Latest,
    /// The genesis block.
    Earliest,
    /// The pending state.
    Pending,
    /// An explicit height.
    Number(u64),
}

impl From<u64> for BlockNumber {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Earliest => f.write_str("earliest"),
            Self::Pending => f.write_str("pending"),
            Self::Number(number) => write!(f, "0x{number:x}"),
        }
    }
}

impl FromStr for BlockNumber {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            "earliest" => Ok(Self::Earliest),
            "pending" => Ok(Self::Pending),
            _ => {
                let digits = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .ok_or(HexParseError::MissingPrefix)?;
                if digits.is_empty() {
                    return Err(HexParseError::Empty);
                }
                u64::from_str_radix(digits, 16)
                    .map(Self::Number)
                    .map_err(|_| HexParseError::InvalidDigit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_forms() {
        assert_eq!(serde_json::to_string(&BlockNumber::Latest).unwrap(), r#""latest""#);
        assert_eq!(serde_json::to_string(&BlockNumber::Pending).unwrap(), r#""pending""#);
        assert_eq!(
            serde_json::to_string(&BlockNumber::Number(0x10d4f)).unwrap(),
            r#""0x10d4f""#
        );

        assert_eq!(
            serde_json::from_str::<BlockNumber>(r#""earliest""#).unwrap(),
            BlockNumber::Earliest
        );
        assert_eq!(
            serde_json::from_str::<BlockNumber>(r#""0x10d4f""#).unwrap(),
            BlockNumber::Number(0x10d4f)
        );
        assert!(serde_json::from_str::<BlockNumber>(r#""10d4f""#).is_err());
    }
}
