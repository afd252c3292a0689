//! Hex-string serde for the fixed-hash types, `0x`-prefixed lower case on
//! output, either case accepted on input.

use alloc::string::String;
use core::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{B160, B256};

macro_rules! impl_fixed_hash_serde {
    ($name:ident, $len:expr) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut out = String::with_capacity(2 + $len * 2);
                out.push_str("0x");
                out.push_str(&hex::encode(self.0));
                serializer.serialize_str(&out)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct HexVisitor;

                impl<'de> de::Visitor<'de> for HexVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "a 0x-prefixed hex string of {} bytes", $len)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        let digits = v
                            .strip_prefix("0x")
                            .or_else(|| v.strip_prefix("0X"))
                            .unwrap_or(v);
                        let bytes = hex::decode(digits).map_err(E::custom)?;
                        if bytes.len() != $len {
                            return Err(E::invalid_length(bytes.len(), &self));
                        }
                        Ok($name::from_slice(&bytes))
                    }
                }

                deserializer.deserialize_str(HexVisitor)
            }
        }
    };
}

impl_fixed_hash_serde!(B160, 20);
impl_fixed_hash_serde!(B256, 32);
