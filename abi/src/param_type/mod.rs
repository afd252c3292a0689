//! Runtime description of Solidity types.

use core::fmt;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;

pub mod sol_type;

/// A Solidity type, used as the decoding schema and for canonical names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// `address`
    Address,
    /// `bytes`
    Bytes,
    /// `intN`
    Int(usize),
    /// `uintN`
    Uint(usize),
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `bytesN`
    FixedBytes(usize),
    /// `T[]`
    Array(Box<ParamType>),
    /// `T[N]`
    FixedArray(Box<ParamType>, usize),
    /// `(T1,...,Tn)`
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Whether values of this type encode through an offset word into the
    /// tail region.
    ///
    /// Byte strings and dynamic arrays always do; tuples and fixed arrays do
    /// iff any element does.
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(inner) => inner.iter().any(ParamType::is_dynamic),
            _ => false,
        }
    }

    /// Bytes this type occupies in the head of an enclosing tuple: 32 for a
    /// dynamic type (the offset word), the full static width otherwise.
    pub fn head_size(&self) -> usize {
        if self.is_dynamic() {
            return 32;
        }
        match self {
            ParamType::FixedArray(inner, size) => inner.head_size() * size,
            ParamType::Tuple(inner) => inner.iter().map(ParamType::head_size).sum(),
            _ => 32,
        }
    }
}

impl fmt::Display for ParamType {
    /// The canonical Solidity name, as hashed into function selectors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => f.write_str("address"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::Int(size) => write!(f, "int{size}"),
            ParamType::Uint(size) => write!(f, "uint{size}"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::String => f.write_str("string"),
            ParamType::FixedBytes(size) => write!(f, "bytes{size}"),
            ParamType::Array(inner) => write!(f, "{inner}[]"),
            ParamType::FixedArray(inner, size) => write!(f, "{inner}[{size}]"),
            ParamType::Tuple(inner) => {
                f.write_str("(")?;
                for (i, ty) in inner.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str(")")
            }
        }
    }
}
