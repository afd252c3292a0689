#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::module_inception)]
#![warn(missing_docs)]

//! Solidity contract ABI encoding and decoding.
//!
//! The codec is split into a wire-shape layer ([`Token`], [`encode`],
//! [`decode`]) driven by a runtime schema ([`ParamType`]), and a typed layer
//! ([`SolType`], [`Tokenize`]) mapping tokens to Rust values.

#[cfg_attr(not(feature = "std"), macro_use)]
extern crate alloc;

#[cfg(not(feature = "std"))]
mod no_std_prelude {
    pub use alloc::{
        borrow::ToOwned,
        boxed::Box,
        string::{self, String, ToString},
        vec::Vec,
    };
}

use ethkit_primitives::{B160, B256};
#[cfg(not(feature = "std"))]
use no_std_prelude::*;

mod decoder;
pub use decoder::{decode, decode_validate};

mod encoder;
pub use encoder::encode;

mod token;
pub use token::Token;

mod errors;
pub use errors::{Error, Result};

mod param_type;
pub use param_type::ParamType;

// re-export the module
pub use param_type::sol_type::{self, SolType};

mod tokenize;
pub use tokenize::Tokenize;

pub mod util;

/// EVM Word
pub type Word = B256;
/// EVM Address
pub type Address = B160;
/// Dynamic Byte array
pub type Bytes = Vec<u8>;
