#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::module_inception)]

//! Fundamental Ethereum value types: const-generic big integers and
//! fixed-size byte arrays.

extern crate alloc;

mod algorithms;

mod bits;
pub use bits::{B160, B256};

mod int;
pub use int::Int;

mod uint;
pub use uint::{ParseUintError, Uint};

#[cfg(feature = "serde")]
mod serde_hex;

/// 64-bit unsigned integer.
pub type U64 = Uint<64, 1>;
/// 128-bit unsigned integer.
pub type U128 = Uint<128, 2>;
/// 160-bit unsigned integer, the numeric form of an address.
pub type U160 = Uint<160, 3>;
/// 256-bit unsigned integer, the EVM word.
pub type U256 = Uint<256, 4>;

/// 256-bit signed integer.
pub type I256 = Int<256, 4>;

/// An Ethereum address.
pub type Address = B160;
