//! Typed `eth_*` JSON-RPC methods over a generic [`Connection`]
//! (re-exported from `ethkit-transports`).

pub mod eth;

pub mod provider;
pub use provider::{HttpProvider, Provider, ProviderError};

pub use ethkit_transports::Connection;
