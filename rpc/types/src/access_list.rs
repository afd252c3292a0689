//! EIP-2930 access lists.

use ethkit_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// One warmed account and its warmed storage slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    /// Account to warm.
    pub address: Address,
    /// Storage keys to warm.
    pub storage_keys: Vec<B256>,
}

/// The access list of an EIP-2930 or EIP-1559 transaction.
pub type AccessList = Vec<AccessListItem>;
