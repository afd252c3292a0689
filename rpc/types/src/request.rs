//! The call object sent to `eth_call`, `eth_estimateGas` and relatives.

use ethkit_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{AccessList, Data, Quantity};

/// A partial transaction: every field optional, absent fields left to the
/// node's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRequest {
    /// Sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Recipient; `None` deploys a contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Gas limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<Quantity>,
    /// Legacy gas price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Quantity>,
    /// EIP-1559 total fee cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<Quantity>,
    /// EIP-1559 tip cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<Quantity>,
    /// Transferred wei.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Quantity>,
    /// Call payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    /// Sender nonce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Quantity>,
    /// Chain id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<Quantity>,
    /// Warmed accounts and slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
    /// Wire type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<Quantity>,
}

impl TransactionRequest {
    /// An empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipient.
    #[must_use]
    pub fn to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the sender.
    #[must_use]
    pub fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the transferred value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Quantity>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the call payload.
    #[must_use]
    pub fn data(mut self, data: impl Into<Data>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set the gas limit.
    #[must_use]
    pub fn gas(mut self, gas: impl Into<Quantity>) -> Self {
        self.gas = Some(gas.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let request = TransactionRequest::new()
            .to(Address::repeat_byte(0x11))
            .data(Data(vec![0xaa, 0xbb]));
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"to":"0x1111111111111111111111111111111111111111","data":"0xaabb"}"#
        );
        assert_eq!(serde_json::from_str::<TransactionRequest>(&json).unwrap(), request);
    }

    #[test]
    fn builder_sets_fields() {
        let request = TransactionRequest::new()
            .from(Address::repeat_byte(0x22))
            .value(Quantity::from(7u64))
            .gas(Quantity::from(21000u64));
        assert_eq!(request.from, Some(Address::repeat_byte(0x22)));
        assert_eq!(request.value, Some(Quantity::from(7u64)));
        assert_eq!(request.gas, Some(Quantity::from(21000u64)));
        assert!(request.to.is_none());
    }
}
