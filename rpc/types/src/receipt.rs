//! Transaction receipts and logs.

use ethkit_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::{Data, Quantity};

/// The receipt of a mined transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Hash of the transaction.
    pub transaction_hash: B256,
    /// Position within the block.
    pub transaction_index: Quantity,
    /// Containing block hash.
    pub block_hash: Option<B256>,
    /// Containing block height.
    pub block_number: Option<Quantity>,
    /// Sender.
    pub from: Address,
    /// Recipient; `None` for contract creation.
    pub to: Option<Address>,
    /// Gas used by the block up to and including this transaction.
    pub cumulative_gas_used: Quantity,
    /// Gas used by this transaction alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<Quantity>,
    /// Address of the created contract, if any.
    pub contract_address: Option<Address>,
    /// Logs emitted during execution.
    pub logs: Vec<Log>,
    /// Post-Byzantium success flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Quantity>,
    /// Actual per-gas price paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_gas_price: Option<Quantity>,
    /// Wire type of the receipted transaction.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<Quantity>,
}

/// One log emitted by a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Emitting contract.
    pub address: Address,
    /// Indexed topics.
    pub topics: Vec<B256>,
    /// Unindexed payload.
    pub data: Data,
    /// Containing block hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<B256>,
    /// Containing block height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<Quantity>,
    /// Hash of the emitting transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    /// Position of the emitting transaction in the block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_index: Option<Quantity>,
    /// Position within the block's logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_index: Option<Quantity>,
    /// Set when the containing block was reorged away.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_receipt() {
        let json = r#"{
            "transactionHash": "0x2b4cd3ab9b9a0d3cb3aa9f1b4a1e79e4ee15e0e64a893331b6e0e93f0a8efc94",
            "transactionIndex": "0x1",
            "blockHash": "0xf0e8c8779bb5bbbbf2d2f56ec1e626e10f0987bdcbb8ed7fc0c62d83a293b4d8",
            "blockNumber": "0xb",
            "from": "0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45",
            "to": null,
            "cumulativeGasUsed": "0x33bc",
            "gasUsed": "0x4dc",
            "contractAddress": "0xb60e8dd61c5d32be8058bb8eb970870f07233155",
            "logs": [
                {
                    "address": "0xb60e8dd61c5d32be8058bb8eb970870f07233155",
                    "topics": ["0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"],
                    "data": "0x68656c6c6f21",
                    "blockNumber": "0xb",
                    "logIndex": "0x0",
                    "removed": false
                }
            ],
            "logsBloom": "0x00",
            "status": "0x1",
            "effectiveGasPrice": "0x1850c4b800",
            "type": "0x2"
        }"#;
        let receipt: TransactionReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.status, Some(Quantity::from(1u64)));
        assert_eq!(receipt.transaction_type, Some(Quantity::from(2u64)));
        assert!(receipt.to.is_none());
        assert!(receipt.contract_address.is_some());
        assert_eq!(receipt.logs.len(), 1);
        assert_eq!(receipt.logs[0].data, Data(b"hello!".to_vec()));
        assert_eq!(receipt.logs[0].removed, Some(false));

        // unknown fields (logsBloom) are ignored, and the round trip holds
        let back: TransactionReceipt =
            serde_json::from_str(&serde_json::to_string(&receipt).unwrap()).unwrap();
        assert_eq!(receipt, back);
    }
}
