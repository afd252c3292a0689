//! Typed `eth_*` method shims.
//!
//! Each method marshals its typed parameters into the positional JSON-RPC
//! array and unwraps the quantity/data result transparently, so callers see
//! plain integers and byte vectors.

use ethkit_primitives::{Address, B256, U256};
use ethkit_rpc_types::{
    json::Element, BlockNumber, Data, Quantity, Transaction, TransactionReceipt,
    TransactionRequest,
};
use ethkit_transports::Connection;

use crate::{Provider, ProviderError};

impl<T> Provider<T>
where
    T: Connection,
{
    /// `eth_getTransactionCount`: the account nonce at `block`.
    pub async fn get_transaction_count(
        &self,
        address: Address,
        block: BlockNumber,
    ) -> Result<U256, ProviderError> {
        let count: Quantity = self
            .request("eth_getTransactionCount", (address, block))
            .await?;
        Ok(count.into_inner())
    }

    /// `eth_getBalance`: the account balance in wei at `block`.
    pub async fn get_balance(
        &self,
        address: Address,
        block: BlockNumber,
    ) -> Result<U256, ProviderError> {
        let balance: Quantity = self.request("eth_getBalance", (address, block)).await?;
        Ok(balance.into_inner())
    }

    /// `eth_getCode`: the contract code at `address`.
    pub async fn get_code(
        &self,
        address: Address,
        block: BlockNumber,
    ) -> Result<Vec<u8>, ProviderError> {
        let code: Data = self.request("eth_getCode", (address, block)).await?;
        Ok(code.into_inner())
    }

    /// `eth_call`: execute without mining, returning the call's output.
    pub async fn call(
        &self,
        request: TransactionRequest,
        block: BlockNumber,
    ) -> Result<Vec<u8>, ProviderError> {
        let output: Data = self.request("eth_call", (request, block)).await?;
        Ok(output.into_inner())
    }

    /// `eth_estimateGas`: the node's gas estimate for `request`.
    pub async fn estimate_gas(
        &self,
        request: TransactionRequest,
        block: BlockNumber,
    ) -> Result<U256, ProviderError> {
        let gas: Quantity = self.request("eth_estimateGas", (request, block)).await?;
        Ok(gas.into_inner())
    }

    /// `eth_getTransactionByHash`.
    pub async fn get_transaction_by_hash(
        &self,
        hash: B256,
    ) -> Result<Option<Transaction>, ProviderError> {
        let raw = self.request_dyn("eth_getTransactionByHash", (hash,)).await?;
        convert_transaction(raw)
    }

    /// `eth_getTransactionByBlockHashAndIndex`.
    pub async fn get_transaction_by_block_hash_and_index(
        &self,
        block_hash: B256,
        index: u64,
    ) -> Result<Option<Transaction>, ProviderError> {
        let raw = self
            .request_dyn(
                "eth_getTransactionByBlockHashAndIndex",
                (block_hash, Quantity::from(index)),
            )
            .await?;
        convert_transaction(raw)
    }

    /// `eth_getTransactionByBlockNumberAndIndex`.
    pub async fn get_transaction_by_block_number_and_index(
        &self,
        block: BlockNumber,
        index: u64,
    ) -> Result<Option<Transaction>, ProviderError> {
        let raw = self
            .request_dyn(
                "eth_getTransactionByBlockNumberAndIndex",
                (block, Quantity::from(index)),
            )
            .await?;
        convert_transaction(raw)
    }

    /// `eth_getTransactionReceipt`.
    pub async fn get_transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, ProviderError> {
        self.request("eth_getTransactionReceipt", (hash,)).await
    }
}

/// The polymorphic conversion step: the wire `type` is probed on the
/// dynamic tree before the typed decoder is committed to, since the
/// concrete format has to be known before a typed decode can start.
pub(crate) fn convert_transaction(raw: Element) -> Result<Option<Transaction>, ProviderError> {
    if raw.is_null() {
        return Ok(None);
    }
    match raw.get("type").and_then(Element::as_str) {
        None | Some("0x0") | Some("0x1") | Some("0x2") => {}
        Some(other) => {
            tracing::debug!(tx_type = %other, "unrecognized transaction type, keeping shared fields only");
        }
    }
    serde_json::from_value(raw.into_value())
        .map(Some)
        .map_err(ProviderError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethkit_rpc_types::json::Element;

    #[test]
    fn convert_null_is_none() {
        assert_eq!(convert_transaction(Element::Null).unwrap(), None);
    }

    #[test]
    fn convert_dispatches_on_probed_type() {
        let raw: Element = serde_json::from_str(
            r#"{
                "type": "0x2",
                "hash": "0xc5b9b86bbdcb8e54b693bef011d0a0bbd95f2325d5e4e2bdffa2cad7b2bcf103",
                "nonce": "0x2f",
                "from": "0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45",
                "to": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
                "value": "0x0",
                "gas": "0x33450",
                "input": "0x",
                "maxFeePerGas": "0x25e1a2b4b4",
                "maxPriorityFeePerGas": "0x3b9aca00",
                "chainId": "0x1",
                "yParity": "0x0",
                "r": "0x1",
                "s": "0x2"
            }"#,
        )
        .unwrap();
        let tx = convert_transaction(raw).unwrap().unwrap();
        let fee = tx.fee_market().expect("a 1559 transaction");
        assert_eq!(
            fee.base_fee(),
            Quantity::from(0x25e1a2b4b4u64 - 0x3b9aca00u64)
        );
    }

    #[test]
    fn convert_unknown_type_survives() {
        let raw: Element = serde_json::from_str(
            r#"{
                "type": "0x7e",
                "hash": "0xc5b9b86bbdcb8e54b693bef011d0a0bbd95f2325d5e4e2bdffa2cad7b2bcf103",
                "nonce": "0x0",
                "from": "0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45",
                "to": null,
                "value": "0x0",
                "gas": "0x5208",
                "input": "0x"
            }"#,
        )
        .unwrap();
        let tx = convert_transaction(raw).unwrap().unwrap();
        assert_eq!(tx.tx_type(), Quantity::from(0x7eu64));
    }
}
