//! End-to-end method tests over an in-memory connection.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};

use ethkit_primitives::{Address, B256, U256};
use ethkit_provider::{Provider, ProviderError};
use ethkit_rpc_types::{json::Element, BlockNumber, Quantity};
use ethkit_transports::{
    common::{RawRpcResult, Request},
    utils::resp_to_raw_result,
    Connection, TransportError,
};

/// A connection that answers from canned per-method results and records
/// what was sent.
#[derive(Debug, Default)]
struct MockConnection {
    id: AtomicU64,
    results: HashMap<&'static str, serde_json::Value>,
    errors: HashMap<&'static str, serde_json::Value>,
    sent: Mutex<Vec<(String, String)>>,
}

impl MockConnection {
    fn with_result(mut self, method: &'static str, result: serde_json::Value) -> Self {
        self.results.insert(method, result);
        self
    }

    fn with_error(mut self, method: &'static str, error: serde_json::Value) -> Self {
        self.errors.insert(method, error);
        self
    }

    fn sent_params(&self, method: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, params)| params.clone())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Connection for MockConnection {
    fn is_local(&self) -> bool {
        true
    }

    fn increment_id(&self) -> u64 {
        self.id.fetch_add(1, Ordering::Relaxed)
    }

    async fn json_rpc_request(&self, req: &Request<'_>) -> Result<RawRpcResult, TransportError> {
        self.sent.lock().unwrap().push((
            req.method.to_string(),
            req.params.as_ref().map(|p| p.get().to_string()).unwrap_or_default(),
        ));
        let body = if let Some(error) = self.errors.get(req.method.as_ref()) {
            serde_json::json!({ "jsonrpc": "2.0", "error": error, "id": 1 })
        } else {
            let result = self
                .results
                .get(req.method.as_ref())
                .cloned()
                .unwrap_or(serde_json::Value::Null);
            serde_json::json!({ "jsonrpc": "2.0", "result": result, "id": 1 })
        };
        resp_to_raw_result(&body.to_string())
    }

    async fn batch_request(
        &self,
        reqs: &[Request<'_>],
    ) -> Result<Vec<RawRpcResult>, TransportError> {
        let mut out = Vec::with_capacity(reqs.len());
        for req in reqs {
            out.push(self.json_rpc_request(req).await?);
        }
        Ok(out)
    }
}

fn address() -> Address {
    Address::repeat_byte(0x68)
}

#[tokio::test]
async fn get_balance_unwraps_the_quantity() {
    let mock = MockConnection::default().with_result("eth_getBalance", "0xde0b6b3a7640000".into());
    let provider = Provider::new(mock);

    let balance = provider.get_balance(address(), BlockNumber::Latest).await.unwrap();
    assert_eq!(balance, U256::from(1_000_000_000_000_000_000u64));

    // positional params: [address, block tag]
    let params = provider.transport().sent_params("eth_getBalance").unwrap();
    assert!(params.starts_with(r#"["0x"#));
    assert!(params.ends_with(r#","latest"]"#));
}

#[tokio::test]
async fn get_transaction_count_at_explicit_height() {
    let mock =
        MockConnection::default().with_result("eth_getTransactionCount", "0x2f".into());
    let provider = Provider::new(mock);

    let nonce = provider
        .get_transaction_count(address(), BlockNumber::Number(0x10d4f))
        .await
        .unwrap();
    assert_eq!(nonce, U256::from(0x2fu64));

    let params = provider
        .transport()
        .sent_params("eth_getTransactionCount")
        .unwrap();
    assert!(params.ends_with(r#","0x10d4f"]"#));
}

#[tokio::test]
async fn get_code_unwraps_the_data() {
    let mock = MockConnection::default().with_result("eth_getCode", "0x608060".into());
    let provider = Provider::new(mock);

    let code = provider.get_code(address(), BlockNumber::Latest).await.unwrap();
    assert_eq!(code, vec![0x60, 0x80, 0x60]);
}

#[tokio::test]
async fn get_transaction_by_hash_dispatches_on_type() {
    let tx_json = serde_json::json!({
        "type": "0x2",
        "hash": "0xc5b9b86bbdcb8e54b693bef011d0a0bbd95f2325d5e4e2bdffa2cad7b2bcf103",
        "nonce": "0x2f",
        "blockHash": "0xf0e8c8779bb5bbbbf2d2f56ec1e626e10f0987bdcbb8ed7fc0c62d83a293b4d8",
        "blockNumber": "0x112a880",
        "transactionIndex": "0x1d",
        "from": "0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45",
        "to": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
        "value": "0x0",
        "gas": "0x33450",
        "input": "0x",
        "maxFeePerGas": "0x25e1a2b4b4",
        "maxPriorityFeePerGas": "0x3b9aca00",
        "chainId": "0x1",
        "accessList": [],
        "yParity": "0x1",
        "r": "0x1",
        "s": "0x2"
    });
    let mock = MockConnection::default().with_result("eth_getTransactionByHash", tx_json);
    let provider = Provider::new(mock);

    let tx = provider
        .get_transaction_by_hash(B256::repeat_byte(0xc5))
        .await
        .unwrap()
        .expect("a known transaction");
    let fee = tx.fee_market().expect("a fee-market transaction");
    assert_eq!(fee.max_fee_per_gas, Quantity::from(0x25e1a2b4b4u64));
    assert_eq!(
        fee.base_fee(),
        Quantity::from(0x25e1a2b4b4u64 - 0x3b9aca00u64)
    );
    assert!(tx.common().block.is_some());
}

#[tokio::test]
async fn call_carries_abi_encoded_payload() {
    use ethkit_abi::{sol_type, SolType, Tokenize};
    use ethkit_rpc_types::{Data, TransactionRequest};

    // balanceOf(address), selector precomputed by the caller
    let holder = Address::repeat_byte(0x42);
    let calldata = holder.encode_with_selector([0x70, 0xa0, 0x82, 0x31]);

    let mock = MockConnection::default().with_result(
        "eth_call",
        "0x00000000000000000000000000000000000000000000000000000000000000ff".into(),
    );
    let provider = Provider::new(mock);

    let request = TransactionRequest::new()
        .to(Address::repeat_byte(0x11))
        .data(Data(calldata));
    let output = provider.call(request, BlockNumber::Latest).await.unwrap();

    // the selector and the left-padded address went over the wire
    let params = provider.transport().sent_params("eth_call").unwrap();
    assert!(params.contains(concat!(
        "0x70a08231",
        "0000000000000000000000004242424242424242424242424242424242424242"
    )));

    // and the returned word unwraps into a plain uint256
    let balance = sol_type::Uint::<256>::decode(&output).unwrap();
    assert_eq!(balance, U256::from(0xffu64));
}

#[tokio::test]
async fn missing_transaction_is_none() {
    let provider = Provider::new(MockConnection::default());
    let tx = provider
        .get_transaction_by_hash(B256::repeat_byte(0x00))
        .await
        .unwrap();
    assert!(tx.is_none());

    let receipt = provider
        .get_transaction_receipt(B256::repeat_byte(0x00))
        .await
        .unwrap();
    assert!(receipt.is_none());
}

#[tokio::test]
async fn node_errors_stay_inspectable() {
    let mock = MockConnection::default().with_error(
        "eth_estimateGas",
        serde_json::json!({
            "code": -32000,
            "message": "execution reverted",
            "data": { "originalError": { "code": 3 } }
        }),
    );
    let provider = Provider::new(mock);

    let err = provider
        .estimate_gas(Default::default(), BlockNumber::Pending)
        .await
        .unwrap_err();
    let ProviderError::JsonRpc(ref object) = err else {
        panic!("expected a json-rpc error, got {err:?}");
    };
    assert_eq!(object.code(), -32000);

    // the attached payload decodes into the permissive element tree
    let data = err.error_data().expect("error data");
    assert_eq!(
        data.get("originalError").and_then(|e| e.get("code")).and_then(Element::as_i64),
        Some(3)
    );
}
