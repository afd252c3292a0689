//! Ethereum JSON-RPC value types.
//!
//! Wire-form wrappers ([`Quantity`], [`Data`]), the typed transaction model
//! dispatched on the wire `type` field, receipts, and the permissive
//! [`json::Element`] tree for payloads with no fixed schema.

mod access_list;
pub use access_list::{AccessList, AccessListItem};

mod block;
pub use block::BlockNumber;

pub mod json;

mod quantity;
pub use quantity::{Data, HexParseError, Quantity};

mod receipt;
pub use receipt::{Log, TransactionReceipt};

mod request;
pub use request::TransactionRequest;

mod transaction;
pub use transaction::{
    BlockPath, Fee1559, FeeLegacy, SignatureLegacy, SignatureParity, Transaction, TxCommon,
};
