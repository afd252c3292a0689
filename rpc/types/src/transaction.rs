//! Typed transactions fetched over JSON-RPC.
//!
//! The wire shape is one flat camelCase object whose `type` quantity picks
//! the concrete format. [`Transaction`] is the closed sum over the known
//! formats; decoding buffers the flat object, probes `type`, and builds the
//! matching variant. Unknown types keep the shared fields instead of
//! failing, so newer formats degrade gracefully.

use ethkit_primitives::{Address, B256};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{AccessList, Data, Quantity};

/// Where a mined transaction sits in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPath {
    /// Hash of the containing block.
    pub block_hash: B256,
    /// Height of the containing block.
    pub block_number: Quantity,
    /// Position within the block.
    pub transaction_index: Quantity,
}

/// Fields shared by every transaction format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxCommon {
    /// Transaction hash.
    pub hash: B256,
    /// Sender nonce.
    pub nonce: Quantity,
    /// Sender.
    pub from: Address,
    /// Recipient; `None` for contract creation.
    pub to: Option<Address>,
    /// Transferred wei.
    pub value: Quantity,
    /// Call payload.
    pub input: Data,
    /// Gas limit.
    pub gas: Quantity,
    /// Block placement; `None` while pending.
    pub block: Option<BlockPath>,
}

/// Legacy single-price gas fee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeLegacy {
    /// Price per gas unit.
    pub gas_price: Quantity,
}

/// EIP-1559 fee-market pricing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fee1559 {
    /// Cap on the total per-gas price.
    pub max_fee_per_gas: Quantity,
    /// Cap on the miner tip per gas.
    pub max_priority_fee_per_gas: Quantity,
}

impl Fee1559 {
    /// The base fee implied by the two caps.
    pub fn base_fee(&self) -> Quantity {
        Quantity(
            self.max_fee_per_gas
                .0
                .checked_sub(self.max_priority_fee_per_gas.0)
                .unwrap_or_default(),
        )
    }
}

/// Pre-2930 signature with the recovery id folded into `v`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureLegacy {
    /// Recovery id, possibly EIP-155 encoded.
    pub v: Quantity,
    /// R component.
    pub r: Quantity,
    /// S component.
    pub s: Quantity,
}

/// EIP-2930/1559 signature carrying the bare y parity bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureParity {
    /// Parity of the curve point's y coordinate.
    pub y_parity: Quantity,
    /// R component.
    pub r: Quantity,
    /// S component.
    pub s: Quantity,
}

/// A transaction fetched from a node, keyed by the wire `type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Type `0x0`, or no `type` field at all.
    Legacy {
        /// Shared fields.
        common: TxCommon,
        /// Gas pricing.
        fee: FeeLegacy,
        /// Signature.
        signature: SignatureLegacy,
    },
    /// Type `0x1`, EIP-2930.
    AccessList {
        /// Shared fields.
        common: TxCommon,
        /// Chain the signature commits to.
        chain_id: Quantity,
        /// Warmed accounts and slots.
        access_list: AccessList,
        /// Gas pricing.
        fee: FeeLegacy,
        /// Signature.
        signature: SignatureParity,
    },
    /// Type `0x2`, EIP-1559.
    FeeMarket {
        /// Shared fields.
        common: TxCommon,
        /// Chain the signature commits to.
        chain_id: Quantity,
        /// Warmed accounts and slots.
        access_list: AccessList,
        /// Fee-market pricing.
        fee: Fee1559,
        /// Signature.
        signature: SignatureParity,
    },
    /// A format this library does not know. Shared fields are kept so newer
    /// formats decode instead of failing.
    Unknown {
        /// Shared fields.
        common: TxCommon,
        /// The unrecognized wire type.
        tx_type: Quantity,
    },
}

impl Transaction {
    /// The shared fields.
    pub fn common(&self) -> &TxCommon {
        match self {
            Self::Legacy { common, .. }
            | Self::AccessList { common, .. }
            | Self::FeeMarket { common, .. }
            | Self::Unknown { common, .. } => common,
        }
    }

    /// The wire `type` discriminant.
    pub fn tx_type(&self) -> Quantity {
        match self {
            Self::Legacy { .. } => Quantity::from(0u64),
            Self::AccessList { .. } => Quantity::from(1u64),
            Self::FeeMarket { .. } => Quantity::from(2u64),
            Self::Unknown { tx_type, .. } => *tx_type,
        }
    }

    /// The single gas price, for formats that have one.
    pub fn gas_price(&self) -> Option<Quantity> {
        match self {
            Self::Legacy { fee, .. } | Self::AccessList { fee, .. } => Some(fee.gas_price),
            _ => None,
        }
    }

    /// The fee-market caps, for EIP-1559 transactions.
    pub fn fee_market(&self) -> Option<&Fee1559> {
        match self {
            Self::FeeMarket { fee, .. } => Some(fee),
            _ => None,
        }
    }
}

/// The flat wire object: every field optional, requirements enforced per
/// variant once `type` is known.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TxRepr {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    tx_type: Option<Quantity>,
    hash: Option<B256>,
    nonce: Option<Quantity>,
    block_hash: Option<B256>,
    block_number: Option<Quantity>,
    transaction_index: Option<Quantity>,
    from: Option<Address>,
    to: Option<Address>,
    value: Option<Quantity>,
    #[serde(alias = "data")]
    input: Option<Data>,
    gas: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gas_price: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_fee_per_gas: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_priority_fee_per_gas: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain_id: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_list: Option<AccessList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    v: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y_parity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    r: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s: Option<Quantity>,
}

#[derive(Debug, thiserror::Error)]
#[error("missing transaction field `{0}`")]
struct MissingField(&'static str);

fn field<T>(value: Option<T>, name: &'static str) -> Result<T, MissingField> {
    value.ok_or(MissingField(name))
}

impl TryFrom<TxRepr> for Transaction {
    type Error = MissingField;

    fn try_from(repr: TxRepr) -> Result<Self, Self::Error> {
        let TxRepr {
            tx_type,
            hash,
            nonce,
            block_hash,
            block_number,
            transaction_index,
            from,
            to,
            value,
            input,
            gas,
            gas_price,
            max_fee_per_gas,
            max_priority_fee_per_gas,
            chain_id,
            access_list,
            v,
            y_parity,
            r,
            s,
        } = repr;

        // a transaction is mined only when the whole block path is present
        let block = match (block_hash, block_number, transaction_index) {
            (Some(block_hash), Some(block_number), Some(transaction_index)) => Some(BlockPath {
                block_hash,
                block_number,
                transaction_index,
            }),
            _ => None,
        };
        let common = TxCommon {
            hash: field(hash, "hash")?,
            nonce: field(nonce, "nonce")?,
            from: field(from, "from")?,
            to,
            value: field(value, "value")?,
            input: field(input, "input")?,
            gas: field(gas, "gas")?,
            block,
        };

        // 2930 responses may carry either yParity, v, or both
        let parity_signature = |name: &'static str| -> Result<SignatureParity, MissingField> {
            Ok(SignatureParity {
                y_parity: field(y_parity.or(v), name)?,
                r: field(r, "r")?,
                s: field(s, "s")?,
            })
        };

        let discriminant = match &tx_type {
            None => 0,
            Some(q) => q.to_u64().unwrap_or(u64::MAX),
        };
        Ok(match discriminant {
            0 => Transaction::Legacy {
                common,
                fee: FeeLegacy { gas_price: field(gas_price, "gasPrice")? },
                signature: SignatureLegacy {
                    v: field(v, "v")?,
                    r: field(r, "r")?,
                    s: field(s, "s")?,
                },
            },
            1 => Transaction::AccessList {
                common,
                chain_id: field(chain_id, "chainId")?,
                access_list: access_list.unwrap_or_default(),
                fee: FeeLegacy { gas_price: field(gas_price, "gasPrice")? },
                signature: parity_signature("yParity")?,
            },
            2 => Transaction::FeeMarket {
                common,
                chain_id: field(chain_id, "chainId")?,
                access_list: access_list.unwrap_or_default(),
                fee: Fee1559 {
                    max_fee_per_gas: field(max_fee_per_gas, "maxFeePerGas")?,
                    max_priority_fee_per_gas: field(
                        max_priority_fee_per_gas,
                        "maxPriorityFeePerGas",
                    )?,
                },
                signature: parity_signature("yParity")?,
            },
            _ => Transaction::Unknown {
                common,
                tx_type: tx_type.expect("non-legacy discriminant implies a type field"),
            },
        })
    }
}

impl From<&Transaction> for TxRepr {
    fn from(tx: &Transaction) -> Self {
        let common = tx.common();
        let mut repr = TxRepr {
            tx_type: Some(tx.tx_type()),
            hash: Some(common.hash),
            nonce: Some(common.nonce),
            block_hash: common.block.map(|b| b.block_hash),
            block_number: common.block.map(|b| b.block_number),
            transaction_index: common.block.map(|b| b.transaction_index),
            from: Some(common.from),
            to: common.to,
            value: Some(common.value),
            input: Some(common.input.clone()),
            gas: Some(common.gas),
            ..TxRepr::default()
        };
        match tx {
            Transaction::Legacy { fee, signature, .. } => {
                repr.gas_price = Some(fee.gas_price);
                repr.v = Some(signature.v);
                repr.r = Some(signature.r);
                repr.s = Some(signature.s);
            }
            Transaction::AccessList { chain_id, access_list, fee, signature, .. } => {
                repr.chain_id = Some(*chain_id);
                repr.access_list = Some(access_list.clone());
                repr.gas_price = Some(fee.gas_price);
                repr.y_parity = Some(signature.y_parity);
                repr.r = Some(signature.r);
                repr.s = Some(signature.s);
            }
            Transaction::FeeMarket { chain_id, access_list, fee, signature, .. } => {
                repr.chain_id = Some(*chain_id);
                repr.access_list = Some(access_list.clone());
                repr.max_fee_per_gas = Some(fee.max_fee_per_gas);
                repr.max_priority_fee_per_gas = Some(fee.max_priority_fee_per_gas);
                repr.y_parity = Some(signature.y_parity);
                repr.r = Some(signature.r);
                repr.s = Some(signature.s);
            }
            Transaction::Unknown { .. } => {}
        }
        repr
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = TxRepr::deserialize(deserializer)?;
        Transaction::try_from(repr).map_err(de::Error::custom)
    }
}

impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TxRepr::from(self).serialize(serializer)
    }
}
