//! Fixed-size byte array types.

use fixed_hash::construct_fixed_hash;

use crate::U256;

construct_fixed_hash! {
    /// 160 bits: the address width.
    pub struct B160(20);
}

construct_fixed_hash! {
    /// 256 bits: the EVM word width.
    pub struct B256(32);
}

impl From<B160> for B256 {
    /// Places the 20 bytes in the low end of the word, the ABI address slot
    /// layout.
    fn from(value: B160) -> Self {
        let mut word = B256::zero();
        word.0[12..].copy_from_slice(&value.0);
        word
    }
}

impl From<B256> for U256 {
    fn from(value: B256) -> Self {
        U256::from_be_bytes::<32>(value.0)
    }
}

impl From<U256> for B256 {
    fn from(value: U256) -> Self {
        B256(value.to_be_bytes::<32>())
    }
}
