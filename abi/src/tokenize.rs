//! Ergonomic conversion of plain Rust values into [`Token`]s.

use ethkit_primitives::{B160, B256, I256, U256};

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{encode, Token, Word};

/// Convert a value into its ABI token.
///
/// This is the encode-side convenience layer: anything tokenizable can be
/// ABI encoded, with or without a 4-byte function selector. Computing the
/// selector from a signature is the caller's concern.
pub trait Tokenize {
    /// Convert to a token.
    fn to_token(&self) -> Token;

    /// ABI encode.
    fn encode(&self) -> Vec<u8> {
        encode(&[self.to_token()])
    }

    /// ABI encode to hex.
    fn encode_hex(&self) -> String {
        hex::encode(self.encode())
    }

    /// ABI encode behind a function selector.
    fn encode_with_selector(&self, selector: [u8; 4]) -> Vec<u8> {
        let mut out = Vec::from(selector);
        out.extend(self.encode());
        out
    }

    /// ABI encode behind a function selector, to hex.
    fn encode_hex_with_selector(&self, selector: [u8; 4]) -> String {
        hex::encode(self.encode_with_selector(selector))
    }
}

macro_rules! impl_tokenize_ints {
    ($int:ty, $uint:ty) => {
        impl Tokenize for $int {
            fn to_token(&self) -> Token {
                Token::Word(B256(I256::from(*self as i64).to_be_bytes::<32>()))
            }
        }

        impl Tokenize for $uint {
            fn to_token(&self) -> Token {
                Token::Word(B256::from(U256::from(*self as u64)))
            }
        }
    };
}

impl_tokenize_ints!(i8, u8);
impl_tokenize_ints!(i16, u16);
impl_tokenize_ints!(i32, u32);
impl_tokenize_ints!(i64, u64);
impl_tokenize_ints!(isize, usize);

impl Tokenize for bool {
    fn to_token(&self) -> Token {
        let mut word = Word::default();
        word.0[31] = *self as u8;
        Token::Word(word)
    }
}

impl Tokenize for &str {
    fn to_token(&self) -> Token {
        Token::PackedSeq(self.as_bytes().to_vec())
    }
}

impl Tokenize for String {
    fn to_token(&self) -> Token {
        Token::PackedSeq(self.as_bytes().to_vec())
    }
}

impl Tokenize for B160 {
    fn to_token(&self) -> Token {
        Token::Word((*self).into())
    }
}

impl Tokenize for B256 {
    fn to_token(&self) -> Token {
        Token::Word(*self)
    }
}

impl Tokenize for U256 {
    fn to_token(&self) -> Token {
        Token::Word(B256::from(*self))
    }
}

impl Tokenize for I256 {
    fn to_token(&self) -> Token {
        Token::Word(B256(self.to_be_bytes::<32>()))
    }
}

impl<T> Tokenize for Vec<T>
where
    T: Tokenize,
{
    fn to_token(&self) -> Token {
        Token::DynSeq(self.iter().map(Tokenize::to_token).collect())
    }
}

impl<T, const N: usize> Tokenize for [T; N]
where
    T: Tokenize,
{
    fn to_token(&self) -> Token {
        Token::FixedSeq(self.iter().map(Tokenize::to_token).collect())
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use crate::no_std_prelude::*;
    use crate::{Token, Tokenize};

    #[test]
    fn tokenize_scalars() {
        assert_eq!(true.to_token().as_word().unwrap()[31], 1);
        assert_eq!(7u64.to_token().as_word().unwrap()[31], 7);
        // negative ints sign-extend across the slot
        let word = (-1i32).to_token();
        assert_eq!(word.as_word().unwrap().0, [0xff; 32]);
    }

    #[test]
    fn tokenize_sequences() {
        let token = vec![1u8, 2, 3].to_token();
        assert_eq!(token.as_dyn_seq().unwrap().len(), 3);
        let token = [1u8, 2].to_token();
        assert_eq!(token.as_fixed_seq().unwrap().len(), 2);
        assert!(matches!("text".to_token(), Token::PackedSeq(_)));
    }

    #[test]
    fn encode_with_selector_prepends() {
        let encoded = 5u8.encode_with_selector([0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(&encoded[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(encoded.len(), 36);
        assert_eq!(
            5u8.encode_hex_with_selector([0xa9, 0x05, 0x9c, 0xbb]),
            format!("a9059cbb{}", hex::encode(5u8.encode()))
        );
    }
}
