// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ethereum ABI params.

use core::fmt;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{ParamType, Word};

/// The wire shape of an ABI value.
///
/// Tokens carry encoded structure, not Rust types: every 32-byte scalar is a
/// [`Token::Word`], every tuple or fixed array a [`Token::FixedSeq`], and so
/// on. The [`SolType`](crate::SolType) layer converts between tokens and
/// typed values.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A single 32-byte word: integers, addresses, booleans, fixed bytes.
    Word(Word),
    /// A fixed-length sequence: a tuple or `T[M]`.
    FixedSeq(Vec<Token>),
    /// A dynamic-length sequence: `T[]`.
    DynSeq(Vec<Token>),
    /// A length-prefixed byte region: `bytes` or `string`.
    PackedSeq(Vec<u8>),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(contents) => write!(f, "Word {contents}"),
            Token::FixedSeq(contents) => write!(f, "FixedSeq {contents:?}"),
            Token::DynSeq(contents) => write!(f, "DynSeq {contents:?}"),
            Token::PackedSeq(contents) => write!(f, "PackedSeq {contents:?}"),
        }
    }
}

impl Token {
    /// The underlying word of a scalar token.
    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }

    /// The underlying buffer of a packed sequence (string or bytes).
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Token::PackedSeq(buf) => Some(buf.as_ref()),
            _ => None,
        }
    }

    /// The elements of a dynamic sequence.
    pub fn as_dyn_seq(&self) -> Option<&[Token]> {
        match self {
            Token::DynSeq(seq) => Some(seq.as_ref()),
            _ => None,
        }
    }

    /// The elements of a fixed sequence (tuple or fixed array).
    pub fn as_fixed_seq(&self) -> Option<&[Token]> {
        match self {
            Token::FixedSeq(seq) => Some(seq.as_ref()),
            _ => None,
        }
    }

    /// Whether this token's encoding goes through an offset word in the
    /// enclosing head.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Token::DynSeq(_) | Token::PackedSeq(_) => true,
            Token::FixedSeq(tokens) => tokens.iter().any(Token::is_dynamic),
            Token::Word(_) => false,
        }
    }

    /// Whether the token has the wire shape of `param_type`.
    ///
    /// Word-backed types all check against [`Token::Word`]; containers check
    /// length and recurse.
    pub fn type_check(&self, param_type: &ParamType) -> bool {
        match param_type {
            ParamType::Address
            | ParamType::Int(_)
            | ParamType::Uint(_)
            | ParamType::Bool
            | ParamType::FixedBytes(_) => matches!(self, Token::Word(_)),
            ParamType::Bytes | ParamType::String => matches!(self, Token::PackedSeq(_)),
            ParamType::Array(inner) => match self {
                Token::DynSeq(tokens) => tokens.iter().all(|t| t.type_check(inner)),
                _ => false,
            },
            ParamType::FixedArray(inner, size) => match self {
                Token::FixedSeq(tokens) => {
                    tokens.len() == *size && tokens.iter().all(|t| t.type_check(inner))
                }
                _ => false,
            },
            ParamType::Tuple(types) => match self {
                Token::FixedSeq(tokens) => {
                    tokens.len() == types.len()
                        && tokens.iter().zip(types).all(|(t, ty)| t.type_check(ty))
                }
                _ => false,
            },
        }
    }

    /// Check a token sequence against a type sequence.
    pub fn types_check(tokens: &[Token], types: &[ParamType]) -> bool {
        tokens.len() == types.len()
            && tokens.iter().zip(types).all(|(token, ty)| token.type_check(ty))
    }
}
