// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ABI encoder.

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{
    util::{pad_usize, words_for},
    Bytes, Token,
};

/// Encodes a sequence of tokens into an ABI-compliant byte vector.
pub fn encode(tokens: &[Token]) -> Bytes {
    let mut out = Vec::with_capacity(sequence_len(tokens));
    encode_sequence(tokens, &mut out);
    out
}

/// Total encoded length of a token sequence: all heads plus all tails.
pub(crate) fn sequence_len(tokens: &[Token]) -> usize {
    tokens.iter().map(|t| head_len(t) + tail_len(t)).sum()
}

fn head_len(token: &Token) -> usize {
    if token.is_dynamic() {
        // the head holds only the offset word
        return 32;
    }
    match token {
        Token::Word(_) => 32,
        Token::FixedSeq(tokens) => tokens.iter().map(head_len).sum(),
        Token::DynSeq(_) | Token::PackedSeq(_) => unreachable!("dynamic handled above"),
    }
}

fn tail_len(token: &Token) -> usize {
    match token {
        Token::Word(_) => 0,
        Token::FixedSeq(tokens) => {
            if token.is_dynamic() {
                sequence_len(tokens)
            } else {
                0
            }
        }
        Token::DynSeq(tokens) => 32 + sequence_len(tokens),
        Token::PackedSeq(bytes) => 32 + words_for(bytes.len()) * 32,
    }
}

fn encode_sequence(tokens: &[Token], out: &mut Vec<u8>) {
    // An offset counts every head slot of the sequence plus every tail
    // appended before the element's own.
    let heads_len: usize = tokens.iter().map(head_len).sum();
    let mut offset = heads_len;
    for token in tokens {
        if token.is_dynamic() {
            out.extend_from_slice(pad_usize(offset).as_bytes());
            offset += tail_len(token);
        } else {
            encode_static(token, out);
        }
    }
    for token in tokens {
        if token.is_dynamic() {
            encode_tail(token, out);
        }
    }
}

fn encode_static(token: &Token, out: &mut Vec<u8>) {
    match token {
        Token::Word(word) => out.extend_from_slice(word.as_bytes()),
        Token::FixedSeq(tokens) => {
            for token in tokens {
                encode_static(token, out);
            }
        }
        Token::DynSeq(_) | Token::PackedSeq(_) => unreachable!("dynamic in static position"),
    }
}

fn encode_tail(token: &Token, out: &mut Vec<u8>) {
    match token {
        Token::Word(_) => {}
        Token::FixedSeq(tokens) => encode_sequence(tokens, out),
        Token::DynSeq(tokens) => {
            out.extend_from_slice(pad_usize(tokens.len()).as_bytes());
            encode_sequence(tokens, out);
        }
        Token::PackedSeq(bytes) => {
            out.extend_from_slice(pad_usize(bytes.len()).as_bytes());
            out.extend_from_slice(bytes);
            out.resize(out.len() + words_for(bytes.len()) * 32 - bytes.len(), 0);
        }
    }
}
