//! Static mapping between Solidity types and Rust values.

use core::marker::PhantomData;

use ethkit_primitives::{B160, B256, I256, U256};

use alloc::string::String as RustString;

#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{encode, Error, ParamType, Result, Token, Word};

/// A Solidity type with a static Rust representation.
///
/// The type itself is the schema: [`SolType::param_type`] yields the runtime
/// [`ParamType`] the decoder runs on, and tokenize/detokenize convert
/// between [`Token`]s and the associated Rust value.
pub trait SolType {
    /// The Rust value this Solidity type maps to.
    type RustType;

    /// Runtime schema for this type.
    fn param_type() -> ParamType;

    /// Canonical Solidity name, as used to compute function selectors.
    fn sol_type_name() -> RustString {
        use alloc::string::ToString;
        Self::param_type().to_string()
    }

    /// Whether the encoding goes through an offset word.
    fn is_dynamic() -> bool {
        Self::param_type().is_dynamic()
    }

    /// Whether a token has the right wire shape for this type.
    fn type_check(token: &Token) -> bool;

    /// Convert a token into the Rust value.
    fn detokenize(token: &Token) -> Result<Self::RustType>;

    /// Convert a Rust value into a token.
    fn tokenize(rust: Self::RustType) -> Token;

    /// ABI encode a value of this type.
    fn encode(rust: Self::RustType) -> Vec<u8> {
        encode(&[Self::tokenize(rust)])
    }

    /// ABI encode to a `0x`-prefixed hex string.
    fn hex_encode(rust: Self::RustType) -> RustString {
        format!("0x{}", hex::encode(Self::encode(rust)))
    }

    /// ABI decode a value of this type.
    fn decode(data: &[u8]) -> Result<Self::RustType> {
        let tokens = crate::decode(&[Self::param_type()], data)?;
        Self::detokenize(&tokens[0])
    }

    /// ABI decode from a `0x`-prefixed hex string.
    fn hex_decode(data: &str) -> Result<Self::RustType> {
        let payload = data.strip_prefix("0x").unwrap_or(data);
        hex::decode(payload)
            .map_err(Error::Hex)
            .and_then(|buf| Self::decode(&buf))
    }
}

fn shape_error(expected: &'static str) -> Error {
    Error::InvalidData { expected, offset: 0 }
}

/// Solidity `address`.
pub struct Address;

impl SolType for Address {
    type RustType = B160;

    fn param_type() -> ParamType {
        ParamType::Address
    }

    fn type_check(token: &Token) -> bool {
        matches!(token, Token::Word(_))
    }

    fn detokenize(token: &Token) -> Result<Self::RustType> {
        token
            .as_word()
            .map(|word| B160::from_slice(&word[12..]))
            .ok_or_else(|| shape_error("address"))
    }

    fn tokenize(rust: Self::RustType) -> Token {
        Token::Word(rust.into())
    }
}

/// Solidity `bool`.
pub struct Bool;

impl SolType for Bool {
    type RustType = bool;

    fn param_type() -> ParamType {
        ParamType::Bool
    }

    fn type_check(token: &Token) -> bool {
        match token {
            Token::Word(word) => word[..31].iter().all(|&b| b == 0) && word[31] <= 1,
            _ => false,
        }
    }

    fn detokenize(token: &Token) -> Result<Self::RustType> {
        if !Self::type_check(token) {
            return Err(shape_error("bool"));
        }
        Ok(token.as_word().unwrap()[31] == 1)
    }

    fn tokenize(rust: Self::RustType) -> Token {
        let mut word = Word::default();
        word.0[31] = rust as u8;
        Token::Word(word)
    }
}

/// Solidity `bytes`.
pub struct Bytes;

impl SolType for Bytes {
    type RustType = Vec<u8>;

    fn param_type() -> ParamType {
        ParamType::Bytes
    }

    fn type_check(token: &Token) -> bool {
        matches!(token, Token::PackedSeq(_))
    }

    fn detokenize(token: &Token) -> Result<Self::RustType> {
        token
            .as_bytes()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| shape_error("bytes"))
    }

    fn tokenize(rust: Self::RustType) -> Token {
        Token::PackedSeq(rust)
    }
}

/// Solidity `string`.
pub struct String;

impl SolType for String {
    type RustType = RustString;

    fn param_type() -> ParamType {
        ParamType::String
    }

    fn type_check(token: &Token) -> bool {
        match token {
            Token::PackedSeq(bytes) => core::str::from_utf8(bytes).is_ok(),
            _ => false,
        }
    }

    fn detokenize(token: &Token) -> Result<Self::RustType> {
        RustString::from_utf8(Bytes::detokenize(token)?).map_err(|_| shape_error("utf-8 string"))
    }

    fn tokenize(rust: Self::RustType) -> Token {
        Token::PackedSeq(rust.into_bytes())
    }
}

/// Solidity `uintN`.
pub struct Uint<const BITS: usize>;

macro_rules! impl_uint_sol_type {
    ($uty:ty, $bits:literal) => {
        impl SolType for Uint<$bits> {
            type RustType = $uty;

            fn param_type() -> ParamType {
                ParamType::Uint($bits)
            }

            fn type_check(token: &Token) -> bool {
                matches!(token, Token::Word(_))
            }

            fn detokenize(token: &Token) -> Result<Self::RustType> {
                let word = token.as_word().ok_or_else(|| shape_error("uint"))?;
                let bytes = (<$uty>::BITS / 8) as usize;
                let mut buf = [0u8; core::mem::size_of::<$uty>()];
                buf.copy_from_slice(&word[32 - bytes..]);
                Ok(<$uty>::from_be_bytes(buf))
            }

            fn tokenize(rust: Self::RustType) -> Token {
                let bytes = (<$uty>::BITS / 8) as usize;
                let mut word = Word::default();
                word[32 - bytes..].copy_from_slice(&rust.to_be_bytes());
                Token::Word(word)
            }
        }
    };

    ($bits:literal) => {
        impl SolType for Uint<$bits> {
            type RustType = U256;

            fn param_type() -> ParamType {
                ParamType::Uint($bits)
            }

            fn type_check(token: &Token) -> bool {
                matches!(token, Token::Word(_))
            }

            fn detokenize(token: &Token) -> Result<Self::RustType> {
                token
                    .as_word()
                    .map(|word| U256::from(*word))
                    .ok_or_else(|| shape_error("uint"))
            }

            fn tokenize(rust: Self::RustType) -> Token {
                Token::Word(B256::from(rust))
            }
        }
    };

    ($($bits:literal,)+) => {
        $(
            impl_uint_sol_type!($bits);
        )+
    };
}

impl_uint_sol_type!(u8, 8);
impl_uint_sol_type!(u16, 16);
impl_uint_sol_type!(u32, 24);
impl_uint_sol_type!(u32, 32);
impl_uint_sol_type!(u64, 40);
impl_uint_sol_type!(u64, 48);
impl_uint_sol_type!(u64, 56);
impl_uint_sol_type!(u64, 64);
impl_uint_sol_type!(
    72, 80, 88, 96, 104, 112, 120, 128, 136, 144, 152, 160, 168, 176, 184, 192, 200, 208, 216, 224,
    232, 240, 248, 256,
);

/// Solidity `intN`.
pub struct Int<const BITS: usize>;

macro_rules! impl_int_sol_type {
    ($ity:ty, $bits:literal) => {
        impl SolType for Int<$bits> {
            type RustType = $ity;

            fn param_type() -> ParamType {
                ParamType::Int($bits)
            }

            fn type_check(token: &Token) -> bool {
                matches!(token, Token::Word(_))
            }

            fn detokenize(token: &Token) -> Result<Self::RustType> {
                let word = token.as_word().ok_or_else(|| shape_error("int"))?;
                let bytes = (<$ity>::BITS / 8) as usize;
                let mut buf = [0u8; core::mem::size_of::<$ity>()];
                buf.copy_from_slice(&word[32 - bytes..]);
                Ok(<$ity>::from_be_bytes(buf))
            }

            fn tokenize(rust: Self::RustType) -> Token {
                // sign-extend into the full slot
                let mut word = if rust < 0 {
                    Word::repeat_byte(0xff)
                } else {
                    Word::default()
                };
                let bytes = (<$ity>::BITS / 8) as usize;
                word[32 - bytes..].copy_from_slice(&rust.to_be_bytes());
                Token::Word(word)
            }
        }
    };

    ($bits:literal) => {
        impl SolType for Int<$bits> {
            type RustType = I256;

            fn param_type() -> ParamType {
                ParamType::Int($bits)
            }

            fn type_check(token: &Token) -> bool {
                matches!(token, Token::Word(_))
            }

            fn detokenize(token: &Token) -> Result<Self::RustType> {
                token
                    .as_word()
                    .map(|word| I256::from_be_bytes::<32>(word.0))
                    .ok_or_else(|| shape_error("int"))
            }

            fn tokenize(rust: Self::RustType) -> Token {
                Token::Word(B256(rust.to_be_bytes::<32>()))
            }
        }
    };

    ($($bits:literal,)+) => {
        $(
            impl_int_sol_type!($bits);
        )+
    };
}

impl_int_sol_type!(i8, 8);
impl_int_sol_type!(i16, 16);
impl_int_sol_type!(i32, 24);
impl_int_sol_type!(i32, 32);
impl_int_sol_type!(i64, 40);
impl_int_sol_type!(i64, 48);
impl_int_sol_type!(i64, 56);
impl_int_sol_type!(i64, 64);
impl_int_sol_type!(
    72, 80, 88, 96, 104, 112, 120, 128, 136, 144, 152, 160, 168, 176, 184, 192, 200, 208, 216, 224,
    232, 240, 248, 256,
);

/// Solidity `bytesN`.
pub struct FixedBytes<const N: usize>;

macro_rules! impl_fixed_bytes_sol_type {
    ($($bytes:literal,)+) => {
        $(
            impl SolType for FixedBytes<$bytes> {
                type RustType = [u8; $bytes];

                fn param_type() -> ParamType {
                    ParamType::FixedBytes($bytes)
                }

                fn type_check(token: &Token) -> bool {
                    matches!(token, Token::Word(_))
                }

                fn detokenize(token: &Token) -> Result<Self::RustType> {
                    let word = token.as_word().ok_or_else(|| shape_error("fixed bytes"))?;
                    let mut out = [0u8; $bytes];
                    out.copy_from_slice(&word[..$bytes]);
                    Ok(out)
                }

                fn tokenize(rust: Self::RustType) -> Token {
                    // left-justified, zero padding on the right
                    let mut word = Word::default();
                    word[..$bytes].copy_from_slice(&rust);
                    Token::Word(word)
                }
            }
        )+
    };
}

impl_fixed_bytes_sol_type!(
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32,
);

/// Solidity `T[]`.
pub struct Array<T: SolType>(PhantomData<T>);

impl<T> SolType for Array<T>
where
    T: SolType,
{
    type RustType = Vec<T::RustType>;

    fn param_type() -> ParamType {
        ParamType::Array(Box::new(T::param_type()))
    }

    fn type_check(token: &Token) -> bool {
        match token {
            Token::DynSeq(tokens) => tokens.iter().all(T::type_check),
            _ => false,
        }
    }

    fn detokenize(token: &Token) -> Result<Self::RustType> {
        token
            .as_dyn_seq()
            .ok_or_else(|| shape_error("array"))?
            .iter()
            .map(T::detokenize)
            .collect()
    }

    fn tokenize(rust: Self::RustType) -> Token {
        Token::DynSeq(rust.into_iter().map(T::tokenize).collect())
    }
}

/// Solidity `T[N]`.
pub struct FixedArray<T, const N: usize>(PhantomData<T>);

impl<T, const N: usize> SolType for FixedArray<T, N>
where
    T: SolType,
{
    type RustType = [T::RustType; N];

    fn param_type() -> ParamType {
        ParamType::FixedArray(Box::new(T::param_type()), N)
    }

    fn type_check(token: &Token) -> bool {
        match token {
            Token::FixedSeq(tokens) => tokens.len() == N && tokens.iter().all(T::type_check),
            _ => false,
        }
    }

    fn detokenize(token: &Token) -> Result<Self::RustType> {
        let seq = token.as_fixed_seq().ok_or_else(|| shape_error("fixed array"))?;
        if seq.len() != N {
            return Err(shape_error("fixed array of matching length"));
        }
        seq.iter()
            .map(T::detokenize)
            .collect::<Result<Vec<_>>>()?
            .try_into()
            .map_err(|_| shape_error("fixed array of matching length"))
    }

    fn tokenize(rust: Self::RustType) -> Token {
        Token::FixedSeq(rust.into_iter().map(T::tokenize).collect())
    }
}

macro_rules! impl_tuple_sol_type {
    ($num:expr, $( $ty:ident : $no:tt ),+ $(,)?) => {
        impl<$($ty,)+> SolType for ($( $ty, )+)
        where
            $(
                $ty: SolType,
            )+
        {
            type RustType = ($( $ty::RustType, )+);

            fn param_type() -> ParamType {
                ParamType::Tuple(vec![$( $ty::param_type(), )+])
            }

            fn type_check(token: &Token) -> bool {
                match token {
                    Token::FixedSeq(tokens) => {
                        if tokens.len() != $num {
                            return false;
                        }
                        $(
                            if !$ty::type_check(&tokens[$no]) {
                                return false;
                            }
                        )+
                        true
                    }
                    _ => false,
                }
            }

            fn detokenize(token: &Token) -> Result<Self::RustType> {
                let tokens = token.as_fixed_seq().ok_or_else(|| shape_error("tuple"))?;
                if tokens.len() != $num {
                    return Err(shape_error("tuple of matching length"));
                }
                Ok((
                    $(
                        $ty::detokenize(&tokens[$no])?,
                    )+
                ))
            }

            fn tokenize(rust: Self::RustType) -> Token {
                Token::FixedSeq(vec![
                    $(
                        $ty::tokenize(rust.$no),
                    )+
                ])
            }
        }
    };
}

impl_tuple_sol_type!(1, A:0,);
impl_tuple_sol_type!(2, A:0, B:1,);
impl_tuple_sol_type!(3, A:0, B:1, C:2,);
impl_tuple_sol_type!(4, A:0, B:1, C:2, D:3,);
impl_tuple_sol_type!(5, A:0, B:1, C:2, D:3, E:4,);
impl_tuple_sol_type!(6, A:0, B:1, C:2, D:3, E:4, F:5,);
impl_tuple_sol_type!(7, A:0, B:1, C:2, D:3, E:4, F:5, G:6,);
impl_tuple_sol_type!(8, A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7,);
impl_tuple_sol_type!(9, A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8,);
impl_tuple_sol_type!(10, A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9,);
impl_tuple_sol_type!(11, A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10,);
impl_tuple_sol_type!(12, A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10, L:11,);
