//! ABI codec errors.

/// Decoding failure.
///
/// Out-of-bounds reads are kept distinct from shape mismatches so callers
/// can tell truncated wire data from a schema disagreement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// A read would run past the end of the buffer.
    #[cfg_attr(
        feature = "std",
        error("buffer overrun: need {needed} bytes at offset {offset}, buffer holds {len}")
    )]
    Overrun {
        /// Offset of the attempted read.
        offset: usize,
        /// Bytes the decode step needed.
        needed: usize,
        /// Total buffer length.
        len: usize,
    },

    /// Bytes are present but are not a valid value of the target type.
    #[cfg_attr(feature = "std", error("invalid data for {expected} at offset {offset}"))]
    InvalidData {
        /// What was being decoded.
        expected: &'static str,
        /// Offset of the offending word.
        offset: usize,
    },

    /// A hex string could not be parsed.
    #[cfg_attr(feature = "std", error("invalid hex: {0}"))]
    Hex(hex::FromHexError),
}

/// Codec result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
