pub use prost::encoding::{encode_varint, encoded_len_varint};
use thiserror::Error;

/// A 64-bit varint never needs more than this many bytes.
pub const MAX_VARINT_LEN: usize = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarintError {
    #[error("varint is not terminated before the end of the buffer")]
    Truncated,
    #[error("varint does not fit into 64 bits")]
    Overflow,
}

/// Decodes a base-128 varint from the front of `buf`, returning the value and
/// the number of bytes it occupied.
///
/// Only the lowest bit of a tenth byte may be set; anything else would not fit
/// into a `u64` and is reported as [`VarintError::Overflow`], as is an
/// eleventh byte.
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut value = 0u64;
    for (i, &byte) in buf.iter().take(MAX_VARINT_LEN).enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(VarintError::Overflow);
        }
        value |= u64::from(byte & 0x7f) << (i * 7);
        if byte < 0x80 {
            return Ok((value, i + 1));
        }
    }
    if buf.len() >= MAX_VARINT_LEN {
        Err(VarintError::Overflow)
    } else {
        Err(VarintError::Truncated)
    }
}

/// Maps a zigzag-encoded `sint64` back to its signed value.
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}
