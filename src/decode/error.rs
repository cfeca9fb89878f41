use crate::wire::{TagError, VarintError};
use thiserror::Error;

/// Why a buffer could not be decoded. Offsets are absolute positions in the
/// buffer handed to the top-level decode call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed tag at offset {offset}: {source}")]
    MalformedTag { offset: usize, source: VarintError },
    #[error("invalid field number {number} in tag at offset {offset}")]
    InvalidFieldNumber { offset: usize, number: u64 },
    #[error("unsupported wire type {wire_type} for field {field} at offset {offset}")]
    UnsupportedWireType {
        offset: usize,
        field: u32,
        wire_type: u8,
    },
    #[error("field {field} at offset {offset}: truncated varint")]
    TruncatedVarint { offset: usize, field: u32 },
    #[error("field {field} at offset {offset}: varint overflows 64 bits")]
    VarintOverflow { offset: usize, field: u32 },
    #[error("field {field} at offset {offset}: needs {width} bytes, {remaining} remaining")]
    TruncatedFixed {
        offset: usize,
        field: u32,
        width: usize,
        remaining: usize,
    },
    #[error("field {field} out of bounds: length {length} at offset {offset}, {remaining} bytes remaining")]
    LengthOutOfBounds {
        offset: usize,
        field: u32,
        length: u64,
        remaining: usize,
    },
    #[error("no fields in message candidate at offset {offset}")]
    EmptyInput { offset: usize },
}

pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    pub(super) fn from_tag(err: TagError, offset: usize) -> Self {
        match err {
            TagError::Varint(source) => Self::MalformedTag { offset, source },
            TagError::FieldNumber(number) => Self::InvalidFieldNumber { offset, number },
            TagError::WireType {
                field_number,
                wire_type,
            } => Self::UnsupportedWireType {
                offset,
                field: field_number,
                wire_type,
            },
        }
    }

    pub(super) fn from_varint(err: VarintError, field: u32, offset: usize) -> Self {
        match err {
            VarintError::Truncated => Self::TruncatedVarint { offset, field },
            VarintError::Overflow => Self::VarintOverflow { offset, field },
        }
    }

    /// Byte offset at which decoding failed.
    pub fn offset(&self) -> usize {
        match *self {
            Self::MalformedTag { offset, .. }
            | Self::InvalidFieldNumber { offset, .. }
            | Self::UnsupportedWireType { offset, .. }
            | Self::TruncatedVarint { offset, .. }
            | Self::VarintOverflow { offset, .. }
            | Self::TruncatedFixed { offset, .. }
            | Self::LengthOutOfBounds { offset, .. }
            | Self::EmptyInput { offset } => offset,
        }
    }
}
