use super::varint::{decode_varint, encode_varint, encoded_len_varint, VarintError};
use prost::{bytes::BufMut, encoding::WireType};
use thiserror::Error;

/// A field key: the field number packed together with the wire type of the
/// value that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub field_number: u32,
    pub wire_type: WireType,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    #[error(transparent)]
    Varint(#[from] VarintError),
    #[error("invalid field number {0}")]
    FieldNumber(u64),
    #[error("unknown wire type {wire_type} for field {field_number}")]
    WireType { field_number: u32, wire_type: u8 },
}

impl Tag {
    pub fn new(field_number: u32, wire_type: WireType) -> Self {
        Self {
            field_number,
            wire_type,
        }
    }

    pub fn key(&self) -> u64 {
        (u64::from(self.field_number) << 3) | self.wire_type as u64
    }
}

/// Decodes a tag from the front of `buf`, returning it along with the number
/// of bytes consumed.
///
/// Group wire types are returned as-is; it is up to the caller to reject them.
pub fn decode_tag(buf: &[u8]) -> Result<(Tag, usize), TagError> {
    let (key, len) = decode_varint(buf)?;
    let field_number = key >> 3;
    if field_number == 0 || field_number > u64::from(u32::MAX) {
        return Err(TagError::FieldNumber(field_number));
    }
    let field_number = field_number as u32;
    let wire_type = WireType::try_from(key & 0x07).map_err(|_| TagError::WireType {
        field_number,
        wire_type: (key & 0x07) as u8,
    })?;
    Ok((Tag::new(field_number, wire_type), len))
}

pub fn encode_tag(tag: Tag, buf: &mut impl BufMut) {
    encode_varint(tag.key(), buf);
}

pub fn encoded_tag_len(tag: Tag) -> usize {
    encoded_len_varint(tag.key())
}
