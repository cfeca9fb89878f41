//! Wire-level primitives of the protobuf binary format: varints, fixed-width
//! little-endian values and field tags.

mod fixed;
mod tag;
mod varint;

pub use self::{
    fixed::{decode_fixed32, decode_fixed64, encode_fixed32, encode_fixed64},
    tag::{decode_tag, encode_tag, encoded_tag_len, Tag, TagError},
    varint::{
        decode_varint, encode_varint, encoded_len_varint, zigzag_decode, zigzag_encode,
        VarintError, MAX_VARINT_LEN,
    },
};
pub use prost::encoding::WireType;
