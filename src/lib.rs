//! Decoding and re-encoding of protobuf wire-format messages without a schema.
//!
//! A buffer decodes into a [`Message`]: the ordered list of its fields, each a
//! field number plus a raw [`Value`]. Length-delimited payloads that are
//! themselves valid messages are decoded recursively and attached to the field
//! alongside their raw bytes, so nested data can be navigated by field number:
//!
//! ```
//! use schemaless_proto::Field;
//!
//! let msg = schemaless_proto::decode(b"\x0a\x07\x12\x05hello").unwrap();
//! let hello = msg.path(&[1, 2]).and_then(Field::as_str);
//! assert_eq!(hello, Some("hello"));
//!
//! assert_eq!(schemaless_proto::encode(&msg).unwrap(), b"\x0a\x07\x12\x05hello");
//! ```
//!
//! Whether a payload "is" a message can only be guessed: see [`Decoder`] for
//! the rule used.
//!
//! Decoded payloads are [`Bytes`] slices of one shared copy of the input, so a
//! [`Message`] owns its data and does not borrow from the caller's buffer.

mod decode;
mod encode;
mod field;
mod message;
pub mod wire;

pub use self::{
    decode::{DecodeError, DecodeResult, Decoder, DEFAULT_MAX_DEPTH},
    encode::{EncodeError, EncodeResult, Encoder, FieldOrder},
    field::{Field, Value},
    message::{Message, Repeated},
};
pub use prost::bytes::Bytes;

/// Decodes `buf` with the default [`Decoder`] settings.
pub fn decode(buf: &[u8]) -> DecodeResult<Message> {
    Decoder::default().decode(buf)
}

/// Encodes `msg` with fields in insertion order.
pub fn encode(msg: &Message) -> EncodeResult<Vec<u8>> {
    Encoder::default().encode(msg)
}

/// Encodes `msg` with fields sorted by field number.
pub fn encode_deterministic(msg: &Message) -> EncodeResult<Vec<u8>> {
    Encoder::deterministic().encode(msg)
}
