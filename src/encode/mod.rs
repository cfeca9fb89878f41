mod chunk;
mod error;
mod message;

pub use self::error::{EncodeError, EncodeResult};
use self::message::MessageEncoder;
use crate::{field::Value, message::Message};
use prost::bytes::BufMut;

/// Order in which an [`Encoder`] writes fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldOrder {
    /// Fields are written in the order they appear in the message.
    #[default]
    Insertion,
    /// Fields are sorted by ascending field number, keeping the relative order
    /// of fields that share a number. Applies to embedded messages as well.
    Deterministic,
}

/// Serializes a [`Message`] back to wire bytes.
///
/// Length-delimited fields that carry an embedded message are written by
/// re-encoding that message; the raw bytes they were decoded from are only
/// used for fields without one. Varints are always written in their minimal
/// form, so re-encoding is byte-for-byte exact for canonically encoded input.
///
/// A decoded payload that was recognized as a message despite zero padding or
/// non-minimal varints is written in normalized form. Decoding the output
/// gives the same embedded message but a shorter raw payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    order: FieldOrder,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deterministic() -> Self {
        Self::new().with_order(FieldOrder::Deterministic)
    }

    pub fn with_order(mut self, order: FieldOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> FieldOrder {
        self.order
    }

    /// Length of the encoding of `msg`, failing where [`encode`](Self::encode)
    /// would.
    pub fn encoded_len(&self, msg: &Message) -> EncodeResult<usize> {
        validate(msg, &mut vec![])?;
        Ok(MessageEncoder::from_message(msg, self.order).encoded_len())
    }

    pub fn encode(&self, msg: &Message) -> EncodeResult<Vec<u8>> {
        validate(msg, &mut vec![])?;
        Ok(MessageEncoder::from_message(msg, self.order).into_vec())
    }

    /// Appends the encoding of `msg` to `buf`, leaving `buf` untouched on error.
    pub fn encode_to(&self, msg: &Message, buf: &mut impl BufMut) -> EncodeResult<()> {
        validate(msg, &mut vec![])?;
        let encoder = MessageEncoder::from_message(msg, self.order);
        let required = encoder.encoded_len();
        let remaining = buf.remaining_mut();
        if required > remaining {
            return Err(EncodeError::BufferTooSmall {
                required,
                remaining,
            });
        }
        encoder.encode(buf);
        Ok(())
    }
}

/// Insertion-order encoding without validation, used to fill in the raw
/// payload of hand-built message fields.
pub(crate) fn encode_unchecked(msg: &Message) -> Vec<u8> {
    MessageEncoder::from_message(msg, FieldOrder::Insertion).into_vec()
}

fn validate(msg: &Message, path: &mut Vec<u32>) -> EncodeResult<()> {
    for field in msg.iter() {
        if field.number == 0 {
            return Err(EncodeError::InvalidFieldNumber { path: path.clone() });
        }
        if let Value::LengthDelimited {
            message: Some(inner),
            ..
        } = &field.value
        {
            path.push(field.number);
            validate(inner, path)?;
            path.pop();
        }
    }
    Ok(())
}
