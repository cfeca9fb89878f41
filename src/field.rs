use crate::{
    encode::encode_unchecked,
    message::Message,
    wire::{decode_fixed32, decode_fixed64, decode_varint, zigzag_decode, Tag, WireType},
};
use prost::bytes::Bytes;

/// A single decoded record: a field number and the value that followed its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub number: u32,
    pub value: Value,
}

/// The payload of a field. The variant determines the wire type, so a field
/// can never carry a value that disagrees with its tag.
///
/// Scalars are kept as raw bit patterns; the typed accessors on [`Field`]
/// reinterpret them on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Varint(u64),
    Fixed64(u64),
    LengthDelimited {
        raw: Bytes,
        /// Present when `raw` also parsed as a non-empty message.
        message: Option<Message>,
    },
    Fixed32(u32),
}

impl Value {
    pub fn wire_type(&self) -> WireType {
        match self {
            Value::Varint(_) => WireType::Varint,
            Value::Fixed64(_) => WireType::SixtyFourBit,
            Value::LengthDelimited { .. } => WireType::LengthDelimited,
            Value::Fixed32(_) => WireType::ThirtyTwoBit,
        }
    }
}

impl Field {
    pub fn new(number: u32, value: Value) -> Self {
        Self { number, value }
    }

    pub fn varint(number: u32, value: u64) -> Self {
        Self::new(number, Value::Varint(value))
    }

    pub fn fixed32(number: u32, value: u32) -> Self {
        Self::new(number, Value::Fixed32(value))
    }

    pub fn fixed64(number: u32, value: u64) -> Self {
        Self::new(number, Value::Fixed64(value))
    }

    /// An opaque length-delimited field with no embedded message attached.
    pub fn bytes(number: u32, raw: impl Into<Bytes>) -> Self {
        Self::new(
            number,
            Value::LengthDelimited {
                raw: raw.into(),
                message: None,
            },
        )
    }

    pub fn string(number: u32, value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self::bytes(number, value)
    }

    /// An embedded message field. The raw payload is filled in with the
    /// message's insertion-order encoding so that the field compares equal to
    /// what decoding that encoding produces.
    pub fn message(number: u32, message: Message) -> Self {
        let raw = Bytes::from(encode_unchecked(&message));
        Self::new(
            number,
            Value::LengthDelimited {
                raw,
                message: Some(message),
            },
        )
    }

    pub fn tag(&self) -> Tag {
        Tag::new(self.number, self.wire_type())
    }

    pub fn wire_type(&self) -> WireType {
        self.value.wire_type()
    }

    pub fn as_varint(&self) -> Option<u64> {
        match self.value {
            Value::Varint(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_fixed32(&self) -> Option<u32> {
        match self.value {
            Value::Fixed32(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_fixed64(&self) -> Option<u64> {
        match self.value {
            Value::Fixed64(value) => Some(value),
            _ => None,
        }
    }

    /// The raw payload of a length-delimited field, whether or not it was also
    /// recognized as a message.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.value {
            Value::LengthDelimited { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match &self.value {
            Value::LengthDelimited { message, .. } => message.as_ref(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()?).ok()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_varint().map(|value| value != 0)
    }

    // Narrowing follows protobuf: 32-bit varint types keep the low 32 bits.
    pub fn as_u32(&self) -> Option<u32> {
        self.as_varint().map(|value| value as u32)
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.as_varint().map(|value| value as i32)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_varint().map(|value| value as i64)
    }

    pub fn as_sint32(&self) -> Option<i32> {
        self.as_varint()
            .map(|value| zigzag_decode(u64::from(value as u32)) as i32)
    }

    pub fn as_sint64(&self) -> Option<i64> {
        self.as_varint().map(zigzag_decode)
    }

    pub fn as_sfixed32(&self) -> Option<i32> {
        self.as_fixed32().map(|value| value as i32)
    }

    pub fn as_sfixed64(&self) -> Option<i64> {
        self.as_fixed64().map(|value| value as i64)
    }

    pub fn as_f32(&self) -> Option<f32> {
        self.as_fixed32().map(f32::from_bits)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_fixed64().map(f64::from_bits)
    }

    /// Interprets the payload as a packed repeated varint field. Returns `None`
    /// if the field is not length-delimited or the payload does not consist
    /// entirely of well-formed varints.
    pub fn packed_varints(&self) -> Option<Vec<u64>> {
        let mut buf = &self.as_bytes()?[..];
        let mut values = vec![];
        while !buf.is_empty() {
            let (value, len) = decode_varint(buf).ok()?;
            values.push(value);
            buf = &buf[len..];
        }
        Some(values)
    }

    pub fn packed_fixed32(&self) -> Option<Vec<u32>> {
        let raw = self.as_bytes()?;
        if raw.len() % 4 != 0 {
            return None;
        }
        let mut buf = &raw[..];
        (0..raw.len() / 4).map(|_| decode_fixed32(&mut buf)).collect()
    }

    pub fn packed_fixed64(&self) -> Option<Vec<u64>> {
        let raw = self.as_bytes()?;
        if raw.len() % 8 != 0 {
            return None;
        }
        let mut buf = &raw[..];
        (0..raw.len() / 8).map(|_| decode_fixed64(&mut buf)).collect()
    }
}
