use super::{chunk::Chunk, FieldOrder};
use crate::{
    field::{Field, Value},
    message::Message,
    wire::{encode_fixed32, encode_fixed64, encode_varint, encoded_len_varint},
};
use prost::bytes::BufMut;

/// A message laid out as a list of chunks whose sizes are known up front, so
/// that embedded messages can be length-prefixed without encoding them twice.
pub struct MessageEncoder(Vec<Chunk>);

impl MessageEncoder {
    pub fn from_message(msg: &Message, order: FieldOrder) -> Self {
        let mut encoder = MessageEncoder::new();
        match order {
            FieldOrder::Insertion => {
                for field in msg.iter() {
                    encoder.load_field(field, order);
                }
            }
            FieldOrder::Deterministic => {
                let mut fields = msg.iter().collect::<Vec<_>>();
                // Stable, so repeated fields keep their relative order.
                fields.sort_by_key(|field| field.number);
                for field in fields {
                    encoder.load_field(field, order);
                }
            }
        }
        encoder
    }

    pub fn into_vec(self) -> Vec<u8> {
        let capacity = self.encoded_len();
        let mut buf = Vec::with_capacity(capacity);
        self.encode(&mut buf);
        debug_assert_eq!(capacity, buf.len());
        buf
    }

    fn new() -> Self {
        Self(vec![])
    }

    pub(super) fn encoded_len(&self) -> usize {
        self.0
            .iter()
            .map(|chunk| chunk.encoded_len())
            .sum::<usize>()
    }

    pub(super) fn encode(&self, buf: &mut impl BufMut) {
        for chunk in self.0.iter() {
            chunk.encode(buf);
        }
    }

    fn load_field(&mut self, field: &Field, order: FieldOrder) {
        let tag = field.tag();
        let chunk = match &field.value {
            Value::Varint(value) => Chunk::from_encoder(
                tag,
                value,
                |value| encoded_len_varint(*value),
                |value, buf| encode_varint(*value, buf),
            ),
            Value::Fixed64(value) => Chunk::from_encoder(
                tag,
                value,
                |_| 8,
                |value, buf| encode_fixed64(*value, buf),
            ),
            Value::Fixed32(value) => Chunk::from_encoder(
                tag,
                value,
                |_| 4,
                |value, buf| encode_fixed32(*value, buf),
            ),
            Value::LengthDelimited {
                message: Some(message),
                ..
            } => Chunk::from_message(field.number, MessageEncoder::from_message(message, order)),
            Value::LengthDelimited { raw, .. } => Chunk::from_encoder(
                tag,
                &raw[..],
                |raw| encoded_len_varint(raw.len() as u64) + raw.len(),
                |raw, buf| {
                    encode_varint(raw.len() as u64, buf);
                    buf.put_slice(raw);
                },
            ),
        };
        self.0.push(chunk);
    }
}
