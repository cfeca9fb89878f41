use super::message::MessageEncoder;
use crate::wire::{encode_tag, encode_varint, encoded_len_varint, encoded_tag_len, Tag, WireType};
use prost::bytes::BufMut;

pub struct Chunk(ChunkVariant);

enum ChunkVariant {
    PreEncoded(Box<[u8]>),
    /// Field number, encoded length of the message, and the message.
    MessageField(u32, usize, Box<MessageEncoder>),
}

impl Chunk {
    /// Writes the tag and the value eagerly; `len_fn` gives the value's size so
    /// the buffer is allocated once.
    pub fn from_encoder<T: ?Sized>(
        tag: Tag,
        value: &T,
        len_fn: impl FnOnce(&T) -> usize,
        encoder: impl FnOnce(&T, &mut Vec<u8>),
    ) -> Self {
        let capacity = encoded_tag_len(tag) + len_fn(value);
        let mut buf = Vec::with_capacity(capacity);
        encode_tag(tag, &mut buf);
        encoder(value, &mut buf);
        debug_assert_eq!(capacity, buf.len());
        Self(ChunkVariant::PreEncoded(buf.into_boxed_slice()))
    }

    pub fn from_message(number: u32, encoder: MessageEncoder) -> Self {
        let msg_len = encoder.encoded_len();
        Self(ChunkVariant::MessageField(number, msg_len, Box::new(encoder)))
    }

    pub fn encoded_len(&self) -> usize {
        match &self.0 {
            ChunkVariant::PreEncoded(bytes) => bytes.len(),
            ChunkVariant::MessageField(number, msg_len, _) => {
                let meta_size = encoded_tag_len(message_tag(*number))
                    + encoded_len_varint(*msg_len as u64);
                msg_len + meta_size
            }
        }
    }

    pub fn encode(&self, buf: &mut impl BufMut) {
        match &self.0 {
            ChunkVariant::PreEncoded(bytes) => buf.put_slice(bytes),
            ChunkVariant::MessageField(number, msg_len, msg) => {
                encode_tag(message_tag(*number), buf);
                encode_varint(*msg_len as u64, buf);
                msg.encode(buf);
            }
        }
    }
}

fn message_tag(number: u32) -> Tag {
    Tag::new(number, WireType::LengthDelimited)
}
