use super::{DecodeError, DecodeResult, Decoder};
use crate::{
    field::{Field, Value},
    message::Message,
    wire::{decode_fixed32, decode_fixed64, decode_tag, decode_varint, WireType},
};
use log::{debug, trace};
use prost::bytes::{Buf, Bytes};

/// Walks one buffer left to right, collecting its fields.
pub(super) struct MessageParser<'d> {
    decoder: &'d Decoder,
    buf: Bytes,
    /// Absolute offset of `buf` within the top-level input.
    base: usize,
    len: usize,
    depth: usize,
    fields: Vec<Field>,
}

impl<'d> MessageParser<'d> {
    pub fn new(decoder: &'d Decoder, buf: Bytes, base: usize, depth: usize) -> Self {
        Self {
            decoder,
            len: buf.len(),
            buf,
            base,
            depth,
            fields: vec![],
        }
    }

    pub fn parse(mut self) -> DecodeResult<Message> {
        while self.buf.has_remaining() {
            self.parse_next_field()?;
        }
        Ok(Message::from(self.fields))
    }

    fn offset(&self) -> usize {
        self.base + self.len - self.buf.remaining()
    }

    fn parse_next_field(&mut self) -> DecodeResult<()> {
        if self.decoder.skip_zero_padding && self.buf[0] == 0 {
            self.buf.advance(1);
            return Ok(());
        }

        let tag_offset = self.offset();
        let (tag, len) =
            decode_tag(self.buf.chunk()).map_err(|err| DecodeError::from_tag(err, tag_offset))?;
        self.buf.advance(len);

        let field = tag.field_number;
        let value = match tag.wire_type {
            WireType::Varint => Value::Varint(self.parse_varint(field)?),
            WireType::SixtyFourBit => {
                let truncated = self.truncated_fixed(field, 8);
                Value::Fixed64(decode_fixed64(&mut self.buf).ok_or(truncated)?)
            }
            WireType::ThirtyTwoBit => {
                let truncated = self.truncated_fixed(field, 4);
                Value::Fixed32(decode_fixed32(&mut self.buf).ok_or(truncated)?)
            }
            WireType::LengthDelimited => self.parse_length_delimited(field)?,
            WireType::StartGroup | WireType::EndGroup => {
                return Err(DecodeError::UnsupportedWireType {
                    offset: tag_offset,
                    field,
                    wire_type: tag.wire_type as u8,
                })
            }
        };

        self.fields.push(Field::new(field, value));
        Ok(())
    }

    fn parse_varint(&mut self, field: u32) -> DecodeResult<u64> {
        let offset = self.offset();
        let (value, len) = decode_varint(self.buf.chunk())
            .map_err(|err| DecodeError::from_varint(err, field, offset))?;
        self.buf.advance(len);
        Ok(value)
    }

    fn truncated_fixed(&self, field: u32, width: usize) -> DecodeError {
        DecodeError::TruncatedFixed {
            offset: self.offset(),
            field,
            width,
            remaining: self.buf.remaining(),
        }
    }

    fn parse_length_delimited(&mut self, field: u32) -> DecodeResult<Value> {
        let offset = self.offset();
        let length = self.parse_varint(field)?;
        let remaining = self.buf.remaining();
        if length > remaining as u64 {
            return Err(DecodeError::LengthOutOfBounds {
                offset,
                field,
                length,
                remaining,
            });
        }

        let start = self.offset();
        let raw = self.buf.split_to(length as usize);
        let message = self.probe(raw.clone(), start);
        Ok(Value::LengthDelimited { raw, message })
    }

    /// Errors from the probe only mean the payload is not a message; they never
    /// fail the enclosing decode.
    fn probe(&self, payload: Bytes, offset: usize) -> Option<Message> {
        if !self.decoder.probe_messages {
            return None;
        }
        let depth = self.depth + 1;
        if depth > self.decoder.max_depth {
            debug!("not probing payload at offset {offset}: nesting depth {depth} exceeds limit");
            return None;
        }
        match self.decoder.probe_at(payload, offset, depth) {
            Ok(message) => Some(message),
            Err(err) => {
                trace!("payload at offset {offset} is not a message: {err}");
                None
            }
        }
    }
}
