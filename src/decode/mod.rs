mod error;
mod parser;

use self::parser::MessageParser;
pub use self::error::{DecodeError, DecodeResult};
use crate::message::Message;
use prost::bytes::Bytes;

/// Nesting limit for embedded-message detection, matching prost's recursion
/// limit.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Schema-less decoder settings.
///
/// Every length-delimited payload is probed as a possible embedded message. A
/// payload counts as a message when the whole of it decodes without error and
/// yields at least one field; anything else, including empty payloads, stays
/// opaque bytes. There is no separate rule for short payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    max_depth: usize,
    skip_zero_padding: bool,
    probe_messages: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            skip_zero_padding: true,
            probe_messages: true,
        }
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads nested deeper than `max_depth` are not probed and stay opaque
    /// bytes. A depth of 0 disables probing altogether.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Some encoders pad messages with zero bytes. With this enabled (the
    /// default) a single `0x00` where a tag is expected is skipped. Canonical
    /// protobuf has no such rule; with it disabled the byte is rejected as
    /// field number 0.
    pub fn with_zero_padding(mut self, skip: bool) -> Self {
        self.skip_zero_padding = skip;
        self
    }

    pub fn with_message_probing(mut self, probe: bool) -> Self {
        self.probe_messages = probe;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn skips_zero_padding(&self) -> bool {
        self.skip_zero_padding
    }

    pub fn probes_messages(&self) -> bool {
        self.probe_messages
    }

    /// Decodes a complete buffer. The buffer is copied once; payloads of the
    /// returned message share that copy.
    pub fn decode(&self, buf: &[u8]) -> DecodeResult<Message> {
        self.decode_bytes(Bytes::copy_from_slice(buf))
    }

    /// Decodes a complete buffer without copying it. An empty buffer is a valid,
    /// empty message.
    pub fn decode_bytes(&self, buf: Bytes) -> DecodeResult<Message> {
        MessageParser::new(self, buf, 0, 0).parse()
    }

    /// Decodes `buf` as a candidate embedded message. Unlike
    /// [`decode_bytes`](Self::decode_bytes) this fails with
    /// [`DecodeError::EmptyInput`] unless at least one field is found.
    pub fn probe(&self, buf: Bytes) -> DecodeResult<Message> {
        self.probe_at(buf, 0, 0)
    }

    fn probe_at(&self, buf: Bytes, offset: usize, depth: usize) -> DecodeResult<Message> {
        if buf.is_empty() {
            return Err(DecodeError::EmptyInput { offset });
        }
        let message = MessageParser::new(self, buf, offset, depth).parse()?;
        if message.is_empty() {
            return Err(DecodeError::EmptyInput { offset });
        }
        Ok(message)
    }
}
