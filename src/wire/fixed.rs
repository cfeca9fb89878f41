use prost::bytes::{Buf, BufMut};

/// Reads a little-endian `u32` from the front of `buf`, or `None` if fewer
/// than four bytes remain. `buf` is left untouched on failure.
pub fn decode_fixed32(buf: &mut impl Buf) -> Option<u32> {
    if buf.remaining() < 4 {
        return None;
    }
    Some(buf.get_u32_le())
}

pub fn decode_fixed64(buf: &mut impl Buf) -> Option<u64> {
    if buf.remaining() < 8 {
        return None;
    }
    Some(buf.get_u64_le())
}

pub fn encode_fixed32(value: u32, buf: &mut impl BufMut) {
    buf.put_u32_le(value);
}

pub fn encode_fixed64(value: u64, buf: &mut impl BufMut) {
    buf.put_u64_le(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed32() {
        let mut buf: &[u8] = &[0x01, 0x02, 0x03, 0x04, 0xff];
        assert_eq!(decode_fixed32(&mut buf), Some(0x0403_0201));
        assert_eq!(buf, [0xff]);

        let mut short: &[u8] = &[0x01, 0x02, 0x03];
        assert_eq!(decode_fixed32(&mut short), None);
        assert_eq!(short.len(), 3);

        let mut out = vec![];
        encode_fixed32(1.5f32.to_bits(), &mut out);
        assert_eq!(out, [0x00, 0x00, 0xc0, 0x3f]);
    }

    #[test]
    fn test_fixed64() {
        let mut out = vec![];
        encode_fixed64(0x0102_0304_0506_0708, &mut out);
        assert_eq!(out, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(decode_fixed64(&mut &out[..]), Some(0x0102_0304_0506_0708));
        assert_eq!(decode_fixed64(&mut &out[..7]), None);
    }
}
