use hex_literal::hex;
use schemaless_proto::{
    decode, encode,
    wire::{encode_varint, VarintError},
    Bytes, DecodeError, Decoder, Field, Message, Value,
};

#[test]
fn test_flat_message() {
    let msg = decode(&hex!("08 96 01 12 07 74 65 73 74 69 6e 67")).unwrap();
    assert_eq!(msg.len(), 2);

    let first = &msg.fields()[0];
    assert_eq!(first.number, 1);
    assert_eq!(first.as_varint(), Some(150));

    let second = &msg.fields()[1];
    assert_eq!(second.number, 2);
    assert_eq!(second.as_str(), Some("testing"));
    assert_eq!(second.as_message(), None);
}

#[test]
fn test_nested_message() {
    let msg = decode(&hex!("0a 07 12 05 68 65 6c 6c 6f")).unwrap();
    assert_eq!(msg.len(), 1);

    let field = msg.first(1).unwrap();
    assert_eq!(
        field.as_bytes().map(|raw| &raw[..]),
        Some(&hex!("12 05 68 65 6c 6c 6f")[..])
    );
    let inner = field.as_message().unwrap();
    assert_eq!(inner.fields(), [Field::string(2, "hello")]);
}

#[test]
fn test_repeated_fields_keep_order() {
    let msg = decode(&hex!("20 63 12 00 20 64")).unwrap();
    let values: Vec<_> = msg.repeated(4).filter_map(Field::as_varint).collect();
    assert_eq!(values, [99, 100]);
    assert_eq!(msg.first(4).and_then(Field::as_varint), Some(99));
}

#[test]
fn test_fixed_width_fields() {
    let msg = decode(&hex!("0d 00 00 c0 3f 11 00 00 00 00 00 00 02 c0")).unwrap();
    assert_eq!(msg.get_fixed32(1), Some(1.5f32.to_bits()));
    assert_eq!(msg.first(1).and_then(Field::as_f32), Some(1.5));
    assert_eq!(msg.first(2).and_then(Field::as_f64), Some(-2.25));
}

#[test]
fn test_empty_input() {
    assert_eq!(decode(&[]), Ok(Message::new()));
    assert_eq!(
        Decoder::new().probe(Bytes::new()),
        Err(DecodeError::EmptyInput { offset: 0 })
    );
    assert_eq!(
        Decoder::new().probe(Bytes::from_static(&[0x00, 0x00])),
        Err(DecodeError::EmptyInput { offset: 0 })
    );
    assert_eq!(
        Decoder::new().probe(Bytes::from_static(&[0x08, 0x01])),
        Ok(Message::new().with_varint(1, 1))
    );
}

#[test]
fn test_short_payloads_are_opaque() {
    let msg = decode(&hex!("0a 00 12 01 08 1a 01 00")).unwrap();
    assert_eq!(msg.len(), 3);
    for field in msg.iter() {
        assert!(field.as_bytes().is_some());
        assert_eq!(field.as_message(), None);
    }
}

#[test]
fn test_payload_that_happens_to_parse_is_a_message() {
    let msg = decode(&hex!("0a 02 08 01")).unwrap();
    assert_eq!(msg.get_message(1), Some(&Message::new().with_varint(1, 1)));

    let msg = Decoder::new()
        .with_message_probing(false)
        .decode(&hex!("0a 02 08 01"))
        .unwrap();
    assert_eq!(msg.fields(), [Field::bytes(1, vec![0x08, 0x01])]);
}

#[test]
fn test_zero_padding() {
    let msg = decode(&hex!("00 08 01 00 00 10 02 00")).unwrap();
    assert_eq!(msg, Message::new().with_varint(1, 1).with_varint(2, 2));

    let strict = Decoder::new().with_zero_padding(false);
    assert_eq!(
        strict.decode(&hex!("08 01 00")),
        Err(DecodeError::InvalidFieldNumber {
            offset: 2,
            number: 0
        })
    );
}

#[test]
fn test_length_out_of_bounds() {
    assert_eq!(
        decode(&hex!("0a 07 01 02 03")),
        Err(DecodeError::LengthOutOfBounds {
            offset: 1,
            field: 1,
            length: 7,
            remaining: 3,
        })
    );
}

#[test]
fn test_malformed_tag() {
    let mut buf = vec![0xff; 10];
    buf.push(0x01);
    assert_eq!(
        decode(&buf),
        Err(DecodeError::MalformedTag {
            offset: 0,
            source: VarintError::Overflow
        })
    );

    assert_eq!(
        decode(&hex!("08 01 80")),
        Err(DecodeError::MalformedTag {
            offset: 2,
            source: VarintError::Truncated
        })
    );
}

#[test]
fn test_truncated_values() {
    assert_eq!(
        decode(&hex!("08 96")),
        Err(DecodeError::TruncatedVarint {
            offset: 1,
            field: 1
        })
    );
    assert_eq!(
        decode(&hex!("08 ff ff ff ff ff ff ff ff ff 02")),
        Err(DecodeError::VarintOverflow {
            offset: 1,
            field: 1
        })
    );
    assert_eq!(
        decode(&hex!("10 01 0d 01 02")),
        Err(DecodeError::TruncatedFixed {
            offset: 3,
            field: 1,
            width: 4,
            remaining: 2,
        })
    );
    assert_eq!(
        decode(&hex!("19 01 02 03 04 05 06 07")),
        Err(DecodeError::TruncatedFixed {
            offset: 1,
            field: 3,
            width: 8,
            remaining: 7,
        })
    );
}

#[test]
fn test_groups_are_rejected() {
    assert_eq!(
        decode(&hex!("08 01 1b 08 01 1c")),
        Err(DecodeError::UnsupportedWireType {
            offset: 2,
            field: 3,
            wire_type: 3,
        })
    );
    assert_eq!(
        decode(&hex!("0e")),
        Err(DecodeError::UnsupportedWireType {
            offset: 0,
            field: 1,
            wire_type: 6,
        })
    );
}

#[test]
fn test_errors_inside_payloads_are_not_fatal() {
    let msg = decode(&hex!("0a 02 08 96 10 01")).unwrap();
    assert_eq!(msg.len(), 2);
    assert_eq!(msg.get_message(1), None);
    assert_eq!(msg.get_bytes(1).map(|raw| &raw[..]), Some(&hex!("08 96")[..]));
    assert_eq!(msg.get_varint(2), Some(1));
}

#[test]
fn test_error_display() {
    let err = decode(&hex!("0a 07 01 02 03")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "field 1 out of bounds: length 7 at offset 1, 3 bytes remaining"
    );
    assert_eq!(err.offset(), 1);
}

fn nested(levels: usize) -> Message {
    let mut msg = Message::new().with_varint(2, 7);
    for _ in 0..levels {
        msg = Message::new().with_message(1, msg);
    }
    msg
}

#[test]
fn test_max_depth() {
    let buf = encode(&nested(5)).unwrap();

    let msg = Decoder::new().with_max_depth(2).decode(&buf).unwrap();
    assert!(msg.message_at(&[1, 1]).is_some());
    assert!(msg.message_at(&[1, 1, 1]).is_none());
    let opaque = msg.path(&[1, 1, 1]).unwrap();
    assert!(opaque.as_bytes().is_some());
    assert_eq!(encode(&msg).unwrap(), buf);

    let flat = Decoder::new().with_max_depth(0).decode(&buf).unwrap();
    assert!(flat.get_message(1).is_none());

    let full = decode(&buf).unwrap();
    assert_eq!(full, nested(5));
    assert_eq!(full.path(&[1, 1, 1, 1, 1, 2]).and_then(Field::as_varint), Some(7));
}

#[test]
fn test_deep_nesting_is_bounded() {
    let mut buf = vec![0x10, 0x07];
    for _ in 0..5000 {
        let mut outer = vec![0x0a];
        encode_varint(buf.len() as u64, &mut outer);
        outer.extend_from_slice(&buf);
        buf = outer;
    }

    let msg = decode(&buf).unwrap();
    let mut path = vec![1u32; schemaless_proto::DEFAULT_MAX_DEPTH];
    assert!(msg.message_at(&path).is_some());
    path.push(1);
    let beyond = msg.path(&path).unwrap();
    assert!(matches!(
        beyond.value,
        Value::LengthDelimited { message: None, .. }
    ));
}
