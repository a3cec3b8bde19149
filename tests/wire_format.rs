//! Wire Format Contract Test
//!
//! Memverifikasi kontrak eksternal codec terhadap byte layout literal,
//! bukan lewat round-trip saja. Layout adalah satu-satunya interface
//! yang observable dari luar:
//!
//!   byte 0       : commandCode    (u8)
//!   bytes 1..=4  : payloadLength  (u32, big-endian)
//!   bytes 5..    : payload        (UTF-8)
//!
//! Run dengan: cargo test --test wire_format

use iris::{decode, encode, CommandCode, DecodeError, ProtocolMessage, HEADER_SIZE};

#[test]
fn encoded_layout_is_bit_exact() {
    let msg = ProtocolMessage::new(CommandCode::SEND_MESSAGE, "Hi");
    let buf = encode(&msg).unwrap();

    assert_eq!(buf, vec![0x01, 0x00, 0x00, 0x00, 0x02, b'H', b'i']);
}

#[test]
fn header_size_is_five_bytes() {
    assert_eq!(HEADER_SIZE, 5);

    let empty = ProtocolMessage::new(CommandCode::ERROR, "");
    assert_eq!(encode(&empty).unwrap().len(), 5);
}

#[test]
fn decodes_buffer_produced_by_foreign_encoder() {
    // Buffer disusun manual, seolah datang dari implementasi lain
    let mut buf = Vec::new();
    buf.push(0x02);
    buf.extend_from_slice(&6u32.to_be_bytes());
    buf.extend_from_slice("éàç".as_bytes());

    let msg = decode(&buf).unwrap();
    assert_eq!(msg.command, CommandCode::ACKNOWLEDGE);
    assert_eq!(msg.payload, "éàç");
}

#[test]
fn every_recognized_command_roundtrips() {
    for cmd in [
        CommandCode::SEND_MESSAGE,
        CommandCode::ACKNOWLEDGE,
        CommandCode::ERROR,
    ] {
        let msg = ProtocolMessage::new(cmd, "payload");
        let decoded = decode(&encode(&msg).unwrap()).unwrap();
        assert_eq!(decoded, msg);
    }
}

#[test]
fn all_command_bytes_are_structurally_legal() {
    for byte in 0u8..=255 {
        let msg = ProtocolMessage::new(CommandCode::from_u8(byte), "x");
        let decoded = decode(&encode(&msg).unwrap()).unwrap();
        assert_eq!(decoded.command.as_u8(), byte);
    }
}

#[test]
fn empty_buffer_is_truncated_header() {
    assert!(matches!(
        decode(&[]).unwrap_err(),
        DecodeError::TruncatedHeader { len: 0 }
    ));
}

#[test]
fn exact_header_with_zero_length_decodes() {
    let msg = decode(&[0xFF, 0, 0, 0, 0]).unwrap();
    assert_eq!(msg.command, CommandCode::ERROR);
    assert_eq!(msg.payload, "");
}

#[test]
fn encoded_len_matches_buffer_length() {
    for payload in ["", "a", "héllo", "日本語テキスト", "🚀🚀🚀"] {
        let msg = ProtocolMessage::new(CommandCode::SEND_MESSAGE, payload);
        assert_eq!(encode(&msg).unwrap().len(), msg.encoded_len());
    }
}
