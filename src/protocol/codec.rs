//! Encoder/Decoder: Pure Transforms
//!
//! Encode dan decode masing-masing single-pass, selalu terminate,
//! tanpa state di antara call. Decode yang gagal tidak mengembalikan
//! hasil parsial - error langsung ke caller, tanpa retry.

use thiserror::Error;

use super::message::{
    CommandCode, ProtocolMessage, COMMAND_OFFSET, HEADER_SIZE, LENGTH_OFFSET, MAX_PAYLOAD_LEN,
    PAYLOAD_OFFSET,
};

/// Kegagalan encode - satu-satunya kondisi error
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Payload melebihi range length field 4 byte (2^32 - 1)
    #[error("payload of {len} bytes exceeds the 4-byte length field range")]
    PayloadTooLarge { len: usize },
}

/// Kegagalan decode - input malformed bersifat permanen
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Buffer lebih pendek dari header 5 byte
    #[error("buffer of {len} bytes is shorter than the 5-byte header")]
    TruncatedHeader { len: usize },
    /// Buffer lebih pendek dari payload yang dideklarasikan header
    #[error("payload truncated: header declares {declared} bytes, buffer holds {available}")]
    TruncatedPayload { declared: usize, available: usize },
    /// Byte payload bukan UTF-8 well-formed
    #[error("payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encode pesan ke buffer baru berukuran tepat `5 + n` byte.
///
/// Command code tidak divalidasi: nilai unrecognized tetap encodable.
/// Input tidak dimodifikasi.
#[inline(always)]
pub fn encode(msg: &ProtocolMessage) -> Result<Vec<u8>, EncodeError> {
    let payload = msg.payload.as_bytes();
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(EncodeError::PayloadTooLarge { len: payload.len() });
    }

    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    buf.push(msg.command.as_u8());
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buf.extend_from_slice(payload);

    Ok(buf)
}

/// Decode tepat satu pesan dari awal buffer.
///
/// Byte setelah `5 + payloadLength` diabaikan - framing multi-pesan
/// adalah urusan caller, bukan codec.
#[inline(always)]
pub fn decode(buf: &[u8]) -> Result<ProtocolMessage, DecodeError> {
    if buf.len() < HEADER_SIZE {
        return Err(DecodeError::TruncatedHeader { len: buf.len() });
    }

    // Raw pass-through: command unrecognized tidak ditolak
    let command = CommandCode::from_u8(buf[COMMAND_OFFSET]);

    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&buf[LENGTH_OFFSET..PAYLOAD_OFFSET]);
    let declared = u32::from_be_bytes(len_bytes) as usize;

    let available = buf.len() - HEADER_SIZE;
    if available < declared {
        return Err(DecodeError::TruncatedPayload {
            declared,
            available,
        });
    }

    let payload = String::from_utf8(buf[PAYLOAD_OFFSET..PAYLOAD_OFFSET + declared].to_vec())?;

    Ok(ProtocolMessage { command, payload })
}
