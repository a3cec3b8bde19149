//! Wire Message Format
//!
//! Layout:
//! ┌─────────────────────────────────────────────────────┐
//! │ commandCode (1 byte)                                │
//! ├─────────────────────────────────────────────────────┤
//! │ payloadLength (4 bytes, u32 big-endian)             │
//! ├─────────────────────────────────────────────────────┤
//! │ payload (payloadLength bytes, UTF-8)                │
//! └─────────────────────────────────────────────────────┘
//!
//! payloadLength adalah panjang BYTE hasil encoding UTF-8,
//! bukan jumlah karakter. Untuk payload multi-byte keduanya berbeda.

use std::fmt;

/// Header tetap: 1 byte command + 4 byte length
pub const HEADER_SIZE: usize = 5;
/// Offset command code dalam buffer
pub const COMMAND_OFFSET: usize = 0;
/// Offset length field (big-endian u32)
pub const LENGTH_OFFSET: usize = 1;
/// Offset byte pertama payload
pub const PAYLOAD_OFFSET: usize = 5;
/// Payload maksimum yang muat di length field 4 byte
pub const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;

/// Tag jenis pesan, backed by raw u8.
///
/// Bukan closed enum: nilai di luar konstanta bernama tetap valid secara
/// struktural dan harus round-trip bit-exact. Layer ini tidak memvalidasi
/// semantik, hanya struktur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandCode(pub u8);

impl CommandCode {
    /// Kirim pesan dari producer
    pub const SEND_MESSAGE: Self = Self(0x01);
    /// Acknowledgment
    pub const ACKNOWLEDGE: Self = Self(0x02);
    /// Error report
    pub const ERROR: Self = Self(0xFF);

    #[inline(always)]
    pub const fn from_u8(v: u8) -> Self {
        Self(v)
    }

    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// True hanya untuk tiga command code bernama
    #[inline(always)]
    pub const fn is_recognized(self) -> bool {
        matches!(self.0, 0x01 | 0x02 | 0xFF)
    }
}

impl From<u8> for CommandCode {
    #[inline(always)]
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SEND_MESSAGE => write!(f, "SendMessage"),
            Self::ACKNOWLEDGE => write!(f, "Acknowledge"),
            Self::ERROR => write!(f, "Error"),
            Self(other) => write!(f, "Unknown(0x{other:02X})"),
        }
    }
}

/// Pesan lengkap: command code + payload teks.
///
/// Owned value - hasil decode tidak meng-alias buffer sumber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolMessage {
    pub command: CommandCode,
    pub payload: String,
}

impl ProtocolMessage {
    pub fn new(command: CommandCode, payload: impl Into<String>) -> Self {
        Self {
            command,
            payload: payload.into(),
        }
    }

    /// Total ukuran buffer hasil encode (header + payload bytes)
    #[inline(always)]
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}
