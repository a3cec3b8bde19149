//! Iris - Compact Binary Message Codec
//!
//! Sepasang pure transform di atas satu wire layout tetap:
//! - Encoder: `ProtocolMessage` -> byte buffer
//! - Decoder: byte buffer -> `ProtocolMessage` (atau decode error)
//!
//! Prinsip desain:
//! - Fixed Layout: header 5 byte, offset field konstan
//! - Big-Endian: length field selalu network byte order
//! - Stateless: tidak ada state di antara call, aman dipanggil paralel

pub mod protocol;

pub use protocol::{
    decode, encode, CommandCode, DecodeError, EncodeError, ProtocolMessage, HEADER_SIZE,
};
