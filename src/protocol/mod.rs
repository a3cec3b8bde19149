//! Protocol Layer: Fixed-Layout Binary Encoding
//!
//! Prinsip desain:
//! - Flat Binary: urutan field dan offset tetap, tanpa tag atau padding
//! - Big-Endian length: bit-exact lintas platform
//! - Pure Functions: encode/decode tanpa shared state, tanpa I/O

mod codec;
mod message;

pub use codec::{decode, encode, DecodeError, EncodeError};
pub use message::{
    CommandCode, ProtocolMessage, COMMAND_OFFSET, HEADER_SIZE, LENGTH_OFFSET, MAX_PAYLOAD_LEN,
    PAYLOAD_OFFSET,
};
