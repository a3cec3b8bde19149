//! Demo driver: encode dua pesan contoh, tampilkan byte-nya, decode kembali.
//!
//! Driver ini adalah caller eksternal codec - bukan bagian dari codec.
//!
//! Run dengan: cargo run --example roundtrip

use iris::{decode, encode, CommandCode, ProtocolMessage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Iris Binary Message Codec - Demo");
    println!("====================================\n");

    let samples = [
        ProtocolMessage::new(CommandCode::SEND_MESSAGE, "Hello, wire!"),
        ProtocolMessage::new(CommandCode::ACKNOWLEDGE, "reçu: éàç"),
    ];

    for msg in &samples {
        let buf = encode(msg)?;

        println!("📤 Encode: command={} payload={:?}", msg.command, msg.payload);
        println!("   {} bytes: {}", buf.len(), hex(&buf));

        let decoded = decode(&buf)?;
        println!(
            "📥 Decode: command={} payload={:?} (round-trip ok: {})\n",
            decoded.command,
            decoded.payload,
            decoded == *msg
        );
    }

    println!("✅ Demo complete!");
    Ok(())
}

fn hex(buf: &[u8]) -> String {
    buf.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
