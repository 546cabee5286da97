//! Renders derived-key bytes as a C-style hex array literal.

use std::io::{self, Write};

/// Writes each byte as `0xHH,` followed by a space, with a newline replacing
/// the space after every 8th byte. The last byte keeps its trailing
/// comma-and-separator; no header or footer is emitted.
pub fn write_hex_array(mut w: impl Write, bytes: &[u8]) -> io::Result<()> {
    for (i, b) in bytes.iter().enumerate() {
        write!(w, "0x{b:02x},")?;
        if (i + 1) % 8 == 0 {
            writeln!(w)?;
        } else {
            write!(w, " ")?;
        }
    }
    Ok(())
}

pub fn hex_array(bytes: &[u8]) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    write_hex_array(&mut buf, bytes).unwrap();
    String::from_utf8(buf).unwrap()
}
