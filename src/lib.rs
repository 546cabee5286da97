//! scrypt test-vector generation.
//!
//! Derives a key with scrypt and renders it as a C-style hex array literal,
//! eight bytes per line, ready to paste into test sources.

mod format;
mod kdf;

pub use crate::format::{hex_array, write_hex_array};
pub use crate::kdf::{ScryptParams, derive_key};

use anyhow::Result;

/// Derives `dklen` bytes and formats them as a hex array literal.
pub fn generate(password: &[u8], salt: &[u8], params: ScryptParams, dklen: usize) -> Result<String> {
    let dk = derive_key(password, salt, params, dklen)?;
    Ok(hex_array(&dk))
}
