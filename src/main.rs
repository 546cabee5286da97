use anyhow::{Context, Result};
use clap::Parser;
use scryptvec::{ScryptParams, derive_key, write_hex_array};
use std::io::{self, Write};

/// Parses an integer literal in decimal or with a 0x/0o/0b base prefix.
fn parse_int(s: &str) -> Result<u64, String> {
    let (digits, radix) = match s.get(..2) {
        Some("0x") | Some("0X") => (&s[2..], 16),
        Some("0o") | Some("0O") => (&s[2..], 8),
        Some("0b") | Some("0B") => (&s[2..], 2),
        _ => (s, 10),
    };
    u64::from_str_radix(digits, radix).map_err(|e| format!("invalid integer '{s}': {e}"))
}

#[derive(Debug, Parser)]
#[command(name = "scryptvec")]
#[command(
    version,
    about = "Generates scrypt key-derivation test vectors as C-style hex array literals."
)]
struct Cli {
    /// Password, used verbatim
    #[arg(long)]
    passwd: String,

    /// Salt, used verbatim
    #[arg(long)]
    salt: String,

    /// CPU/memory cost parameter; a power of two greater than 1
    #[arg(long = "N", value_parser = parse_int)]
    n: u64,

    /// Block size factor
    #[arg(long, value_parser = parse_int)]
    r: u64,

    /// Parallelization factor
    #[arg(long, value_parser = parse_int)]
    p: u64,

    /// Derived key length in bytes
    #[arg(long, value_parser = parse_int)]
    dklen: u64,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let r = u32::try_from(args.r).context("r out of range")?;
    let p = u32::try_from(args.p).context("p out of range")?;
    let dklen = usize::try_from(args.dklen).context("dklen out of range")?;
    let params = ScryptParams::new(args.n, r, p)?;

    let dk = derive_key(args.passwd.as_bytes(), args.salt.as_bytes(), params, dklen)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_hex_array(&mut out, &dk)?;
    out.flush()?;

    Ok(())
}
