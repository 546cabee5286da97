use anyhow::{Context, Result};
use zeroize::Zeroizing;

/// scrypt cost parameters: CPU/memory cost N, block size factor r,
/// parallelization factor p.
#[derive(Debug, Clone, Copy)]
pub struct ScryptParams {
    n: u64,
    r: u32,
    p: u32,
}

impl ScryptParams {
    pub fn new(n: u64, r: u32, p: u32) -> Result<Self> {
        let params = Self { n, r, p };
        params.validate()?;
        Ok(params)
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn r(&self) -> u32 {
        self.r
    }

    pub fn p(&self) -> u32 {
        self.p
    }

    /// log2(N); the scrypt crate takes the exponent rather than N itself.
    pub fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }

    pub fn validate(&self) -> Result<()> {
        if self.n < 2 || !self.n.is_power_of_two() {
            anyhow::bail!("N must be a power of two greater than 1");
        }
        if self.r < 1 {
            anyhow::bail!("r must be >= 1");
        }
        if self.p < 1 {
            anyhow::bail!("p must be >= 1");
        }
        if (self.r as u64) * (self.p as u64) >= 1 << 30 {
            anyhow::bail!("r * p must be less than 2^30");
        }
        Ok(())
    }
}

/// Derives `dklen` bytes from `password` and `salt` with the given scrypt
/// parameters. A zero `dklen` yields an empty key without invoking scrypt.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    params: ScryptParams,
    dklen: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    params.validate().context("invalid scrypt parameters")?;

    let mut dk = Zeroizing::new(vec![0u8; dklen]);
    if dklen == 0 {
        return Ok(dk);
    }

    // The trailing length argument only matters for PHC-string hashing, not
    // for raw derivation; the output slice length decides dklen here.
    let scrypt_params = scrypt::Params::new(
        params.log_n(),
        params.r(),
        params.p(),
        scrypt::Params::RECOMMENDED_LEN,
    )
    .map_err(|e| anyhow::anyhow!("failed to construct scrypt params: {e}"))?;

    scrypt::scrypt(password, salt, &scrypt_params, dk.as_mut_slice())
        .map_err(|e| anyhow::anyhow!("scrypt key derivation failed: {e}"))?;

    Ok(dk)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 7914, section 12, first vector.
    const RFC7914_EMPTY: [u8; 64] = [
        0x77, 0xd6, 0x57, 0x62, 0x38, 0x65, 0x7b, 0x20, 0x3b, 0x19, 0xca, 0x42, 0xc1, 0x8a, 0x04,
        0x97, 0xf1, 0x6b, 0x48, 0x44, 0xe3, 0x07, 0x4a, 0xe8, 0xdf, 0xdf, 0xfa, 0x3f, 0xed, 0xe2,
        0x14, 0x42, 0xfc, 0xd0, 0x06, 0x9d, 0xed, 0x09, 0x48, 0xf8, 0x32, 0x6a, 0x75, 0x3a, 0x0f,
        0xc8, 0x1f, 0x17, 0xe8, 0xd3, 0xe0, 0xfb, 0x2e, 0x0d, 0x36, 0x28, 0xcf, 0x35, 0xe2, 0x0c,
        0x38, 0xd1, 0x89, 0x06,
    ];

    #[test]
    fn derive_matches_rfc7914_vector_1() {
        let params = ScryptParams::new(16, 1, 1).unwrap();
        let dk = derive_key(b"", b"", params, 64).unwrap();
        assert_eq!(dk.as_slice(), &RFC7914_EMPTY);
    }

    #[test]
    fn derive_is_deterministic() {
        let params = ScryptParams::new(16, 1, 1).unwrap();
        let k1 = derive_key(b"password", b"NaCl", params, 32).unwrap();
        let k2 = derive_key(b"password", b"NaCl", params, 32).unwrap();
        assert_eq!(k1.as_slice(), k2.as_slice());
    }

    #[test]
    fn derive_returns_exactly_dklen_bytes() {
        let params = ScryptParams::new(16, 1, 1).unwrap();
        for dklen in [1usize, 7, 8, 33, 100] {
            let dk = derive_key(b"pw", b"salt", params, dklen).unwrap();
            assert_eq!(dk.len(), dklen);
        }
    }

    #[test]
    fn zero_dklen_yields_empty_key() {
        let params = ScryptParams::new(16, 1, 1).unwrap();
        let dk = derive_key(b"pw", b"salt", params, 0).unwrap();
        assert!(dk.is_empty());
    }

    #[test]
    fn non_power_of_two_n_is_rejected() {
        assert!(ScryptParams::new(3, 1, 1).is_err());
        assert!(ScryptParams::new(0, 1, 1).is_err());
        assert!(ScryptParams::new(1, 1, 1).is_err());
    }

    #[test]
    fn zero_r_or_p_is_rejected() {
        assert!(ScryptParams::new(16, 0, 1).is_err());
        assert!(ScryptParams::new(16, 1, 0).is_err());
    }

    #[test]
    fn oversized_r_times_p_is_rejected() {
        assert!(ScryptParams::new(16, 1 << 15, 1 << 15).is_err());
        assert!(ScryptParams::new(16, (1 << 15) - 1, 1 << 15).is_ok());
    }
}
