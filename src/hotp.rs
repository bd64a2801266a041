use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::{OtpCode, OtpError, DIGITS};

type HmacSha1 = Hmac<Sha1>;

/// Counter-based code derivation: HMAC-SHA1 over the big-endian counter,
/// dynamically truncated to a 6-digit decimal code.
#[derive(Clone)]
pub struct Hotp {
    key: Vec<u8>,
}

impl Hotp {
    /// Creates the engine over the raw secret bytes.
    ///
    /// The key may have any length; this system provisions 32-byte keys,
    /// while the published reference vectors use a 20-byte one.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// Generates the code for the provided counter.
    ///
    /// Pure: identical `(key, counter)` inputs always yield the identical
    /// code, and no state is retained between calls.
    pub fn generate(&self, counter: u64) -> Result<OtpCode, OtpError> {
        let digest = self.calc_digest(counter);
        let code = encode_digest_truncated(&digest, DIGITS)?;

        Ok(OtpCode::new(code))
    }

    /// Calculates the HMAC-SHA1 digest of the 8-byte big-endian counter.
    ///
    /// # Panics
    /// If the HMAC context cannot be constructed
    fn calc_digest(&self, counter: u64) -> Vec<u8> {
        let mut mac =
            HmacSha1::new_from_slice(&self.key).expect("HMAC-SHA1 takes keys of any length");
        mac.update(&counter.to_be_bytes());

        mac.finalize().into_bytes().to_vec()
    }
}

/// Encodes the HMAC digest into a truncated integer.
fn encode_digest_truncated(digest: &[u8], target_digits_count: u32) -> Result<u32, OtpError> {
    // The low nibble of the last byte tells us the offset
    let offset = match digest.last() {
        Some(x) => *x & 0xf,
        None => return Err(OtpError::InvalidDigest(Vec::from(digest))),
    } as usize;

    // Gets the 4 bytes that will compose the code
    let code_bytes = match digest
        .get(offset..offset + 4)
        .and_then(|x| <[u8; 4]>::try_from(x).ok())
    {
        Some(x) => x,
        None => return Err(OtpError::InvalidDigest(Vec::from(digest))),
    };

    let code = u32::from_be_bytes(code_bytes);
    let truncation_factor = u32::pow(10, target_digits_count);

    Ok((code & 0x7fff_ffff) % truncation_factor)
}
