use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::OtpError;

/// Length of the raw secret in bytes.
pub const KEY_LEN: usize = 32;

/// Length of the hexadecimal form of the secret.
pub const HEX_KEY_LEN: usize = 2 * KEY_LEN;

/// Checks that `raw` holds a well-formed key: exactly 64 hexadecimal
/// characters (either case) once surrounding whitespace is trimmed.
pub fn validate(raw: &str) -> Result<(), OtpError> {
    let trimmed = raw.trim();

    if trimmed.len() != HEX_KEY_LEN || !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(OtpError::InvalidKeyFormat);
    }

    Ok(())
}

/// The raw 32-byte secret, decoded from its 64-character hexadecimal form.
///
/// Owns its bytes exclusively and zeroizes them on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Decodes a secret from a hexadecimal string, validating it first.
    pub fn from_hex(raw: &str) -> Result<Self, OtpError> {
        validate(raw)?;

        let decoded = data_encoding::HEXLOWER_PERMISSIVE
            .decode(raw.trim().as_bytes())
            .map_err(|_| OtpError::InvalidKeyFormat)?;

        Self::from_bytes(&decoded)
    }

    /// Builds a secret from already-decoded bytes, rejecting any length
    /// other than 32. Used on the key-file load path, where a truncated
    /// or padded file would otherwise go unnoticed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, OtpError> {
        let key: [u8; KEY_LEN] = bytes.try_into().map_err(|_| OtpError::InvalidKeyFormat)?;

        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([redacted])")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::key::{validate, SecretKey};
    use crate::OtpError;

    const RAMP_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    #[rstest]
    #[case(RAMP_HEX)]
    #[case("000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F")]
    #[case("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")]
    #[case("  000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f\n")]
    fn accepts_well_formed_keys(#[case] raw: &str) {
        assert!(validate(raw).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("abc123")]
    // 63 characters
    #[case("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1")]
    // 65 characters
    #[case("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f0")]
    // non-hex character
    #[case("g00102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")]
    // inner whitespace is not trimmed away
    #[case("000102030405060708090a0b0c0d0e0f 101112131415161718191a1b1c1d1e")]
    fn rejects_malformed_keys(#[case] raw: &str) {
        assert!(matches!(validate(raw), Err(OtpError::InvalidKeyFormat)));
    }

    #[test]
    fn from_hex_decodes_exact_bytes() {
        let key = SecretKey::from_hex(RAMP_HEX).unwrap();

        let expected: Vec<u8> = (0u8..32).collect();
        assert_eq!(key.as_bytes(), expected.as_slice());
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let lower = SecretKey::from_hex(RAMP_HEX).unwrap();
        let upper = SecretKey::from_hex(&RAMP_HEX.to_uppercase()).unwrap();

        assert_eq!(lower.as_bytes(), upper.as_bytes());
    }

    #[rstest]
    #[case(31)]
    #[case(33)]
    #[case(0)]
    fn from_bytes_rejects_wrong_lengths(#[case] len: usize) {
        let bytes = vec![0u8; len];
        assert!(matches!(
            SecretKey::from_bytes(&bytes),
            Err(OtpError::InvalidKeyFormat)
        ));
    }

    #[test]
    fn debug_redacts_key_material() {
        let key = SecretKey::from_hex(RAMP_HEX).unwrap();
        assert_eq!(format!("{key:?}"), "SecretKey([redacted])");
    }
}
