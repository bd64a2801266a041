pub mod hotp;
pub mod key;
pub mod obfuscate;
pub mod store;
pub mod totp;

use std::fmt::Display;
use std::io;
use std::path::PathBuf;

/// Number of digits in a generated code.
pub const DIGITS: u32 = 6;

#[derive(Debug, thiserror::Error)]
pub enum OtpError {
    #[error("invalid key: expected exactly 64 hexadecimal characters")]
    InvalidKeyFormat,
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("could not read {}: {source}", .path.display())]
    IoRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid digest")]
    InvalidDigest(Vec<u8>),
}

/// A generated one-time code.
///
/// Displays as a decimal string zero-padded to [`DIGITS`] characters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OtpCode {
    code: u32,
}

impl OtpCode {
    pub(crate) fn new(code: u32) -> Self {
        Self { code }
    }

    pub fn integer(&self) -> u32 {
        self.code
    }
}

impl Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:0padding$}",
            self.code,
            padding = (DIGITS as usize)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::OtpCode;

    #[test]
    fn code_display_pads_to_six_digits() {
        assert_eq!(OtpCode::new(5924).to_string(), "005924");
        assert_eq!(OtpCode::new(755_224).to_string(), "755224");
        assert_eq!(OtpCode::new(0).to_string(), "000000");
    }
}
