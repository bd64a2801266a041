use crate::hotp::Hotp;
use crate::{OtpCode, OtpError};

/// Length of a time window in seconds.
pub const PERIOD: u64 = 30;

/// Time-window code derivation: the counter is the number of whole
/// 30-second windows since the Unix epoch, handed to the HOTP engine.
#[derive(Clone)]
pub struct Totp {
    hotp: Hotp,
}

impl Totp {
    /// Creates the driver over the raw secret bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self {
            hotp: Hotp::new(key),
        }
    }

    /// Generates the code for the window containing `seconds_since_epoch`.
    ///
    /// Two calls within the same window return the same code; the value is
    /// recomputed each time because recomputation is cheap.
    pub fn generate(&self, seconds_since_epoch: u64) -> Result<OtpCode, OtpError> {
        self.hotp.generate(seconds_since_epoch / PERIOD)
    }
}
