//! Durable persistence for the obfuscated key blob.
//!
//! One logical key per file, written and read as raw bytes with no header
//! or framing. Writes plainly overwrite; if two processes ever race on the
//! same path the last writer wins, a known limitation of the intended
//! single-process usage.

use std::fs;
use std::io;
use std::path::Path;

use crate::OtpError;

/// Writes `blob` to `path`, overwriting any existing file.
pub fn save(path: &Path, blob: &[u8]) -> Result<(), OtpError> {
    fs::write(path, blob).map_err(|source| OtpError::IoWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the full contents of `path` as raw bytes.
pub fn load(path: &Path) -> Result<Vec<u8>, OtpError> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => OtpError::FileNotFound(path.to_path_buf()),
        _ => OtpError::IoRead {
            path: path.to_path_buf(),
            source,
        },
    })
}
