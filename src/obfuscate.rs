//! Reversible XOR obfuscation for the key file at rest.
//!
//! This keeps the secret out of plain sight in the file, nothing more: the
//! passphrase is a fixed constant embedded in the binary, so anyone holding
//! a copy of the program can invert the transform. It is a deterrent, not a
//! security boundary.

/// Fixed passphrase mixed into the key file. The encode and decode call
/// sites must use the same constant for round-tripping to hold.
const PASSPHRASE: &[u8] = b"hexotp keystream pepper";

/// XORs `data` with the repeating passphrase.
///
/// The transform is its own inverse, so this single function serves as both
/// encode and decode. Output length always equals input length.
pub fn apply(data: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(PASSPHRASE.iter().cycle())
        .map(|(byte, pass)| byte ^ pass)
        .collect()
}
