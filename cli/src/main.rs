use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::SystemTime;

use clap::Parser;
use hexotp::key::SecretKey;
use hexotp::totp::Totp;
use hexotp::{obfuscate, store, OtpError};

/// Name of the obfuscated key file written by `--generate`.
const KEY_FILE: &str = "hexotp.key";

const EXIT_USAGE: u8 = 2;
const EXIT_BAD_KEY: u8 = 3;
const EXIT_NOT_FOUND: u8 = 4;
const EXIT_IO: u8 = 5;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Read a 64-character hexadecimal key from PATH and store it
    /// obfuscated in hexotp.key
    #[arg(short = 'g', long = "generate", value_name = "PATH")]
    generate: Option<PathBuf>,

    /// Print the current one-time code for the key file at PATH
    #[arg(short = 'k', long = "key", value_name = "PATH")]
    key: Option<PathBuf>,
}

/// Raised when the flags do not select exactly one mode.
#[derive(Debug, thiserror::Error)]
#[error("select exactly one mode: -g <PATH> to store a key, -k <PATH> to print a code")]
struct InvalidMode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    match (&args.generate, &args.key) {
        (Some(path), None) => provision(path),
        (None, Some(path)) => print_code(path),
        _ => Err(InvalidMode.into()),
    }
}

/// Reads a plaintext hex key, validates it and stores it obfuscated.
fn provision(hex_path: &Path) -> anyhow::Result<()> {
    let raw = store::load(hex_path)?;
    let secret = SecretKey::from_hex(&String::from_utf8_lossy(&raw))?;

    let blob = obfuscate::apply(secret.as_bytes());
    store::save(Path::new(KEY_FILE), &blob)?;

    println!("Key was successfully saved in {KEY_FILE}.");
    Ok(())
}

/// Loads an obfuscated key file and prints the code for the current window.
fn print_code(key_path: &Path) -> anyhow::Result<()> {
    let blob = store::load(key_path)?;
    let secret = SecretKey::from_bytes(&obfuscate::apply(&blob))?;

    let now = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)?;
    let code = Totp::new(secret.as_bytes()).generate(now.as_secs())?;

    println!("{code}");
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if err.is::<InvalidMode>() {
        return EXIT_USAGE;
    }

    match err.downcast_ref::<OtpError>() {
        Some(OtpError::InvalidKeyFormat) => EXIT_BAD_KEY,
        Some(OtpError::FileNotFound(_)) => EXIT_NOT_FOUND,
        _ => EXIT_IO,
    }
}
