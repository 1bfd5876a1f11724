#![forbid(unsafe_code)]
//! Encode a key given as a list of byte values and print it in base58.

pub mod cli;
pub mod error;
pub mod keyfile;

use log::{debug, info};

use crate::{
    cli::{Config, Source},
    error::Result,
};

/// The key encoded when no input is given.
pub const DEFAULT_KEY: [u8; 64] = [
    108, 53, 238, 21, 113, 182, 171, 173, 50, 22, 153, 160, 252, 68, 164, 175, 143, 152, 44, 37,
    90, 70, 154, 158, 146, 221, 133, 121, 114, 197, 200, 215, 3, 96, 248, 147, 13, 172, 255, 232,
    65, 40, 130, 50, 0, 237, 178, 231, 149, 163, 132, 76, 245, 80, 54, 234, 213, 92, 192, 177, 76,
    239, 246, 83,
];

/// Build the byte buffer `config` points at and encode it.
pub fn run(config: &Config) -> Result<String> {
    let bytes = match &config.source {
        Source::Builtin => DEFAULT_KEY.to_vec(),
        Source::Keypair(path) => keyfile::read_key_file(path)?,
        Source::Values(values) => b58enc::bytes_from_values(values.iter().copied())?,
    };
    info!("encoding {} bytes", bytes.len());
    let encoded = b58enc::encode(&bytes);
    debug!("encoded length {}", encoded.len());
    Ok(encoded)
}
