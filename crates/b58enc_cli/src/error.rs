use std::path::PathBuf;

use b58enc::EncodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} is neither a byte array nor a wallet dump with _keypair.secretKey", .path.display())]
    UnsupportedKeyFile { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CliError>;
