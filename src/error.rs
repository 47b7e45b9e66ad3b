use addonstore_core::{Channel, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Add-on not found: {id} in channel {channel}")]
    NotFound { id: String, channel: Channel },

    #[error("Checksum mismatch for {id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        id: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NotFound { .. } => 2,
            Error::ChecksumMismatch { .. } => 3,
            Error::Parse(_) | Error::Json(_) => 4,
            Error::Config(_) | Error::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
