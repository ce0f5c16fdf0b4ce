use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JetError {
    #[error("invalid tile '{0}': expected a 5-character Sentinel-2 grid tile like 11SPS")]
    InvalidTile(String),

    #[error("invalid search pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("malformed granule {path}: {reason}")]
    MalformedGranule { path: PathBuf, reason: String },

    #[error("failed to generate runconfig for {run_id}: {reason}")]
    RunconfigGeneration { run_id: String, reason: String },

    #[error("stage '{stage}' could not be started: {reason}")]
    StageSpawn { stage: String, reason: String },

    #[error("stage '{stage}' terminated without an exit code")]
    StageInterrupted { stage: String },

    #[error("symbolic links are not supported on this platform")]
    SymlinkUnsupported,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JetError>;
