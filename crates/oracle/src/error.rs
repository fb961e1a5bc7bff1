use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Failed to spawn SAM runner `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("SAM runner exited with {status}: {stderr}")]
    RunnerFailed { status: String, stderr: String },

    #[error("Malformed SAM runner response: {0}")]
    Response(#[from] serde_json::Error),

    #[error("Failed to load mask image {path}: {source}")]
    MaskLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to stage input image {path}: {source}")]
    ImageStage {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OracleError>;
