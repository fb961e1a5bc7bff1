use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("Image decode/encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Mask oracle error: {0}")]
    Oracle(#[from] oracle::OracleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
