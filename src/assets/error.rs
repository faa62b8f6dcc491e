use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssetError>;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unknown asset size `{0}` (expected thumbnail, small, medium or large)")]
    UnknownSize(String),

    #[error("asset source directory does not exist: {0}")]
    MissingInput(PathBuf),

    #[error("asset I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk failure: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("image decode/encode failure for {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}
