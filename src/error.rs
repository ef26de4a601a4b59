use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldToolError {
    #[error("could not load field image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("window failed: {0}")]
    Window(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, FieldToolError>;
