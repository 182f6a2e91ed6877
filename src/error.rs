// Crate error type. Every variant states *where* things went wrong.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing the frame buffer to the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// The save directory could not be created
    #[error("Cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding/writing the canvas image failed
    #[error("Cannot write image {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Reading an image back into a canvas failed
    #[error("Cannot read image {}: {source}", .path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
