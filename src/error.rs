// Crate-wide error type, derived with thiserror.
// Every variant states *where* things went wrong.
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Pushing a frame to the window failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// A handler ran with no live surface (before initialize, or after
    /// teardown). The payload names the handler that was called.
    #[error("no drawing surface: {0}")]
    SurfaceMissing(&'static str),

    /// A positional event carried no usable position.
    #[error("invalid input event: {0}")]
    InvalidEvent(&'static str),

    /// Encoding the canvas into the export image failed.
    #[error("image encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the exported file failed.
    #[error("export io error: {0}")]
    Io(#[from] std::io::Error),
}
