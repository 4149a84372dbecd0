use thiserror::Error;

/// Library error type for catalog construction.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured image directory is missing or not a directory.
    #[error("invalid image directory: {0}")]
    BadDir(String),

    /// The listing completed but found no recognized images.
    #[error("no images found in the image directory")]
    EmptyCatalog,

    /// No entry matched the configured fixed-image base name.
    #[error("no image with base name '{0}' found")]
    FixedImageNotFound(String),

    /// The fixed image was the only image, leaving nothing to cycle through.
    #[error("no slideshow images left after setting aside '{0}'")]
    EmptySequence(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
