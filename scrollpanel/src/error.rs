use thiserror::Error;

/// Errors raised by the panel library.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal setup, polling or drawing failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A handle refers to an element that the last layout did not place.
    #[error("element '{0}' is not part of the layout")]
    UnknownElement(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
