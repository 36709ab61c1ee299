use thiserror::Error;

/// Errors from resolving a request-supplied path under the uploads root.
#[derive(Error, Debug)]
pub enum FileAccessError {
    #[error("path escapes the uploads root")]
    OutsideRoot,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FileAccessError>;
