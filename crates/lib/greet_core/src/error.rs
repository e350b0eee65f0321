//! Greeter error types.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Writing to the output channel failed (closed pipe, full disk, ...).
    #[error("Output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Unknown locale: {0:?}")]
    UnknownLocale(String),
}

impl Error {
    /// True when the destination was closed before the line was written.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
