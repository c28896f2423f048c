//! Error type shared by every fallible operation in the crate.

use std::io;
use thiserror::Error;

/// Result alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while reading lines.
///
/// [`Error::EndOfStream`] is the normal way a read loop ends; it isn't a failure.
#[derive(Error, Debug)]
pub enum Error {
    /// The file given to [`LineReader::open`](crate::LineReader::open) could not be opened.
    ///
    /// The error from the operating system is kept as is.
    #[error(transparent)]
    Open(io::Error),

    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// There are no more lines, pushed back or otherwise.
    #[error("end of stream")]
    EndOfStream,

    /// The buffer given to [`LineReader::read_remaining`](crate::LineReader::read_remaining)
    /// was too small for everything that was left. The first `copied` bytes were written anyway.
    #[error(
        "supplied buffer ({available}) too small to fit remainder of stream ({required}), only copied {copied}"
    )]
    BufferTooSmall {
        required: usize,
        available: usize,
        copied: usize,
    },

    /// The underlying reader failed part way through a bulk read. The first `copied` bytes of
    /// the destination hold what was read before the failure.
    #[error("{source} (copied {copied} bytes before failing)")]
    PartialRead {
        copied: usize,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Whether this is the end-of-stream signal rather than an actual failure.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }

    /// The [`io::ErrorKind`] behind this error, if it came from an I/O operation.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Open(e) | Self::Io(e) | Self::PartialRead { source: e, .. } => Some(e.kind()),
            Self::EndOfStream | Self::BufferTooSmall { .. } => None,
        }
    }
}
