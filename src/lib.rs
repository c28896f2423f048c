//! A buffered line reader that lines can be pushed back into.
//!
//! Parsers often read one line too many: the line that tells them the current section is over
//! belongs to whoever handles the next section. [`LineReader`] lets them hand that line back with
//! [`unread_line`](LineReader::unread_line), and the next [`read_line`](LineReader::read_line)
//! returns it again before anything more is read from the underlying reader.
//!
//! # Quick start
//!
//! ```
//! use line_reader::LineReader;
//!
//! let mut reader = LineReader::from_bytes("[a]\nx=1\n[b]\ny=2\n");
//!
//! // Read section "a" until we hit the next header
//! assert_eq!(reader.read_line().unwrap().as_bytes(), b"[a]");
//! assert_eq!(reader.read_line().unwrap().as_bytes(), b"x=1");
//! let next = reader.read_line().unwrap();
//! assert_eq!(next.as_bytes(), b"[b]");
//!
//! // Not ours, give it back
//! reader.unread_line(next.into_bytes());
//!
//! // The next reader starts at its own header
//! assert_eq!(reader.read_line().unwrap().as_bytes(), b"[b]");
//! assert_eq!(reader.read_line().unwrap().as_bytes(), b"y=2");
//! assert!(reader.read_line().unwrap_err().is_end_of_stream());
//! ```
//!
//! # Long lines
//!
//! Lines are read through a fixed size buffer. A line longer than the buffer comes back in pieces,
//! all but the last flagged with [`Line::is_truncated`].
//!
//! ```
//! use line_reader::LineReader;
//! use std::io::Cursor;
//!
//! let mut reader = LineReader::builder(Cursor::new("0123456789abcdefXYZ\n"))
//!     .capacity(16)
//!     .build();
//!
//! let first = reader.read_line().unwrap();
//! assert_eq!(first.as_bytes(), b"0123456789abcdef");
//! assert!(first.is_truncated());
//!
//! let rest = reader.read_line().unwrap();
//! assert_eq!(rest.as_bytes(), b"XYZ");
//! assert!(!rest.is_truncated());
//! ```
//!
//! # Crate organisation
//!
//! - [`LineReader`] — the primary type, wrapping any [`Read`](std::io::Read).
//! - [`LineReaderBuilder`] — configures the line buffer capacity.
//! - [`Line`] — a line handed out by the reader.
//! - [`Lines`] — iterator over the remaining lines.
//! - [`source::LineSource`] — the buffered line splitter underneath, usable on its own.
//! - [`Error`] — what can go wrong, [`Error::EndOfStream`] included.
//! - [`constants`] — buffer size constants.

pub mod constants;
mod error;
mod lines;
mod reader;
pub mod source;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use lines::Lines;
pub use reader::{Line, LineReader, LineReaderBuilder};
