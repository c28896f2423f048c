//! Fixed capacity buffered source that splits its input into lines.
//!
//! [`LineSource`] is what a [`LineReader`](crate::LineReader) reads from once its pushed back
//! lines are used up. It works like a classic buffered `ReadLine`: a line that doesn't fit in the
//! buffer is returned in pieces, each piece except the last flagged as truncated.
//!
//! # Example
//!
//! ```
//! use line_reader::source::LineSource;
//! use std::io::Cursor;
//!
//! let mut source = LineSource::with_capacity(16, Cursor::new("short\r\nthis one is too long\n"));
//!
//! assert_eq!(source.read_line().unwrap(), (b"short".as_slice(), false));
//! assert_eq!(source.read_line().unwrap(), (b"this one is too ".as_slice(), true));
//! assert_eq!(source.read_line().unwrap(), (b"long".as_slice(), false));
//! assert!(source.read_line().unwrap_err().is_end_of_stream());
//! ```

use crate::constants::{DEFAULT_CAPACITY, MIN_CAPACITY};
use crate::error::{Error, Result};
use std::cmp;
use std::io::{self, Read};

/// Where a scan for the end of a line stopped.
enum Scan {
    /// Found a `\n`; the range includes it.
    Newline(usize),
    /// The buffer is full and holds no `\n`.
    Full,
    /// The reader is exhausted or failed; whatever is buffered is the last line.
    Eof,
}

/// A buffered reader that hands out lines.
///
/// # Invariants
///
/// The invariant `0 <= pos <= len <= buf.len()` holds at all times. `buf.len()` is the capacity
/// and never changes after construction.
#[derive(Debug)]
pub struct LineSource<R> {
    /// Internal buffer, its length is the capacity.
    buf: Vec<u8>,
    /// Length of the data in the buffer that we care about.
    len: usize,
    /// Position that data has been consumed up to.
    pos: usize,
    /// A read failure held back until the buffered data before it has been handed out.
    err: Option<io::Error>,
    reader: R,
}

impl<R: Read> LineSource<R> {
    /// Creates a new `LineSource` with a [`DEFAULT_CAPACITY`] buffer.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, reader)
    }

    /// Creates a new `LineSource` with at least the given capacity.
    ///
    /// Capacities below [`MIN_CAPACITY`] are raised to it.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            buf: vec![0; cmp::max(capacity, MIN_CAPACITY)],
            len: 0,
            pos: 0,
            err: None,
            reader,
        }
    }

    /// Reads the next line, without its `\n` or `\r\n` terminator.
    ///
    /// The flag is `true` when the line did not fit in the buffer: the returned bytes are only a
    /// prefix and the rest of the line follows on the next call. A `\r` that ends a full buffer is
    /// held back for the next call, so a `\r\n` split across the boundary is still recognised.
    ///
    /// Data at the end of the stream without a trailing newline is returned as the last line. The
    /// same goes for data buffered when the reader fails: it comes back as a whole line and the
    /// failure is returned by the next call.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfStream`] once nothing is left, or [`Error::Io`] if the reader fails.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    pub fn read_line(&mut self) -> Result<(&[u8], bool)> {
        if let Some(e) = self.err.take() {
            return Err(Error::Io(e));
        }

        let scan = self.scan()?;

        // Scanning may have compacted the buffer, so the line starts wherever `pos` is now
        let start = self.pos;

        match scan {
            Scan::Newline(end) => {
                self.pos = end;

                // Drop the '\n', and the '\r' before it if there is one
                let mut line_end = end - 1;
                if line_end > start && self.buf[line_end - 1] == b'\r' {
                    line_end -= 1;
                }

                Ok((&self.buf[start..line_end], false))
            }
            Scan::Full => {
                let mut end = self.len;

                // Hold back a trailing '\r' in case its '\n' is next
                if self.buf[end - 1] == b'\r' {
                    end -= 1;
                }
                self.pos = end;

                Ok((&self.buf[start..end], true))
            }
            Scan::Eof if start == self.len => Err(Error::EndOfStream),
            Scan::Eof => {
                self.pos = self.len;

                Ok((&self.buf[start..self.len], false))
            }
        }
    }

    /// Appends everything that is left, buffered or not, to `out`.
    ///
    /// Like [`Read::read_to_end`], bytes read before a failure are still appended to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error of the underlying reader, including one held back by
    /// [`read_line`](Self::read_line).
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[expect(clippy::arithmetic_side_effects, reason = "Would OOM before overflow")]
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> io::Result<usize> {
        let unconsumed = &self.buf[self.pos..self.len];
        let unconsumed_bytes = unconsumed.len();

        out.try_reserve(unconsumed_bytes)?;
        out.extend_from_slice(unconsumed);

        // Discard all data in the internal buffer
        self.discard();

        if let Some(e) = self.err.take() {
            return Err(e);
        }

        // Let the inner reader take things from here
        let bytes_read = self.reader.read_to_end(out)?;

        Ok(unconsumed_bytes + bytes_read)
    }

    /// Scans the unconsumed data for a `\n`, reading more whenever the buffered data has none.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    fn scan(&mut self) -> io::Result<Scan> {
        // Offset from `pos` that has already been searched
        let mut searched = 0;

        loop {
            if let Some(i) = self.buf[self.pos + searched..self.len]
                .iter()
                .position(|&b| b == b'\n')
            {
                return Ok(Scan::Newline(self.pos + searched + i + 1));
            }
            searched = self.len - self.pos;

            if searched == self.buf.len() {
                return Ok(Scan::Full);
            }

            match self.fill() {
                Ok(0) => return Ok(Scan::Eof),
                Ok(_) => {}
                // Hand out what we have as the last line, the failure comes next
                Err(e) if self.pos < self.len => {
                    self.err = Some(e);
                    return Ok(Scan::Eof);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Moves unconsumed data to the front and reads once into the free space.
    ///
    /// Must only be called when the buffer isn't full of unconsumed data.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    fn fill(&mut self) -> io::Result<usize> {
        debug_assert!(self.len - self.pos < self.buf.len());

        self.compact();

        loop {
            match self.reader.read(&mut self.buf[self.len..]) {
                Ok(n) => {
                    self.len += n;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R> LineSource<R> {
    /// The capacity of the line buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The data that has been read from the reader but not handed out yet.
    #[inline]
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    pub fn buffered(&self) -> &[u8] {
        &self.buf[self.pos..self.len]
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps this `LineSource`, returning the underlying reader.
    ///
    /// Buffered data is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Remove bytes that have been consumed
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "The invariant makes it safe"
    )]
    fn compact(&mut self) {
        if self.pos == 0 {
            return;
        }

        self.buf.copy_within(self.pos..self.len, 0);
        self.len -= self.pos;
        self.pos = 0;
    }

    /// Discard the current buffer.
    #[inline]
    fn discard(&mut self) {
        self.pos = 0;
        self.len = 0;
    }
}
