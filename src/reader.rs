use crate::constants::DEFAULT_CAPACITY;
use crate::error::{Error, Result};
use crate::lines::Lines;
use crate::source::LineSource;
use std::cmp;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{Cursor, Read};
use std::ops::Deref;
use std::path::Path;

/// A single line handed out by [`LineReader::read_line`], without its terminator.
///
/// Dereferences to its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
    truncated: bool,
}

impl Line {
    /// The bytes of the line.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether this is only the start of a line that was too long for the buffer.
    ///
    /// The rest of the line is returned by the next call to [`LineReader::read_line`]. This is
    /// not an error. Pushed back lines are never truncated.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Consumes the line, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for Line {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// A line reader that lines can be pushed back into.
///
/// Lines given to [`unread_line`](Self::unread_line) are returned by
/// [`read_line`](Self::read_line), most recently pushed back first, before anything more is read
/// from the underlying reader.
#[derive(Debug)]
pub struct LineReader<R> {
    source: LineSource<R>,
    /// Pushed back lines, the front one is read next.
    pending: VecDeque<Vec<u8>>,
}

impl LineReader<Cursor<Vec<u8>>> {
    /// Creates a `LineReader` over in-memory content.
    pub fn from_bytes(content: impl Into<Vec<u8>>) -> Self {
        Self::new(Cursor::new(content.into()))
    }
}

impl LineReader<File> {
    /// Opens the file at `path` for reading lines.
    ///
    /// The file is closed when the reader is [closed](Self::close) or dropped.
    ///
    /// # Errors
    ///
    /// [`Error::Open`] holding the unmodified error from opening the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(Error::Open)?;

        log::debug!("Opened {} for reading lines", path.display());

        Ok(Self::new(file))
    }
}

impl<R: Read> LineReader<R> {
    /// Creates a new `LineReader` with a [`DEFAULT_CAPACITY`] line buffer.
    pub fn new(reader: R) -> LineReader<R> {
        LineReader::builder(reader).build()
    }

    /// Returns a [`LineReaderBuilder`] for configuring a new `LineReader`.
    pub fn builder(reader: R) -> LineReaderBuilder<R> {
        LineReaderBuilder {
            reader,
            capacity: None,
        }
    }

    /// Reads the next line.
    ///
    /// Pushed back lines come first. After those, lines are read from the underlying reader,
    /// with `\n` and `\r\n` terminators removed. A line too long for the buffer comes back in
    /// pieces, see [`Line::is_truncated`].
    ///
    /// # Errors
    ///
    /// [`Error::EndOfStream`] when there is nothing left, [`Error::Io`] if the underlying reader
    /// fails.
    pub fn read_line(&mut self) -> Result<Line> {
        if let Some(bytes) = self.pending.pop_front() {
            return Ok(Line {
                bytes,
                truncated: false,
            });
        }

        let (bytes, truncated) = self.source.read_line()?;
        if truncated {
            log::trace!("Line longer than {} bytes, returning a prefix", bytes.len());
        }

        Ok(Line {
            bytes: bytes.to_vec(),
            truncated,
        })
    }

    /// Returns an iterator over the remaining lines, pushed back ones included.
    pub fn lines(&mut self) -> Lines<'_, R> {
        Lines::new(self)
    }

    /// Appends everything that is left to `out` and returns how many bytes that was.
    ///
    /// Pushed back lines come first, each followed by a `\n`, then the rest of the underlying
    /// reader up to its end. Afterwards nothing is pending and the reader is exhausted.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the underlying reader fails. Bytes read before the failure are still
    /// appended to `out`.
    #[expect(clippy::arithmetic_side_effects, reason = "Only ever grows")]
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        let start = out.len();

        // Joining the lines with '\n' and adding one more as the boundary is the same as ending
        // every line with '\n'
        for line in self.pending.drain(..) {
            out.extend_from_slice(&line);
            out.push(b'\n');
        }

        self.source.read_to_end(out)?;

        Ok(out.len() - start)
    }

    /// Copies everything that is left into `buf` and returns how many bytes that was.
    ///
    /// The layout is the same as [`read_to_end`](Self::read_to_end). The underlying reader is
    /// always read to its end and pending lines are always cleared, even when `buf` can't hold
    /// all of it.
    ///
    /// # Errors
    ///
    /// - [`Error::BufferTooSmall`] if `buf` can't hold everything. It's filled as far as possible.
    /// - [`Error::PartialRead`] if the underlying reader fails. This takes precedence over
    ///   `buf` being too small, and `buf` holds whatever was read before the failure.
    #[expect(clippy::indexing_slicing, reason = "Bounded by min of both lengths")]
    pub fn read_remaining(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut remaining = Vec::new();
        let result = self.read_to_end(&mut remaining);

        let copied = cmp::min(remaining.len(), buf.len());
        buf[..copied].copy_from_slice(&remaining[..copied]);

        match result {
            Err(Error::Io(source)) => Err(Error::PartialRead { copied, source }),
            Err(e) => Err(e),
            Ok(required) if required > buf.len() => {
                log::debug!(
                    "Remainder of {required} bytes doesn't fit in {} byte buffer",
                    buf.len()
                );

                Err(Error::BufferTooSmall {
                    required,
                    available: buf.len(),
                    copied,
                })
            }
            Ok(required) => Ok(required),
        }
    }
}

impl<R> LineReader<R> {
    /// Pushes a line back, ahead of everything else pending.
    ///
    /// The next [`read_line`](Self::read_line) returns it as is. Each `\n` inside `line` splits
    /// it, so `"p\nq"` comes back as `"p"` and then `"q"`.
    pub fn unread_line(&mut self, line: impl Into<Vec<u8>>) {
        let line = line.into();

        log::trace!(
            "Pushing back {} byte line, {} already pending",
            line.len(),
            self.pending.len()
        );

        // Push back to front so the first segment ends up first
        for segment in line.split(|&b| b == b'\n').rev() {
            self.pending.push_front(segment.to_vec());
        }
    }

    /// Whether any pushed back lines are waiting to be read.
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The number of pushed back lines waiting to be read.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The capacity of the line buffer, which is the longest line returned in one piece.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.source.capacity()
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        self.source.get_ref()
    }

    /// Unwraps this `LineReader`, returning the underlying reader.
    ///
    /// Pending lines and buffered data are lost.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    /// Closes the reader, releasing the underlying reader (closing it if it's a file).
    pub fn close(self) {
        log::trace!("Closing line reader with {} lines pending", self.pending.len());

        drop(self.into_inner());
    }
}

/// A builder for constructing a [`LineReader`] with a custom line buffer capacity.
///
/// Capacities below [`MIN_CAPACITY`](crate::constants::MIN_CAPACITY) are raised to it.
#[must_use]
pub struct LineReaderBuilder<R> {
    reader: R,
    capacity: Option<usize>,
}

impl<R: Read> LineReaderBuilder<R> {
    /// Sets the line buffer capacity. Defaults to [`DEFAULT_CAPACITY`].
    pub fn capacity(mut self, cap: usize) -> Self {
        self.capacity = Some(cap);
        self
    }

    /// Builds the [`LineReader`] with the configured settings.
    pub fn build(self) -> LineReader<R> {
        let capacity = self.capacity.unwrap_or(DEFAULT_CAPACITY);

        LineReader {
            source: LineSource::with_capacity(capacity, self.reader),
            pending: VecDeque::new(),
        }
    }
}
