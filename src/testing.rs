//! Readers with awkward behaviour, for tests.

#![expect(clippy::indexing_slicing, reason = "Okay in tests")]

use std::collections::VecDeque;
use std::io::{self, Read};

/// Hands out its data in the given chunks, one chunk (or less) per `read` call, with an
/// `Interrupted` error before each chunk to make sure callers retry.
///
/// Once the chunks run out it reports EOF, or fails if built with [`failing`](Self::failing).
#[derive(Debug)]
pub struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
    interrupt: bool,
    fail: Option<io::ErrorKind>,
}

impl ChunkedReader {
    pub fn new<'a>(chunks: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            chunks: chunks.into_iter().map(|c| c.as_bytes().to_vec()).collect(),
            interrupt: true,
            fail: None,
        }
    }

    pub fn failing(mut self, kind: io::ErrorKind) -> Self {
        self.fail = Some(kind);
        self
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt {
            self.interrupt = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt = true;

        let Some(mut chunk) = self.chunks.pop_front() else {
            return match self.fail {
                Some(kind) => Err(io::Error::new(kind, "reader failed on purpose")),
                None => Ok(0),
            };
        };

        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);

        // Keep whatever didn't fit for the next call
        if n < chunk.len() {
            self.chunks.push_front(chunk.split_off(n));
        }

        Ok(n)
    }
}

/// Returns `data` and then fails with the given kind forever.
#[derive(Debug)]
pub struct FailingReader {
    data: io::Cursor<Vec<u8>>,
    kind: io::ErrorKind,
}

impl FailingReader {
    pub fn new(data: &str, kind: io::ErrorKind) -> Self {
        Self {
            data: io::Cursor::new(data.as_bytes().to_vec()),
            kind,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(self.kind, "reader failed on purpose")),
            n => Ok(n),
        }
    }
}
