use crate::error::{Error, Result};
use crate::reader::{Line, LineReader};
use std::io::Read;

/// An iterator over the lines of a [`LineReader`].
///
/// Created by [`LineReader::lines`]. Ends at [`Error::EndOfStream`]; any other error is yielded
/// and iteration carries on with whatever the reader returns next. The reader is only borrowed,
/// so lines can be pushed back once the iterator is dropped.
#[derive(Debug)]
pub struct Lines<'a, R> {
    reader: &'a mut LineReader<R>,
}

impl<'a, R> Lines<'a, R> {
    pub(crate) fn new(reader: &'a mut LineReader<R>) -> Self {
        Self { reader }
    }
}

impl<R: Read> Iterator for Lines<'_, R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Result<Line>> {
        match self.reader.read_line() {
            Err(Error::EndOfStream) => None,
            result => Some(result),
        }
    }
}
