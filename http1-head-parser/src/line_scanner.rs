use std::{error, fmt};

use crate::{chunk_buffer::ChunkBuffer, CRLF};

//
//
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineScanError {
    /// A `LF` that is not preceded by `CR`.
    BareLf,
}
impl fmt::Display for LineScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl error::Error for LineScanError {}

/// One line, without its CRLF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}
impl Line {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

//
//
//
#[derive(Debug, Default)]
pub struct LineScanner;

impl LineScanner {
    pub fn new() -> Self {
        Self
    }

    /// Pops the next CRLF terminated line off `buffer`.
    ///
    /// Nothing is consumed while the line is incomplete. A bare `LF` is
    /// consumed together with the bytes before it and reported as an error.
    pub fn next_line(&self, buffer: &mut ChunkBuffer) -> Result<Option<Line>, LineScanError> {
        let (line, n) = match buffer.peek_line() {
            Some(raw) => match raw.strip_suffix(CRLF) {
                Some(line) => (Ok(line.to_vec()), raw.len()),
                None => (Err(LineScanError::BareLf), raw.len()),
            },
            None => return Ok(None),
        };
        buffer.consume(n);

        line.map(|bytes| Some(Line { bytes }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(chunks: &[&[u8]]) -> ChunkBuffer {
        let mut b = ChunkBuffer::new();
        for chunk in chunks {
            b.append(chunk);
        }
        b
    }

    #[test]
    fn yields_lines_in_order() -> Result<(), Box<dyn error::Error>> {
        let s = LineScanner::new();
        let mut b = buffer(&[b"GET / HTTP/1.1\r\nHost: a\r\n\r\nbody"]);

        assert_eq!(s.next_line(&mut b)?.unwrap().as_bytes(), b"GET / HTTP/1.1");
        assert_eq!(s.next_line(&mut b)?.unwrap().as_bytes(), b"Host: a");
        assert!(s.next_line(&mut b)?.unwrap().is_empty());
        assert_eq!(s.next_line(&mut b)?, None);
        assert_eq!(b.unconsumed(), b"body");

        Ok(())
    }

    #[test]
    fn holds_back_trailing_cr() -> Result<(), Box<dyn error::Error>> {
        let s = LineScanner::new();
        let mut b = buffer(&[b"GET / HT", b"TP/1.1\r"]);

        assert_eq!(s.next_line(&mut b)?, None);
        assert_eq!(b.unconsumed(), b"GET / HTTP/1.1\r");

        b.append(b"\nHost: exam");
        assert_eq!(s.next_line(&mut b)?.unwrap().as_bytes(), b"GET / HTTP/1.1");
        assert_eq!(s.next_line(&mut b)?, None);
        assert_eq!(b.unconsumed(), b"Host: exam");

        Ok(())
    }

    #[test]
    fn rejects_bare_lf() {
        let s = LineScanner::new();
        let mut b = buffer(&[b"GET / HTTP/1.1\nHost: a\r\n"]);

        assert_eq!(s.next_line(&mut b), Err(LineScanError::BareLf));
        assert_eq!(b.unconsumed(), b"Host: a\r\n");

        let mut b = buffer(&[b"\n"]);
        assert_eq!(s.next_line(&mut b), Err(LineScanError::BareLf));
    }

    #[test]
    fn keeps_inner_cr() -> Result<(), Box<dyn error::Error>> {
        let s = LineScanner::new();
        let mut b = buffer(&[b"a\rb\r\n"]);

        assert_eq!(s.next_line(&mut b)?.unwrap().as_bytes(), b"a\rb");

        Ok(())
    }
}
