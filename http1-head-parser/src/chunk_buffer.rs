use crate::LF;

//
//
//
const COMPACT_MIN_CONSUMED: usize = 4096;

// `offset_scanned`: bytes before it were already searched for LF.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    buf: Vec<u8>,
    offset_consumed: usize,
    offset_scanned: usize,
    line_end: Option<usize>,
    //
    n_discarded: usize,
    n_scanned: usize,
}

impl ChunkBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Unconsumed bytes up to and including the next `LF`. A trailing `CR` is
    /// not a terminator, its `LF` may be in the next chunk.
    pub fn peek_line(&mut self) -> Option<&[u8]> {
        if let Some(end) = self.line_end {
            return Some(&self.buf[self.offset_consumed..end]);
        }

        let from = self.offset_scanned.max(self.offset_consumed);

        match self.buf[from..].iter().position(|x| x == &LF) {
            Some(i) => {
                self.n_scanned += i + 1;
                let end = from + i + 1;
                self.offset_scanned = end;
                self.line_end = Some(end);
                Some(&self.buf[self.offset_consumed..end])
            }
            None => {
                self.n_scanned += self.buf.len() - from;
                self.offset_scanned = self.buf.len();
                None
            }
        }
    }

    pub fn consume(&mut self, n: usize) {
        let n = n.min(self.len());
        self.offset_consumed += n;
        if self.offset_scanned < self.offset_consumed {
            self.offset_scanned = self.offset_consumed;
        }
        if matches!(self.line_end, Some(end) if end <= self.offset_consumed) {
            self.line_end = None;
        }

        if self.offset_consumed >= COMPACT_MIN_CONSUMED
            && self.offset_consumed * 2 >= self.buf.len()
        {
            self.compact();
        }
    }

    pub fn compact(&mut self) {
        let n = self.offset_consumed;
        if n == 0 {
            return;
        }
        self.buf.drain(..n);
        self.n_discarded += n;
        self.offset_consumed = 0;
        self.offset_scanned -= n;
        if let Some(end) = self.line_end.as_mut() {
            *end -= n;
        }
    }

    pub fn unconsumed(&self) -> &[u8] {
        &self.buf[self.offset_consumed..]
    }

    pub fn take_unconsumed(&mut self) -> Vec<u8> {
        let bytes = self.unconsumed().to_vec();
        self.consume(bytes.len());
        bytes
    }

    pub fn len(&self) -> usize {
        self.buf.len() - self.offset_consumed
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes consumed since the buffer was created.
    pub fn stream_offset(&self) -> usize {
        self.n_discarded + self.offset_consumed
    }

    pub fn scanned(&self) -> usize {
        self.n_scanned
    }

    pub fn clear(&mut self) {
        let n = self.len();
        self.consume(n);
        self.compact();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_line_waits_for_lf() {
        let mut b = ChunkBuffer::new();

        b.append(b"GET / HTTP/1.1\r");
        assert_eq!(b.peek_line(), None);

        b.append(b"\nHost");
        assert_eq!(b.peek_line(), Some(&b"GET / HTTP/1.1\r\n"[..]));
        // peeking does not consume
        assert_eq!(b.peek_line(), Some(&b"GET / HTTP/1.1\r\n"[..]));

        b.consume(16);
        assert_eq!(b.unconsumed(), b"Host");
        assert_eq!(b.peek_line(), None);
        assert_eq!(b.stream_offset(), 16);
    }

    #[test]
    fn scanning_resumes_at_watermark() {
        let mut b = ChunkBuffer::new();
        let line = b"X-Foo: bar\r\n";

        for x in line.iter() {
            b.append(&[*x]);
            let _ = b.peek_line();
        }
        assert_eq!(b.scanned(), line.len());
        assert_eq!(b.peek_line(), Some(&line[..]));
    }

    #[test]
    fn compact_keeps_unconsumed() {
        let mut b = ChunkBuffer::new();

        b.append(b"a\r\nbc");
        assert_eq!(b.peek_line(), Some(&b"a\r\n"[..]));
        b.consume(3);
        b.compact();

        assert_eq!(b.unconsumed(), b"bc");
        assert_eq!(b.len(), 2);
        assert_eq!(b.stream_offset(), 3);

        b.append(b"\r\n");
        assert_eq!(b.peek_line(), Some(&b"bc\r\n"[..]));
    }

    #[test]
    fn consume_compacts_large_prefix() {
        let mut b = ChunkBuffer::new();
        let line = [b'a'; COMPACT_MIN_CONSUMED];

        b.append(&line);
        b.append(b"\n");
        b.append(b"tail");
        let n = b.peek_line().map(|x| x.len()).unwrap();
        b.consume(n);

        assert_eq!(b.unconsumed(), b"tail");
        assert_eq!(b.stream_offset(), COMPACT_MIN_CONSUMED + 1);
    }

    #[test]
    fn take_unconsumed_and_clear() {
        let mut b = ChunkBuffer::new();

        b.append(b"abc");
        assert_eq!(b.take_unconsumed(), b"abc".to_vec());
        assert!(b.is_empty());

        b.append(b"def");
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.stream_offset(), 6);
    }
}
