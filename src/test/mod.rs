//! Shared helpers for unit tests.

use std::io::{self, ErrorKind, Write};

/// A sink that accepts a fixed number of `write` calls and fails every call after that.
///
/// Accepted writes are stored whole, so after a failure [`LimitedWriter::as_str`] holds the
/// exact output prefix the serializer managed to transmit.
pub struct LimitedWriter {
    limit: usize,
    writes: usize,
    buffer: Vec<u8>,
}

impl LimitedWriter {
    pub fn new(limit: usize) -> Self {
        LimitedWriter {
            limit,
            writes: 0,
            buffer: Vec::new(),
        }
    }

    /// Number of successful write calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buffer).unwrap()
    }
}

impl Write for LimitedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.writes >= self.limit {
            return Err(io::Error::new(ErrorKind::Other, "write limit reached"));
        }
        self.writes += 1;
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink that accepts at most `chunk` bytes per `write` call.
pub struct ShortWriter {
    chunk: usize,
    buffer: Vec<u8>,
}

impl ShortWriter {
    pub fn new(chunk: usize) -> Self {
        ShortWriter {
            chunk,
            buffer: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buffer).unwrap()
    }
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let accepted = buf.len().min(self.chunk);
        self.buffer.extend_from_slice(&buf[..accepted]);
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
