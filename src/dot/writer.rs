//! Byte-accounting sink adapter used by the serializer.
//!
//! Every DOT fragment is handed to the sink as one discrete `write` call. [`DotWriter`]
//! wraps the caller's [`std::io::Write`] and keeps an exact tally of the bytes the sink
//! accepted, so a failure part way through serialization can report precisely how much of
//! the canonical output was transmitted.

use std::io::{self, ErrorKind, Write};

use crate::{Error, Result};

/// Counting wrapper around a byte sink.
pub(crate) struct DotWriter<'a, W: Write + ?Sized> {
    sink: &'a mut W,
    written: u64,
}

impl<'a, W: Write + ?Sized> DotWriter<'a, W> {
    pub(crate) fn new(sink: &'a mut W) -> Self {
        DotWriter { sink, written: 0 }
    }

    /// Runs `body` against a fresh counter and converts a sink failure into
    /// [`Error::Write`] carrying the accepted byte count.
    pub(crate) fn run<F>(sink: &'a mut W, body: F) -> Result<u64>
    where
        F: FnOnce(&mut DotWriter<'a, W>) -> io::Result<()>,
    {
        let mut out = DotWriter::new(sink);
        match body(&mut out) {
            Ok(()) => Ok(out.written),
            Err(source) => Err(Error::Write {
                written: out.written,
                source,
            }),
        }
    }

    pub(crate) fn write_str(&mut self, fragment: &str) -> io::Result<()> {
        self.write_bytes(fragment.as_bytes())
    }

    /// Writes one fragment. Empty fragments never reach the sink.
    ///
    /// A short write is continued until the whole fragment is accepted; every byte the
    /// sink takes is counted before any error is returned.
    pub(crate) fn write_bytes(&mut self, mut fragment: &[u8]) -> io::Result<()> {
        while !fragment.is_empty() {
            match self.sink.write(fragment) {
                Ok(0) => {
                    return Err(io::Error::new(
                        ErrorKind::WriteZero,
                        "sink accepted no bytes",
                    ))
                }
                Ok(accepted) => {
                    let accepted = accepted.min(fragment.len());
                    self.written += accepted as u64;
                    fragment = &fragment[accepted..];
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
