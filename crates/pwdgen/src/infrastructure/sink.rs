//! `io::Write` adapter for the printer's sink interface.
//!
//! The printer treats its sink as infallible.  [`WriterSink`] keeps that
//! contract by remembering the first write error instead of returning it;
//! later chunks are dropped.  The caller collects the error with
//! [`WriterSink::finish`] once printing is over.

use std::io::{self, Write};

use pwdgen_core::PasswordSink;
use tracing::warn;

/// Writes formatted password chunks to an underlying writer.
pub struct WriterSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error seen while writing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> PasswordSink for WriterSink<W> {
    fn write_chunk(&mut self, chunk: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.writer.write_all(chunk.as_bytes()) {
            warn!("output write failed, discarding remaining passwords: {e}");
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `capacity` bytes, then fails every write.
    struct ShortWriter {
        written: Vec<u8>,
        capacity: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.capacity {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_writes_chunks_in_order() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_chunk("abc ");
        sink.write_chunk("def\n");

        let bytes = sink.finish().expect("vec writes never fail");

        assert_eq!(bytes, b"abc def\n");
    }

    #[test]
    fn test_writer_sink_reports_first_error_and_stops_writing() {
        // Arrange
        let mut sink = WriterSink::new(ShortWriter {
            written: Vec::new(),
            capacity: 4,
        });

        // Act
        sink.write_chunk("abc ");
        sink.write_chunk("def\n");
        sink.write_chunk("g\n");
        let result = sink.finish();

        // Assert
        let err = result.err().expect("second chunk must fail");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_writer_sink_drops_chunks_after_failure() {
        let mut sink = WriterSink::new(ShortWriter {
            written: Vec::new(),
            capacity: 4,
        });

        sink.write_chunk("abc ");
        sink.write_chunk("defgh\n");
        sink.write_chunk("i\n");

        assert_eq!(sink.writer.written, b"abc ");
    }
}
