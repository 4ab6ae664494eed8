//! Output sinks for formatted password chunks.

/// Destination for formatted output.
///
/// The printer hands over one chunk per password: the password followed by
/// either a single space or a newline.  Writing is infallible from the
/// printer's point of view; an implementation backed by a fallible stream is
/// responsible for recording its own failures.
pub trait PasswordSink {
    /// Writes one formatted chunk.
    fn write_chunk(&mut self, chunk: &str);
}

impl<F> PasswordSink for F
where
    F: FnMut(&str),
{
    fn write_chunk(&mut self, chunk: &str) {
        self(chunk)
    }
}

/// A sink that keeps every chunk in memory.
///
/// Useful in tests and anywhere the output has to be inspected before it is
/// shown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    /// Chunks in the order they were written.
    pub chunks: Vec<String>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All chunks concatenated, exactly as a terminal would receive them.
    pub fn output(&self) -> String {
        self.chunks.concat()
    }

    /// The output split into lines (without the trailing newline characters).
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_owned).collect()
    }
}

impl PasswordSink for RecordingSink {
    fn write_chunk(&mut self, chunk: &str) {
        self.chunks.push(chunk.to_owned());
    }
}
