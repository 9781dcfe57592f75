use std::fmt;

use crate::line_mode::LineMode;

mod writing;

/// Streaming sink that renders `<tag> <message>` lines into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable scratch
/// buffer. Each call to [`write_line`](Self::write_line) renders the line
/// into the scratch buffer and forwards it with a single `write_all`, using
/// the configured [`LineMode`] to decide whether a newline is appended.
///
/// # Examples
///
/// ```
/// use debug_sink::DebugSink;
///
/// let mut sink = DebugSink::new(Vec::new());
/// sink.write_line("mh:Widget", "ready")?;
/// sink.write_line("mh:Widget", "done")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct DebugSink<W> {
    writer: W,
    scratch: Vec<u8>,
    line_mode: LineMode,
}

impl<W> DebugSink<W> {
    /// Creates a new sink that appends a newline after each rendered line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer,
            scratch: Vec::new(),
            line_mode,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Swaps in a new writer and returns the previous one.
    pub fn replace_writer(&mut self, writer: W) -> W {
        std::mem::replace(&mut self.writer, writer)
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Consumes the sink and returns the writer and line mode.
    #[must_use]
    pub fn into_parts(self) -> (W, LineMode) {
        (self.writer, self.line_mode)
    }
}

impl<W> Default for DebugSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for DebugSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
