use super::DebugSink;
use std::fmt;
use std::io::{self, Write};

impl<W> DebugSink<W>
where
    W: Write,
{
    fn render_line<M>(&mut self, tag: &str, message: M, append_newline: bool) -> io::Result<()>
    where
        M: fmt::Display,
    {
        self.scratch.clear();
        self.scratch.extend_from_slice(tag.as_bytes());
        self.scratch.push(b' ');
        write!(&mut self.scratch, "{message}")?;
        if append_newline {
            self.scratch.push(b'\n');
        }
        self.writer.write_all(&self.scratch)
    }

    /// Writes a single `<tag> <message>` line using the sink's current [`LineMode`](crate::LineMode).
    pub fn write_line<M>(&mut self, tag: &str, message: M) -> io::Result<()>
    where
        M: fmt::Display,
    {
        self.render_line(tag, message, self.line_mode.append_newline())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
