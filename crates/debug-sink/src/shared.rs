use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{DebugSink, LineMode};

type BoxedWriter = Box<dyn Write + Send>;

/// Cloneable handle to a [`DebugSink`] shared by many loggers.
///
/// Every clone writes through the same sink. Replacing the writer with
/// [`set_writer`](Self::set_writer) redirects all clones at once, which is
/// how a registry points its existing loggers at a new destination.
///
/// # Examples
///
/// ```
/// use debug_sink::SharedSink;
///
/// let sink = SharedSink::new(Vec::<u8>::new());
/// let clone = sink.clone();
///
/// clone.write_line("mh:Widget", "hello").unwrap();
/// assert!(sink.ptr_eq(&clone));
/// ```
#[derive(Clone)]
pub struct SharedSink {
    inner: Arc<Mutex<DebugSink<BoxedWriter>>>,
}

impl SharedSink {
    /// Creates a shared sink writing to `writer` with newline-terminated lines.
    #[must_use]
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a shared sink writing to `writer` with the given [`LineMode`].
    #[must_use]
    pub fn with_line_mode<W>(writer: W, line_mode: LineMode) -> Self
    where
        W: Write + Send + 'static,
    {
        let boxed: BoxedWriter = Box::new(writer);
        Self {
            inner: Arc::new(Mutex::new(DebugSink::with_line_mode(boxed, line_mode))),
        }
    }

    /// Creates a shared sink writing to the process's standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    fn lock(&self) -> MutexGuard<'_, DebugSink<BoxedWriter>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes one `<tag> <message>` line.
    ///
    /// `message` is rendered before the sink is locked, so its `Display`
    /// impl may itself log through this sink.
    pub fn write_line<M>(&self, tag: &str, message: M) -> io::Result<()>
    where
        M: fmt::Display,
    {
        let rendered = message.to_string();
        self.write_str_line(tag, &rendered)
    }

    /// Writes one `<tag> <message>` line from an already rendered message.
    pub fn write_str_line(&self, tag: &str, message: &str) -> io::Result<()> {
        self.lock().write_line(tag, message)
    }

    /// Replaces the writer for every clone of this sink and returns the previous one.
    pub fn set_writer<W>(&self, writer: W) -> Box<dyn Write + Send>
    where
        W: Write + Send + 'static,
    {
        self.lock().replace_writer(Box::new(writer))
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub fn line_mode(&self) -> LineMode {
        self.lock().line_mode()
    }

    /// Updates the [`LineMode`] used by every clone.
    pub fn set_line_mode(&self, line_mode: LineMode) {
        self.lock().set_line_mode(line_mode);
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    /// Reports whether both handles refer to the same sink.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SharedSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for SharedSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSink")
            .field("line_mode", &self.line_mode())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use test_support::CaptureBuffer;

    #[test]
    fn clones_write_to_the_same_destination() {
        let capture = CaptureBuffer::new();
        let sink = SharedSink::new(capture.clone());
        let clone = sink.clone();

        sink.write_line("mh:A", "one").expect("write succeeds");
        clone.write_line("mh:B", "two").expect("write succeeds");

        assert_eq!(capture.lines(), ["mh:A one", "mh:B two"]);
    }

    #[test]
    fn set_writer_redirects_existing_clones() {
        let first = CaptureBuffer::new();
        let second = CaptureBuffer::new();
        let sink = SharedSink::new(first.clone());
        let clone = sink.clone();

        clone.write_line("mh:A", "before").expect("write succeeds");
        let _previous = sink.set_writer(second.clone());
        clone.write_line("mh:A", "after").expect("write succeeds");

        assert_eq!(first.lines(), ["mh:A before"]);
        assert_eq!(second.lines(), ["mh:A after"]);
    }

    #[test]
    fn line_mode_is_shared() {
        let capture = CaptureBuffer::new();
        let sink = SharedSink::new(capture.clone());
        sink.clone().set_line_mode(LineMode::WithoutNewline);

        assert_eq!(sink.line_mode(), LineMode::WithoutNewline);
        sink.write_line("mh:A", "x").expect("write succeeds");
        assert_eq!(capture.contents(), "mh:A x");
    }

    #[test]
    fn concurrent_writers_never_split_lines() {
        let capture = CaptureBuffer::new();
        let sink = SharedSink::new(capture.clone());

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for index in 0..50 {
                        sink.write_line("mh:Worker", format_args!("{worker}-{index}"))
                            .expect("write succeeds");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker finishes");
        }

        let lines = capture.lines();
        assert_eq!(lines.len(), 200);
        assert!(lines.iter().all(|line| line.starts_with("mh:Worker ")));
    }

    struct LogsWhileFormatting {
        sink: SharedSink,
    }

    impl fmt::Display for LogsWhileFormatting {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let _ = self.sink.write_line("mh:Inner", "nested");
            f.write_str("outer")
        }
    }

    #[test]
    fn message_display_may_write_to_the_same_sink() {
        let capture = CaptureBuffer::new();
        let sink = SharedSink::new(capture.clone());
        let message = LogsWhileFormatting { sink: sink.clone() };
        let (done, finished) = mpsc::channel();

        thread::spawn(move || {
            let result = sink.write_line("mh:Outer", message);
            let _ = done.send(result.is_ok());
        });

        let ok = finished
            .recv_timeout(Duration::from_secs(5))
            .expect("nested write completes");
        assert!(ok);
        assert_eq!(capture.lines(), ["mh:Inner nested", "mh:Outer outer"]);
    }

    #[test]
    fn distinct_sinks_are_not_ptr_eq() {
        let a = SharedSink::new(Vec::<u8>::new());
        let b = SharedSink::new(Vec::<u8>::new());
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
    }
}
