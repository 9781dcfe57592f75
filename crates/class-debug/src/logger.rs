//! crates/class-debug/src/logger.rs
//!
//! Logger handles and the raw/guarded pair produced by every attachment.

use std::fmt;
use std::sync::Arc;

use debug_sink::SharedSink;

use crate::debug_attach::trace_emit;
use crate::error::DebugResult;
use crate::tag::Tag;

struct LoggerInner {
    tag: Tag,
    sink: SharedSink,
}

/// Handle to one debug channel.
///
/// Cloning is cheap and every clone refers to the same channel, which is
/// observable through [`Logger::ptr_eq`]. A live logger writes
/// `<tag> <message>` lines to its registry's sink; the distinguished
/// [`Logger::noop`] handle accepts any message and does nothing.
#[derive(Clone)]
pub struct Logger {
    inner: Option<Arc<LoggerInner>>,
}

impl Logger {
    pub(crate) fn new(tag: Tag, sink: SharedSink) -> Self {
        Self {
            inner: Some(Arc::new(LoggerInner { tag, sink })),
        }
    }

    /// Returns the no-op logger.
    #[must_use]
    pub const fn noop() -> Self {
        Self { inner: None }
    }

    /// Reports whether this is the no-op logger.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.inner.is_none()
    }

    /// Reports whether messages sent to this logger are written.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns the channel tag, or `None` for the no-op logger.
    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        self.inner.as_deref().map(|inner| &inner.tag)
    }

    /// Writes one line, discarding writer errors.
    pub fn log<M>(&self, message: M)
    where
        M: fmt::Display,
    {
        let _ = self.try_log(message);
    }

    /// Writes one line and reports writer errors.
    ///
    /// The no-op logger always succeeds.
    pub fn try_log<M>(&self, message: M) -> DebugResult<()>
    where
        M: fmt::Display,
    {
        let Some(inner) = self.inner.as_deref() else {
            return Ok(());
        };
        // Rendered once and outside the sink lock; `message` may log itself.
        let rendered = message.to_string();
        inner.sink.write_str_line(inner.tag.as_str(), &rendered)?;
        trace_emit(&inner.tag, &rendered);
        Ok(())
    }

    /// Reports whether both handles refer to the same channel.
    ///
    /// Two no-op loggers compare equal.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag() {
            Some(tag) => f.debug_tuple("Logger").field(&tag.as_str()).finish(),
            None => f.write_str("Logger(noop)"),
        }
    }
}

/// The two loggers installed by an attachment.
///
/// [`debugr`](Self::debugr) always writes. [`debug`](Self::debug) is the
/// same handle when the tag was enabled at attach time and the no-op
/// logger otherwise; later filter changes do not flip it.
#[derive(Clone, Debug)]
pub struct DebugPair {
    tag: Tag,
    raw: Logger,
    guarded: Logger,
}

impl DebugPair {
    pub(crate) fn new(tag: Tag, raw: Logger, enabled: bool) -> Self {
        let guarded = if enabled { raw.clone() } else { Logger::noop() };
        Self { tag, raw, guarded }
    }

    /// Returns the guarded logger.
    #[must_use]
    pub const fn debug(&self) -> &Logger {
        &self.guarded
    }

    /// Returns the raw logger.
    #[must_use]
    pub const fn debugr(&self) -> &Logger {
        &self.raw
    }

    /// Reports whether the tag was enabled when the pair was created.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.guarded.is_active()
    }

    /// Returns the channel tag.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }
}
