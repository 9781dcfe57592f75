//! crates/class-debug/src/registry.rs
//!
//! Shared state behind every attacher: the tag table, the per-type side
//! table, the namespace filter and the output sink.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

use debug_filter::{DEFAULT_ENV_VAR, NamespaceFilter};
use debug_sink::SharedSink;

use crate::debug_attach::{trace_filter_changed, trace_filter_fallback, trace_registry_reset};
use crate::error::DebugResult;
use crate::logger::{DebugPair, Logger};
use crate::tag::Tag;

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// Context object owning every channel created by its attachers.
///
/// Loggers are memoized by tag: however many times a tag is attached, at
/// most one [`Logger`] exists for it until [`reset`](Self::reset). Type
/// level attachments are recorded in a side table keyed by [`TypeId`], so
/// the same [`DebugPair`] is reachable from the type
/// ([`class_loggers`](Self::class_loggers)) and from any of its values
/// ([`loggers_of`](Self::loggers_of)).
///
/// Most programs use the process-wide [`Registry::global`]. Tests and
/// embedders that need isolation build their own with [`Registry::new`].
pub struct Registry {
    filter: RwLock<NamespaceFilter>,
    sink: SharedSink,
    loggers: Mutex<HashMap<Tag, Logger>>,
    classes: Mutex<HashMap<TypeId, DebugPair>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(filter: NamespaceFilter, sink: SharedSink) -> Self {
        Self {
            filter: RwLock::new(filter),
            sink,
            loggers: Mutex::new(HashMap::new()),
            classes: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an empty registry writing to standard error.
    #[must_use]
    pub fn with_filter(filter: NamespaceFilter) -> Self {
        Self::new(filter, SharedSink::stderr())
    }

    /// Creates a registry whose filter is read from the `DEBUG` variable.
    pub fn from_env() -> DebugResult<Self> {
        Self::from_var(DEFAULT_ENV_VAR)
    }

    /// Creates a registry whose filter is read from the named variable.
    pub fn from_var(name: &str) -> DebugResult<Self> {
        Ok(Self::with_filter(NamespaceFilter::from_var(name)?))
    }

    /// Returns the process-wide registry.
    ///
    /// Its filter is read from `DEBUG` on first use; an unusable value
    /// leaves every tag disabled.
    pub fn global() -> &'static Arc<Self> {
        GLOBAL.get_or_init(|| {
            let filter = NamespaceFilter::from_var(DEFAULT_ENV_VAR).unwrap_or_else(|error| {
                trace_filter_fallback(DEFAULT_ENV_VAR, &error);
                NamespaceFilter::disabled()
            });
            Arc::new(Self::with_filter(filter))
        })
    }

    fn loggers(&self) -> MutexGuard<'_, HashMap<Tag, Logger>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn classes(&self) -> MutexGuard<'_, HashMap<TypeId, DebugPair>> {
        self.classes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------

    /// Returns a snapshot of the current filter.
    #[must_use]
    pub fn filter(&self) -> NamespaceFilter {
        self.filter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reports whether `tag` is enabled by the current filter.
    #[must_use]
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.filter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_enabled(tag)
    }

    /// Replaces the filter.
    ///
    /// Only later attachments observe the change; pairs created earlier
    /// keep the enabled state they captured.
    pub fn set_filter(&self, filter: NamespaceFilter) {
        trace_filter_changed(&filter);
        *self.filter.write().unwrap_or_else(PoisonError::into_inner) = filter;
    }

    /// Parses `spec` and installs it as the filter.
    pub fn enable(&self, spec: &str) -> DebugResult<()> {
        self.set_filter(NamespaceFilter::parse(spec)?);
        Ok(())
    }

    /// Disables every tag.
    pub fn disable(&self) {
        self.set_filter(NamespaceFilter::disabled());
    }

    /// Re-reads the filter from the `DEBUG` variable.
    pub fn reload_from_env(&self) -> DebugResult<()> {
        self.reload_from_var(DEFAULT_ENV_VAR)
    }

    /// Re-reads the filter from the named variable.
    pub fn reload_from_var(&self, name: &str) -> DebugResult<()> {
        self.set_filter(NamespaceFilter::from_var(name)?);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Sink
    // ------------------------------------------------------------------

    /// Returns the sink shared by this registry's loggers.
    #[must_use]
    pub const fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Redirects every logger of this registry to `writer`.
    pub fn set_writer<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        let _previous = self.sink.set_writer(writer);
    }

    /// Flushes the sink.
    pub fn flush(&self) -> DebugResult<()> {
        self.sink.flush()?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Tag table
    // ------------------------------------------------------------------

    /// Returns the logger for `tag`, creating it on first request.
    pub fn logger(&self, tag: &Tag) -> Logger {
        let mut loggers = self.loggers();
        if let Some(existing) = loggers.get(tag.as_str()) {
            return existing.clone();
        }
        let logger = Logger::new(tag.clone(), self.sink.clone());
        loggers.insert(tag.clone(), logger.clone());
        logger
    }

    /// Returns the logger registered under `tag`, if any.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<Logger> {
        self.loggers().get(tag).cloned()
    }

    /// Reports whether a logger exists for `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.loggers().contains_key(tag)
    }

    /// Returns every registered tag in lexical order.
    #[must_use]
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self.loggers().keys().cloned().collect();
        tags.sort();
        tags
    }

    /// Returns the number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers().len()
    }

    /// Reports whether no tag has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loggers().is_empty()
    }

    // ------------------------------------------------------------------
    // Type side table
    // ------------------------------------------------------------------

    pub(crate) fn install_class<T: 'static>(&self, pair: DebugPair) {
        self.classes().insert(TypeId::of::<T>(), pair);
    }

    /// Returns the pair installed for `T` by its latest type-level attach.
    #[must_use]
    pub fn class_loggers<T: 'static>(&self) -> Option<DebugPair> {
        self.classes().get(&TypeId::of::<T>()).cloned()
    }

    /// Returns the type-level pair shared by every value of `T`.
    #[must_use]
    pub fn loggers_of<T: 'static>(&self, _value: &T) -> Option<DebugPair> {
        self.class_loggers::<T>()
    }

    /// Clears the tag table and the type side table.
    ///
    /// The filter and sink are kept. Loggers already handed out stay
    /// usable but are no longer returned for their tags.
    pub fn reset(&self) {
        let tags = std::mem::take(&mut *self.loggers()).len();
        let classes = std::mem::take(&mut *self.classes()).len();
        trace_registry_reset(tags, classes);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_filter(NamespaceFilter::disabled())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("filter", &self.filter().to_string())
            .field("tags", &self.len())
            .field("classes", &self.classes().len())
            .finish_non_exhaustive()
    }
}
