//! crates/class-debug/src/attacher.rs
//!
//! Attacher types ([`DebugClass`]) and attacher instances ([`ClassDebug`]).

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::DEFAULT_PREFIX;
use crate::debug_attach::{trace_attach_class, trace_attach_instance, trace_extend};
use crate::logger::{DebugPair, Logger};
use crate::registry::Registry;
use crate::tag::Tag;
use crate::target::{DebugInstance, DebugTarget};

const BASE_NAME: &str = "ClassDebug";
const EXTENDED_NAME: &str = "Debug";

/// An attacher type: a default prefix, a display name and the registry
/// its attachments populate.
///
/// [`DebugClass::base`] is the root type. [`extend`](Self::extend) derives
/// variants with their own default prefix that share the parent's
/// registry.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use class_debug::{DebugClass, NamespaceFilter, Registry, debug_target};
///
/// struct Pool;
/// debug_target!(Pool);
///
/// let registry = Arc::new(Registry::with_filter(NamespaceFilter::disabled()));
/// let base = DebugClass::with_registry(registry);
/// let net = base.extend("net", None);
///
/// let logger = net.attach_to_class::<Pool>(None, None);
/// assert_eq!(logger.tag().unwrap().as_str(), "net:Pool");
/// assert_eq!(net.name(), "Debug");
/// assert_eq!(base.default_prefix(), "mh");
/// ```
#[derive(Clone)]
pub struct DebugClass {
    name: Cow<'static, str>,
    default_prefix: Cow<'static, str>,
    registry: Arc<Registry>,
}

impl DebugClass {
    /// Returns the base attacher type bound to the global registry.
    #[must_use]
    pub fn base() -> Self {
        Self::with_registry(Arc::clone(Registry::global()))
    }

    /// Returns the base attacher type bound to `registry`.
    #[must_use]
    pub const fn with_registry(registry: Arc<Registry>) -> Self {
        Self {
            name: Cow::Borrowed(BASE_NAME),
            default_prefix: Cow::Borrowed(DEFAULT_PREFIX),
            registry,
        }
    }

    pub(crate) fn from_parts(name: String, default_prefix: String, registry: Arc<Registry>) -> Self {
        Self {
            name: Cow::Owned(name),
            default_prefix: Cow::Owned(default_prefix),
            registry,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the prefix used when none is supplied.
    #[must_use]
    pub fn default_prefix(&self) -> &str {
        &self.default_prefix
    }

    /// Returns the registry shared by this type and everything derived from it.
    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Derives an attacher type with its own default prefix.
    ///
    /// `name` defaults to `"Debug"`. The parent is left unchanged.
    #[must_use]
    pub fn extend(&self, prefix: impl Into<String>, name: Option<&str>) -> Self {
        let name = name.unwrap_or(EXTENDED_NAME);
        let derived = Self::from_parts(name.to_owned(), prefix.into(), Arc::clone(&self.registry));
        trace_extend(&self.name, &derived.name, &derived.default_prefix);
        derived
    }

    /// Creates an attacher instance.
    ///
    /// A missing or empty prefix resolves to the default prefix.
    #[must_use]
    pub fn attacher(&self, prefix: Option<&str>) -> ClassDebug {
        ClassDebug::new(self, prefix)
    }

    /// Creates an attacher instance and attaches `T` through it.
    pub fn setup<T: DebugTarget>(&self, prefix: Option<&str>) -> ClassDebug {
        let attacher = self.attacher(prefix);
        attacher.attach::<T>(None);
        attacher
    }

    /// Attaches a type-level channel to `T` and returns its raw logger.
    ///
    /// Only a missing prefix falls back to the default; an explicit empty
    /// prefix is kept. A missing suffix falls back to `T::LABEL`. The pair
    /// replaces any earlier type-level pair for `T`.
    pub fn attach_to_class<T: DebugTarget>(
        &self,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> Logger {
        let prefix = prefix.unwrap_or(&*self.default_prefix);
        let tag = Tag::class(prefix, suffix.unwrap_or(T::LABEL));
        let pair = self.pair_for(tag);
        trace_attach_class(pair.tag(), T::LABEL, pair.is_enabled());
        let raw = pair.debugr().clone();
        self.registry.install_class::<T>(pair);
        raw
    }

    /// Attaches a channel to one value and returns its raw logger.
    ///
    /// A missing or empty prefix falls back to the default. `data` is
    /// appended as `[data]` when non-empty. Only the value's own slot is
    /// written.
    pub fn attach_to_instance<T: DebugInstance>(
        &self,
        instance: &mut T,
        prefix: Option<&str>,
        data: Option<&str>,
    ) -> Logger {
        let prefix = self.resolve_prefix(prefix);
        let tag = Tag::instance(prefix, T::LABEL, data);
        let pair = self.pair_for(tag);
        trace_attach_instance(pair.tag(), T::LABEL, pair.is_enabled());
        let raw = pair.debugr().clone();
        instance.debug_slot_mut().install(pair);
        raw
    }

    fn resolve_prefix<'a>(&'a self, prefix: Option<&'a str>) -> &'a str {
        prefix
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(&*self.default_prefix)
    }

    fn pair_for(&self, tag: Tag) -> DebugPair {
        let raw = self.registry.logger(&tag);
        let enabled = self.registry.is_enabled(tag.as_str());
        DebugPair::new(tag, raw, enabled)
    }
}

impl Default for DebugClass {
    fn default() -> Self {
        Self::base()
    }
}

impl fmt::Debug for DebugClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugClass")
            .field("name", &self.name)
            .field("default_prefix", &self.default_prefix)
            .finish_non_exhaustive()
    }
}

/// An attacher instance: a resolved prefix bound to the type that built it.
#[derive(Clone, Debug)]
pub struct ClassDebug {
    prefix: String,
    class: DebugClass,
}

impl ClassDebug {
    /// Creates an attacher instance of `class`.
    ///
    /// A missing or empty prefix resolves to the class's default prefix.
    #[must_use]
    pub fn new(class: &DebugClass, prefix: Option<&str>) -> Self {
        Self {
            prefix: class.resolve_prefix(prefix).to_owned(),
            class: class.clone(),
        }
    }

    /// Returns the resolved prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the attacher type this instance was built from.
    #[must_use]
    pub const fn class(&self) -> &DebugClass {
        &self.class
    }

    /// Attaches a type-level channel to `T` under this instance's prefix.
    pub fn attach<T: DebugTarget>(&self, suffix: Option<&str>) -> Logger {
        self.class.attach_to_class::<T>(Some(&self.prefix), suffix)
    }

    /// Attaches a channel to one value under this instance's prefix.
    pub fn instance<T: DebugInstance>(&self, instance: &mut T, data: Option<&str>) -> Logger {
        self.class
            .attach_to_instance(instance, Some(&self.prefix), data)
    }
}
