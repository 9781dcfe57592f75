#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/class-debug/src/lib.rs
//!
//! # Overview
//!
//! `class-debug` gives each type, and each value of such a type, its own
//! toggleable diagnostic channel. A channel is named by a [`Tag`] such as
//! `mh:Widget` or `mh:Widget[42]` and every attachment yields two loggers:
//!
//! - a raw logger (`debugr`) that always writes, and
//! - a guarded logger (`debug`) that is the raw logger when the tag was
//!   enabled at attach time and the no-op logger otherwise.
//!
//! # Design
//!
//! - [`Registry`] is the explicit context owning the tag table, the per-type
//!   side table, the [`NamespaceFilter`] and the [`SharedSink`]. A
//!   process-wide instance is available through [`Registry::global`];
//!   [`initialize`] resets it.
//! - [`DebugClass`] is an attacher type carrying a default prefix.
//!   [`DebugClass::extend`] derives variants that share the registry.
//!   [`ClassDebug`] is an attacher instance with a resolved prefix.
//! - Types opt in through [`DebugTarget`], whose `LABEL` supplies the
//!   default suffix. Types whose values carry their own channel also
//!   implement [`DebugInstance`] by exposing a [`DebugSlot`]. The
//!   [`debug_target!`] macro writes both impls.
//! - With the default `tracing` feature, the crate traces its own attach
//!   operations under `class_debug::attach`, mirrors every emitted line as
//!   a `class_debug` event, and offers [`NamespaceLayer`] to route
//!   namespace-targeted tracing events into a registry.
//!
//! # Invariants
//!
//! - At most one [`Logger`] exists per tag and registry until
//!   [`Registry::reset`]; repeated attachments return the same handle.
//! - The guarded logger's state is fixed at attach time.
//! - Type-level attachments never fill a value's [`DebugSlot`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use class_debug::{
//!     DebugClass, DebugInstance, DebugSlot, NamespaceFilter, Registry, SharedSink, debug_log,
//!     debug_target,
//! };
//!
//! struct Widget {
//!     debug: DebugSlot,
//! }
//! debug_target!(Widget, slot = debug);
//!
//! let registry = Arc::new(Registry::new(
//!     NamespaceFilter::parse("mh:*").unwrap(),
//!     SharedSink::new(Vec::<u8>::new()),
//! ));
//! let base = DebugClass::with_registry(Arc::clone(&registry));
//! let attacher = base.setup::<Widget>(None);
//!
//! let class_pair = registry.class_loggers::<Widget>().unwrap();
//! assert_eq!(class_pair.tag().as_str(), "mh:Widget");
//! assert!(class_pair.is_enabled());
//!
//! let mut widget = Widget { debug: DebugSlot::new() };
//! assert!(widget.debug().is_none());
//!
//! attacher.instance(&mut widget, Some("42"));
//! let logger = widget.debug().unwrap();
//! assert_eq!(logger.tag().unwrap().as_str(), "mh:Widget[42]");
//! debug_log!(logger, "rendered {} children", 3);
//! ```

use std::sync::Arc;

#[macro_use]
mod macros;

mod attacher;
mod config;
mod debug_attach;
mod error;
mod logger;
mod registry;
mod tag;
mod target;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use attacher::{ClassDebug, DebugClass};
pub use config::DebugConfig;
pub use debug_filter::{FilterError, NamespaceFilter, NamespacePattern, PatternAction};
pub use debug_sink::{LineMode, SharedSink};
pub use error::{DebugError, DebugResult};
pub use logger::{DebugPair, Logger};
pub use registry::Registry;
pub use tag::Tag;
pub use target::{DebugInstance, DebugSlot, DebugTarget};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{NamespaceLayer, init_tracing, init_tracing_with_filter};

/// Prefix used when an attacher type is not given one.
pub const DEFAULT_PREFIX: &str = "mh";

/// Resets the process-wide registry and returns it.
///
/// Every tag and type-level pair recorded so far is forgotten; the filter
/// and sink are kept. Calling it repeatedly is harmless.
pub fn initialize() -> &'static Arc<Registry> {
    let registry = Registry::global();
    registry.reset();
    registry
}
