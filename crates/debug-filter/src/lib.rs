#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `debug-filter` decides which namespaced debug channels are live. A channel
//! is identified by a tag such as `mh:Widget` or `mh:Widget[42]`; the filter
//! holds the enable and skip patterns read from the `DEBUG` environment
//! variable (or supplied programmatically) and answers a single question:
//! is this tag enabled?
//!
//! # Design
//!
//! - [`NamespacePattern`] captures one user-supplied token together with its
//!   [`PatternAction`]. Tokens prefixed with `-` skip matching tags, every
//!   other token enables them.
//! - [`NamespaceFilter`] owns the compiled glob matchers. Construction splits
//!   a filter string on commas and whitespace, compiles each pattern once and
//!   stores the result behind an [`Arc`](std::sync::Arc) so filters are cheap
//!   to clone into every registry that consults them.
//!
//! # Invariants
//!
//! - `*` is the only wildcard. Every other glob metacharacter (`?`, `[`, `]`,
//!   `{`, `}`, `\`) matches literally, so instance tags carrying bracketed
//!   data can be named exactly.
//! - Skip patterns win over enable patterns regardless of their order.
//! - An empty filter enables nothing.
//!
//! # Errors
//!
//! [`NamespaceFilter::parse`] and [`NamespaceFilter::from_patterns`] report
//! [`FilterError`] when the glob engine rejects a pattern. The error carries
//! the offending pattern and the underlying [`globset::Error`]. Because only
//! `*` reaches the engine unescaped, every pattern text accepted by `parse`
//! currently compiles; the error type forwards any future engine failure
//! instead of hiding it.
//!
//! # Examples
//!
//! ```
//! use debug_filter::NamespaceFilter;
//!
//! let filter = NamespaceFilter::parse("mh:*,-mh:Noisy").expect("filter compiles");
//!
//! assert!(filter.is_enabled("mh:Widget"));
//! assert!(filter.is_enabled("mh:Widget[42]"));
//! assert!(!filter.is_enabled("mh:Noisy"));
//! assert!(!filter.is_enabled("app:Widget"));
//! ```

mod action;
mod compiled;
mod error;
mod pattern;
mod set;

pub use action::PatternAction;
pub use error::FilterError;
pub use pattern::NamespacePattern;
pub use set::{DEFAULT_ENV_VAR, NamespaceFilter};
