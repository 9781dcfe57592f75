use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::{FilterError, NamespacePattern, compiled::CompiledPattern};

/// Environment variable consulted by [`NamespaceFilter::from_env`].
pub const DEFAULT_ENV_VAR: &str = "DEBUG";

/// Compiled, immutable set of namespace patterns.
///
/// A `NamespaceFilter` is built from a sequence of [`NamespacePattern`]s via
/// [`from_patterns`](Self::from_patterns) or from a `DEBUG`-style
/// filter string via [`parse`](Self::parse). Each pattern is compiled once
/// and partitioned into enable and skip lists.
///
/// A tag is enabled when no skip pattern matches it and at least one enable
/// pattern does. The default filter enables nothing.
///
/// `NamespaceFilter` is cheaply cloneable (the inner state is behind an
/// [`Arc`]).
///
/// # Examples
///
/// ```
/// use debug_filter::{NamespaceFilter, NamespacePattern};
///
/// let filter = NamespaceFilter::from_patterns([
///     NamespacePattern::skip("mh:Widget[*]"),
///     NamespacePattern::enable("mh:Widget*"),
/// ]).unwrap();
///
/// assert!(filter.is_enabled("mh:Widget"));
/// assert!(!filter.is_enabled("mh:Widget[7]"));
/// assert!(!NamespaceFilter::default().is_enabled("mh:Widget"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NamespaceFilter {
    inner: Arc<FilterInner>,
}

#[derive(Debug, Default)]
struct FilterInner {
    patterns: Vec<NamespacePattern>,
    enables: Vec<CompiledPattern>,
    skips: Vec<CompiledPattern>,
}

impl NamespaceFilter {
    /// Returns a filter that enables no tag.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Builds a [`NamespaceFilter`] from the supplied patterns.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if the glob engine rejects a pattern. Every
    /// metacharacter other than `*` is escaped before compilation, so no
    /// pattern text is known to trigger this today.
    pub fn from_patterns<I>(patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = NamespacePattern>,
    {
        let mut inner = FilterInner::default();

        for pattern in patterns {
            let compiled = CompiledPattern::new(&pattern)?;
            if pattern.is_skip() {
                inner.skips.push(compiled);
            } else {
                inner.enables.push(compiled);
            }
            inner.patterns.push(pattern);
        }

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Parses a `DEBUG`-style filter string.
    ///
    /// Tokens are separated by commas and/or whitespace; empty tokens are
    /// ignored and a leading `-` turns a token into a skip pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when a token cannot be compiled.
    pub fn parse(spec: &str) -> Result<Self, FilterError> {
        Self::from_patterns(
            spec.split(|c: char| c == ',' || c.is_whitespace())
                .filter_map(NamespacePattern::from_token),
        )
    }

    /// Reads the filter string from the `DEBUG` environment variable.
    ///
    /// An unset variable yields [`disabled`](Self::disabled).
    pub fn from_env() -> Result<Self, FilterError> {
        Self::from_var(DEFAULT_ENV_VAR)
    }

    /// Reads the filter string from the named environment variable.
    ///
    /// An unset variable yields [`disabled`](Self::disabled). A value that
    /// is not valid unicode is decoded lossily, so its well-formed patterns
    /// still apply.
    pub fn from_var(name: &str) -> Result<Self, FilterError> {
        match env::var_os(name) {
            Some(spec) => Self::parse(&spec.to_string_lossy()),
            None => Ok(Self::disabled()),
        }
    }

    /// Reports whether `tag` is enabled by this filter.
    #[must_use]
    pub fn is_enabled(&self, tag: &str) -> bool {
        if self.inner.skips.iter().any(|pattern| pattern.matches(tag)) {
            return false;
        }
        self.inner.enables.iter().any(|pattern| pattern.matches(tag))
    }

    /// Returns `true` if the filter holds no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.patterns.is_empty()
    }

    /// Returns the patterns in the order they were supplied.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = &NamespacePattern> {
        self.inner.patterns.iter()
    }
}

impl FromStr for NamespaceFilter {
    type Err = FilterError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Self::parse(spec)
    }
}

impl fmt::Display for NamespaceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, pattern) in self.inner.patterns.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{pattern}")?;
        }
        Ok(())
    }
}
