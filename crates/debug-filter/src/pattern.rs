use std::fmt;

use crate::PatternAction;

/// User-visible namespace pattern consisting of an action and pattern text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NamespacePattern {
    pub(crate) action: PatternAction,
    pub(crate) pattern: String,
}

impl NamespacePattern {
    /// Creates a pattern enabling every tag matched by `pattern`.
    #[must_use]
    pub fn enable(pattern: impl Into<String>) -> Self {
        Self {
            action: PatternAction::Enable,
            pattern: pattern.into(),
        }
    }

    /// Creates a pattern skipping every tag matched by `pattern`.
    #[must_use]
    pub fn skip(pattern: impl Into<String>) -> Self {
        Self {
            action: PatternAction::Skip,
            pattern: pattern.into(),
        }
    }

    /// Parses a single token from a `DEBUG`-style filter string.
    ///
    /// A leading `-` selects [`PatternAction::Skip`]. Returns `None` for tokens
    /// that carry no pattern text (an empty token or a lone `-`).
    ///
    /// # Examples
    /// ```
    /// use debug_filter::{NamespacePattern, PatternAction};
    ///
    /// let pattern = NamespacePattern::from_token("-mh:Noisy").unwrap();
    /// assert_eq!(pattern.action(), PatternAction::Skip);
    /// assert_eq!(pattern.pattern(), "mh:Noisy");
    /// assert!(NamespacePattern::from_token("-").is_none());
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        let (action, text) = match token.strip_prefix('-') {
            Some(rest) => (PatternAction::Skip, rest),
            None => (PatternAction::Enable, token),
        };

        if text.is_empty() {
            return None;
        }

        Some(Self {
            action,
            pattern: text.to_owned(),
        })
    }

    /// Returns the pattern action.
    #[must_use]
    pub const fn action(&self) -> PatternAction {
        self.action
    }

    /// Returns the pattern text without the skip prefix.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` when the pattern skips matching tags.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self.action, PatternAction::Skip)
    }
}

impl fmt::Display for NamespacePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.action.prefix(), self.pattern)
    }
}
