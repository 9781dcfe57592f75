use std::fmt;

/// Action taken when a pattern matches a tag.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PatternAction {
    /// Enable the matching tag.
    Enable,
    /// Skip the matching tag even when an enable pattern also matches.
    Skip,
}

impl PatternAction {
    /// Returns the token prefix used when rendering a pattern of this action.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Enable => "",
            Self::Skip => "-",
        }
    }
}

impl fmt::Display for PatternAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enable => f.write_str("enable"),
            Self::Skip => f.write_str("skip"),
        }
    }
}
