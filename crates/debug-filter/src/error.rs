use thiserror::Error;

/// Error produced when a namespace pattern cannot be compiled into a matcher.
#[derive(Debug, Error)]
#[error("failed to compile namespace pattern '{pattern}': {source}")]
pub struct FilterError {
    pattern: String,
    #[source]
    source: globset::Error,
}

impl FilterError {
    /// Creates a new [`FilterError`] for the given pattern and source error.
    pub(crate) fn new(pattern: String, source: globset::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::FilterError;
    use globset::GlobBuilder;
    use std::error::Error as _;

    #[test]
    fn filter_error_preserves_pattern_and_source() {
        let glob_err = GlobBuilder::new("[").build().unwrap_err();
        let error = FilterError::new("[".into(), glob_err.clone());

        assert_eq!(error.pattern(), "[");
        assert!(error.to_string().contains("failed to compile"));
        assert!(error.source().is_some());
        assert_eq!(error.source().unwrap().to_string(), glob_err.to_string());
    }
}
