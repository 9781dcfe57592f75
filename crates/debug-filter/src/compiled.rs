use globset::{GlobBuilder, GlobMatcher};

use crate::{FilterError, NamespacePattern, PatternAction};

/// A [`NamespacePattern`] compiled into a glob matcher.
#[derive(Clone, Debug)]
pub(crate) struct CompiledPattern {
    pub(crate) action: PatternAction,
    matcher: GlobMatcher,
}

impl CompiledPattern {
    pub(crate) fn new(pattern: &NamespacePattern) -> Result<Self, FilterError> {
        let expression = glob_expression(&pattern.pattern);
        let glob = GlobBuilder::new(&expression)
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|error| FilterError::new(pattern.pattern.clone(), error))?;

        Ok(Self {
            action: pattern.action,
            matcher: glob.compile_matcher(),
        })
    }

    pub(crate) fn matches(&self, tag: &str) -> bool {
        self.matcher.is_match(tag)
    }
}

/// Translates pattern text into a glob where only `*` is special.
///
/// Runs of `*` collapse into one so globset never sees a recursive `**`
/// outside a path component.
pub(crate) fn glob_expression(pattern: &str) -> String {
    let mut expression = String::with_capacity(pattern.len() + 4);
    let mut previous_star = false;

    for ch in pattern.chars() {
        match ch {
            '*' => {
                if !previous_star {
                    expression.push('*');
                }
                previous_star = true;
                continue;
            }
            '?' | '[' | ']' | '{' | '}' | '\\' => {
                expression.push('\\');
                expression.push(ch);
            }
            _ => expression.push(ch),
        }
        previous_star = false;
    }

    expression
}
