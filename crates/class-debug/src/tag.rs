//! crates/class-debug/src/tag.rs
//!
//! Fully-qualified channel names of the form `prefix:suffix` or
//! `prefix:suffix[data]`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

/// Name of a debug channel.
///
/// A tag is built from a prefix and a suffix joined by `:`, optionally
/// followed by bracketed instance data. The components stay addressable
/// after construction even when the prefix or suffix themselves contain
/// `:` or brackets. Equality, ordering and hashing consider only the
/// rendered text, so a `HashMap<Tag, _>` can be queried with a `&str`.
///
/// # Examples
///
/// ```
/// use class_debug::Tag;
///
/// let tag = Tag::instance("mh", "Widget", Some("42"));
/// assert_eq!(tag.as_str(), "mh:Widget[42]");
/// assert_eq!(tag.prefix(), "mh");
/// assert_eq!(tag.suffix(), "Widget");
/// assert_eq!(tag.data(), Some("42"));
/// ```
#[derive(Clone)]
pub struct Tag {
    text: String,
    prefix_len: usize,
    suffix_end: usize,
}

impl Tag {
    /// Builds a class-level tag `prefix:suffix`.
    #[must_use]
    pub fn class(prefix: &str, suffix: &str) -> Self {
        let mut text = String::with_capacity(prefix.len() + suffix.len() + 1);
        text.push_str(prefix);
        text.push(':');
        text.push_str(suffix);
        Self {
            prefix_len: prefix.len(),
            suffix_end: text.len(),
            text,
        }
    }

    /// Builds an instance-level tag.
    ///
    /// `[data]` is appended only when `data` is present and non-empty.
    #[must_use]
    pub fn instance(prefix: &str, label: &str, data: Option<&str>) -> Self {
        let mut tag = Self::class(prefix, label);
        if let Some(data) = data.filter(|data| !data.is_empty()) {
            tag.text.reserve(data.len() + 2);
            tag.text.push('[');
            tag.text.push_str(data);
            tag.text.push(']');
        }
        tag
    }

    /// Returns the rendered tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the part before the first separator.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.text[..self.prefix_len]
    }

    /// Returns the suffix, without instance data.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.text[self.suffix_range()]
    }

    /// Returns the bracketed instance data, if any.
    #[must_use]
    pub fn data(&self) -> Option<&str> {
        if self.suffix_end == self.text.len() {
            return None;
        }
        // Layout is `[data]` after the suffix.
        Some(&self.text[self.suffix_end + 1..self.text.len() - 1])
    }

    /// Reports whether this tag carries instance data.
    #[must_use]
    pub fn is_instance(&self) -> bool {
        self.data().is_some()
    }

    /// Consumes the tag and returns the rendered string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    const fn suffix_range(&self) -> Range<usize> {
        self.prefix_len + 1..self.suffix_end
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.text).finish()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Tag {}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn class_tag_joins_with_colon() {
        let tag = Tag::class("mh", "Widget");
        assert_eq!(tag.as_str(), "mh:Widget");
        assert_eq!(tag.prefix(), "mh");
        assert_eq!(tag.suffix(), "Widget");
        assert_eq!(tag.data(), None);
        assert!(!tag.is_instance());
    }

    #[test]
    fn empty_components_are_kept() {
        let tag = Tag::class("", "");
        assert_eq!(tag.as_str(), ":");
        assert_eq!(tag.prefix(), "");
        assert_eq!(tag.suffix(), "");
    }

    #[test]
    fn instance_tag_brackets_data() {
        let tag = Tag::instance("app", "Conn", Some("7"));
        assert_eq!(tag.as_str(), "app:Conn[7]");
        assert_eq!(tag.data(), Some("7"));
        assert!(tag.is_instance());
    }

    #[test]
    fn empty_data_is_omitted() {
        assert_eq!(Tag::instance("app", "Conn", Some("")).as_str(), "app:Conn");
        assert_eq!(Tag::instance("app", "Conn", None).as_str(), "app:Conn");
    }

    #[test]
    fn components_survive_embedded_separators() {
        let tag = Tag::instance("a:b", "C:D", Some("x]y"));
        assert_eq!(tag.as_str(), "a:b:C:D[x]y]");
        assert_eq!(tag.prefix(), "a:b");
        assert_eq!(tag.suffix(), "C:D");
        assert_eq!(tag.data(), Some("x]y"));
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Tag::class("mh", "Widget"), 1);
        assert_eq!(map.get("mh:Widget"), Some(&1));
        assert_eq!(map.get("mh:Other"), None);
    }

    #[test]
    fn equality_ignores_component_boundaries() {
        assert_eq!(Tag::class("a:b", "c"), Tag::class("a", "b:c"));
        assert_eq!(Tag::class("a", "b"), "a:b");
    }

    proptest! {
        #[test]
        fn rendered_tag_is_prefix_colon_suffix(
            prefix in "[a-z:]{0,8}",
            suffix in "[A-Za-z]{0,8}",
        ) {
            let tag = Tag::class(&prefix, &suffix);
            prop_assert_eq!(tag.as_str(), format!("{prefix}:{suffix}"));
            prop_assert_eq!(tag.prefix(), prefix.as_str());
            prop_assert_eq!(tag.suffix(), suffix.as_str());
        }

        #[test]
        fn instance_data_is_recoverable(
            prefix in "[a-z]{1,6}",
            label in "[A-Za-z]{1,6}",
            data in "[0-9a-z\\[\\]]{1,6}",
        ) {
            let tag = Tag::instance(&prefix, &label, Some(&data));
            prop_assert_eq!(tag.as_str(), format!("{prefix}:{label}[{data}]"));
            prop_assert_eq!(tag.data(), Some(data.as_str()));
            prop_assert_eq!(tag.suffix(), label.as_str());
        }
    }
}
