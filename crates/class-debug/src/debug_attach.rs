//! crates/class-debug/src/debug_attach.rs
//!
//! Structured tracing for the attacher's own operations.
//!
//! Every helper is conditionally compiled behind the `tracing` feature flag
//! and collapses to an inline no-op when the feature is disabled, so call
//! sites never need their own `cfg` guards.

use std::fmt;

use crate::tag::Tag;

/// Target for attach, extend and registry events.
#[cfg(feature = "tracing")]
pub(crate) const ATTACH_TARGET: &str = "class_debug::attach";

/// Target for mirrored logger emissions.
#[cfg(feature = "tracing")]
pub(crate) const EMIT_TARGET: &str = "class_debug";

// ============================================================================
// Attach events
// ============================================================================

/// Traces a type-level attachment.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_attach_class(tag: &Tag, label: &str, enabled: bool) {
    tracing::debug!(
        target: ATTACH_TARGET,
        tag = %tag,
        label = label,
        enabled = enabled,
        "attach_class"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_attach_class(_tag: &Tag, _label: &str, _enabled: bool) {}

/// Traces a value-level attachment.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_attach_instance(tag: &Tag, label: &str, enabled: bool) {
    tracing::debug!(
        target: ATTACH_TARGET,
        tag = %tag,
        label = label,
        data = tag.data().unwrap_or_default(),
        enabled = enabled,
        "attach_instance"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_attach_instance(_tag: &Tag, _label: &str, _enabled: bool) {}

/// Traces the derivation of a new attacher type.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_extend(parent: &str, name: &str, prefix: &str) {
    tracing::debug!(
        target: ATTACH_TARGET,
        parent = parent,
        name = name,
        prefix = prefix,
        "extend"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_extend(_parent: &str, _name: &str, _prefix: &str) {}

// ============================================================================
// Registry events
// ============================================================================

/// Traces a registry reset.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_registry_reset(tags: usize, classes: usize) {
    tracing::debug!(
        target: ATTACH_TARGET,
        tags = tags,
        classes = classes,
        "registry_reset"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_registry_reset(_tags: usize, _classes: usize) {}

/// Traces a filter replacement.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_filter_changed(filter: &debug_filter::NamespaceFilter) {
    tracing::debug!(target: ATTACH_TARGET, filter = %filter, "filter_changed");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_filter_changed(_filter: &debug_filter::NamespaceFilter) {}

/// Traces the fallback to a disabled filter when the environment holds
/// an unusable pattern.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_filter_fallback(var: &str, error: &debug_filter::FilterError) {
    tracing::warn!(
        target: ATTACH_TARGET,
        var = var,
        error = %error,
        "filter_fallback"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_filter_fallback(_var: &str, _error: &debug_filter::FilterError) {}

// ============================================================================
// Emission mirror
// ============================================================================

/// Mirrors a logger line as a tracing event.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_emit(tag: &Tag, message: &dyn fmt::Display) {
    tracing::debug!(target: EMIT_TARGET, tag = %tag, "{}", message);
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_emit(_tag: &Tag, _message: &dyn fmt::Display) {}
