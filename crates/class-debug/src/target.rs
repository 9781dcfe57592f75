//! crates/class-debug/src/target.rs
//!
//! Traits implemented by types that receive debug channels.

use crate::logger::{DebugPair, Logger};

/// A type that can carry a type-level debug channel.
///
/// [`LABEL`](Self::LABEL) is the default tag suffix. It is usually the type
/// name, but any string is accepted, including the empty string.
/// Implement it with [`debug_target!`](crate::debug_target).
pub trait DebugTarget: 'static {
    /// Default tag suffix for this type.
    const LABEL: &'static str;
}

/// A type whose values carry their own debug channel.
///
/// Values own a [`DebugSlot`] which stays empty until an instance
/// attachment fills it; type-level attachments never touch it.
pub trait DebugInstance: DebugTarget {
    /// Returns the value's slot.
    fn debug_slot(&self) -> &DebugSlot;

    /// Returns the value's slot mutably.
    fn debug_slot_mut(&mut self) -> &mut DebugSlot;

    /// Returns the guarded instance logger, if attached.
    fn debug(&self) -> Option<&Logger> {
        self.debug_slot().debug()
    }

    /// Returns the raw instance logger, if attached.
    fn debugr(&self) -> Option<&Logger> {
        self.debug_slot().debugr()
    }
}

/// Storage for a value's own logger pair.
#[derive(Clone, Debug, Default)]
pub struct DebugSlot {
    pair: Option<DebugPair>,
}

impl DebugSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pair: None }
    }

    /// Reports whether an instance attachment has filled the slot.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.pair.is_some()
    }

    /// Returns the installed pair.
    #[must_use]
    pub const fn pair(&self) -> Option<&DebugPair> {
        self.pair.as_ref()
    }

    /// Returns the guarded logger.
    #[must_use]
    pub fn debug(&self) -> Option<&Logger> {
        self.pair.as_ref().map(DebugPair::debug)
    }

    /// Returns the raw logger.
    #[must_use]
    pub fn debugr(&self) -> Option<&Logger> {
        self.pair.as_ref().map(DebugPair::debugr)
    }

    pub(crate) fn install(&mut self, pair: DebugPair) {
        self.pair = Some(pair);
    }

    /// Empties the slot and returns what it held.
    pub const fn take(&mut self) -> Option<DebugPair> {
        self.pair.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    #[test]
    fn new_slot_is_empty() {
        let slot = DebugSlot::new();
        assert!(!slot.is_attached());
        assert!(slot.debug().is_none());
        assert!(slot.debugr().is_none());
        assert!(slot.pair().is_none());
    }

    #[test]
    fn install_then_take() {
        let mut slot = DebugSlot::default();
        slot.install(DebugPair::new(Tag::class("mh", "X"), Logger::noop(), false));
        assert!(slot.is_attached());
        assert!(slot.debug().is_some_and(Logger::is_noop));

        let pair = slot.take().expect("pair installed");
        assert_eq!(pair.tag().as_str(), "mh:X");
        assert!(!slot.is_attached());
    }
}
