//! crates/class-debug/src/macros.rs
//! Declarative helpers for implementing the target traits and for
//! formatting into loggers.

/// Implements [`DebugTarget`](crate::DebugTarget), and optionally
/// [`DebugInstance`](crate::DebugInstance), for a type.
///
/// The label defaults to the type's name as written. `slot = field` names
/// a [`DebugSlot`](crate::DebugSlot) field and adds the instance impl.
///
/// ```
/// use class_debug::{DebugSlot, debug_target};
///
/// struct Plain;
/// debug_target!(Plain);
///
/// struct Renamed;
/// debug_target!(Renamed, "Alias");
///
/// struct Session {
///     debug: DebugSlot,
/// }
/// debug_target!(Session, slot = debug);
///
/// struct Conn {
///     log: DebugSlot,
/// }
/// debug_target!(Conn, "Connection", slot = log);
///
/// use class_debug::DebugTarget;
/// assert_eq!(Plain::LABEL, "Plain");
/// assert_eq!(Renamed::LABEL, "Alias");
/// assert_eq!(Conn::LABEL, "Connection");
/// ```
#[macro_export]
macro_rules! debug_target {
    ($ty:ty, slot = $field:ident) => {
        $crate::debug_target!($ty, ::core::stringify!($ty), slot = $field);
    };
    ($ty:ty, $label:expr, slot = $field:ident) => {
        $crate::debug_target!($ty, $label);

        impl $crate::DebugInstance for $ty {
            fn debug_slot(&self) -> &$crate::DebugSlot {
                &self.$field
            }

            fn debug_slot_mut(&mut self) -> &mut $crate::DebugSlot {
                &mut self.$field
            }
        }
    };
    ($ty:ty) => {
        $crate::debug_target!($ty, ::core::stringify!($ty));
    };
    ($ty:ty, $label:expr) => {
        impl $crate::DebugTarget for $ty {
            const LABEL: &'static str = $label;
        }
    };
}

/// Formats a message into a logger, skipping the formatting entirely when
/// the logger is the no-op logger.
///
/// Accepts a `Logger` or a reference to one.
///
/// ```
/// use class_debug::{Logger, debug_log};
///
/// let quiet = Logger::noop();
/// debug_log!(quiet, "never formatted {}", 1);
/// debug_log!(&quiet, "nor this");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        if logger.is_active() {
            logger.log(::core::format_args!($($arg)+));
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::{DebugInstance, DebugSlot, DebugTarget, Logger};

    struct Plain;
    debug_target!(Plain);

    struct Labeled;
    debug_target!(Labeled, "Custom");

    struct Holder {
        slot: DebugSlot,
    }
    debug_target!(Holder, slot = slot);

    struct LabeledHolder {
        inner: DebugSlot,
    }
    debug_target!(LabeledHolder, "Held", slot = inner);

    mod nested {
        pub struct Inner;
    }
    debug_target!(nested::Inner, "Inner");

    #[test]
    fn labels_follow_macro_arguments() {
        assert_eq!(Plain::LABEL, "Plain");
        assert_eq!(Labeled::LABEL, "Custom");
        assert_eq!(Holder::LABEL, "Holder");
        assert_eq!(LabeledHolder::LABEL, "Held");
        assert_eq!(nested::Inner::LABEL, "Inner");
    }

    #[test]
    fn slot_accessors_reach_the_named_field() {
        let mut holder = LabeledHolder {
            inner: DebugSlot::new(),
        };
        assert!(!holder.debug_slot().is_attached());
        assert!(holder.debug_slot_mut().take().is_none());
        assert!(holder.debug().is_none());
        let holder = Holder {
            slot: DebugSlot::new(),
        };
        assert!(holder.debugr().is_none());
    }

    #[test]
    fn debug_log_skips_noop_loggers() {
        let logger = Logger::noop();
        let mut formatted = false;
        debug_log!(logger, "{}", {
            formatted = true;
            1
        });
        assert!(!formatted);
    }
}
