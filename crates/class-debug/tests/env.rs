//! Filters read from environment variables.

use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, PoisonError};

use class_debug::{DebugConfig, NamespaceFilter, Registry, debug_target};

const FILTER_VAR: &str = "CLASS_DEBUG_ENV_TEST_FILTER";

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

struct EnvGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &OsStr) -> Self {
        let previous = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    fn remove(key: &'static str) -> Self {
        let previous = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        if let Some(value) = self.previous.take() {
            unsafe {
                std::env::set_var(self.key, value);
            }
        } else {
            unsafe {
                std::env::remove_var(self.key);
            }
        }
    }
}

struct Widget;
debug_target!(Widget);

struct Quiet;
debug_target!(Quiet);

#[test]
fn filter_reads_patterns_from_the_variable() {
    let _lock = serial();
    let _env = EnvGuard::set(FILTER_VAR, OsStr::new("mh:*,-mh:Quiet"));

    let filter = NamespaceFilter::from_var(FILTER_VAR).expect("valid filter");
    assert!(filter.is_enabled("mh:Widget"));
    assert!(!filter.is_enabled("mh:Quiet"));
    assert!(!filter.is_enabled("app:Widget"));
}

#[test]
fn registry_reload_picks_up_a_changed_variable() {
    let _lock = serial();
    let _env = EnvGuard::remove(FILTER_VAR);

    let registry = Registry::from_var(FILTER_VAR).expect("unset is valid");
    assert!(!registry.is_enabled("mh:Widget"));

    let _set = EnvGuard::set(FILTER_VAR, OsStr::new("mh:* -mh:Quiet"));
    registry.reload_from_var(FILTER_VAR).expect("valid filter");
    assert!(registry.is_enabled("mh:Widget"));
    assert!(!registry.is_enabled("mh:Quiet"));
}

#[test]
fn config_build_uses_the_configured_variable() {
    let _lock = serial();
    let _env = EnvGuard::set(FILTER_VAR, OsStr::new("svc:Widget"));

    let class = DebugConfig::default()
        .with_prefix("svc")
        .with_env_var(FILTER_VAR)
        .build()
        .expect("valid filter");
    class.registry().set_writer(Vec::<u8>::new());

    class.attach_to_class::<Widget>(None, None);
    class.attach_to_class::<Quiet>(None, None);
    let widget = class.registry().class_loggers::<Widget>().expect("attached");
    let quiet = class.registry().class_loggers::<Quiet>().expect("attached");

    assert!(widget.is_enabled());
    assert!(!quiet.is_enabled());
}

#[test]
fn unset_variable_leaves_every_tag_disabled() {
    let _lock = serial();
    let _env = EnvGuard::remove(FILTER_VAR);

    let registry = Registry::from_var(FILTER_VAR).expect("unset is valid");
    assert!(registry.filter().is_empty());
    assert_eq!(registry.filter().to_string(), "");
    assert!(!registry.is_enabled("mh:Widget"));
}

#[cfg(unix)]
#[test]
fn non_unicode_value_keeps_its_valid_patterns() {
    use std::os::unix::ffi::OsStrExt;

    let _lock = serial();
    let _env = EnvGuard::set(FILTER_VAR, OsStr::from_bytes(b"mh:Widget,mh:\xFF"));

    let filter = NamespaceFilter::from_var(FILTER_VAR).expect("valid filter");
    assert!(filter.is_enabled("mh:Widget"));
    assert_eq!(filter.patterns().len(), 2);
}
