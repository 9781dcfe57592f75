//! crates/class-debug/src/config.rs
//! Construction settings for attacher types.

use std::sync::Arc;

use debug_filter::{DEFAULT_ENV_VAR, NamespaceFilter};
use debug_sink::{LineMode, SharedSink};

use crate::DEFAULT_PREFIX;
use crate::attacher::DebugClass;
use crate::error::DebugResult;
use crate::registry::Registry;

/// Settings for building a [`DebugClass`] with its own registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DebugConfig {
    /// Default tag prefix.
    pub prefix: String,
    /// Display name of the attacher type.
    pub name: String,
    /// Environment variable holding the namespace filter.
    pub env_var: String,
    /// Whether emitted lines end with a newline.
    pub line_mode: LineMode,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            name: "ClassDebug".to_owned(),
            env_var: DEFAULT_ENV_VAR.to_owned(),
            line_mode: LineMode::WithNewline,
        }
    }
}

impl DebugConfig {
    /// Sets the default prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the environment variable read for the filter.
    #[must_use]
    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    /// Sets the line mode.
    #[must_use]
    pub const fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Builds an attacher type with a fresh registry writing to standard
    /// error, filtered by the configured environment variable.
    pub fn build(&self) -> DebugResult<DebugClass> {
        let filter = NamespaceFilter::from_var(&self.env_var)?;
        let sink = SharedSink::with_line_mode(std::io::stderr(), self.line_mode);
        Ok(self.build_with_registry(Arc::new(Registry::new(filter, sink))))
    }

    /// Builds an attacher type bound to an existing registry.
    ///
    /// The registry's filter and sink are used as they are; `env_var` and
    /// `line_mode` are ignored.
    #[must_use]
    pub fn build_with_registry(&self, registry: Arc<Registry>) -> DebugClass {
        DebugClass::from_parts(self.name.clone(), self.prefix.clone(), registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET_VAR: &str = "CLASS_DEBUG_CONFIG_TEST_UNSET";

    #[test]
    fn defaults_match_base_type() {
        let config = DebugConfig::default();
        assert_eq!(config.prefix, "mh");
        assert_eq!(config.name, "ClassDebug");
        assert_eq!(config.env_var, "DEBUG");
        assert_eq!(config.line_mode, LineMode::WithNewline);
    }

    #[test]
    fn builders_override_fields() {
        let config = DebugConfig::default()
            .with_prefix("svc")
            .with_name("Service")
            .with_env_var("SVC_DEBUG")
            .with_line_mode(LineMode::WithoutNewline);

        assert_eq!(config.prefix, "svc");
        assert_eq!(config.name, "Service");
        assert_eq!(config.env_var, "SVC_DEBUG");
        assert_eq!(config.line_mode, LineMode::WithoutNewline);
    }

    #[test]
    fn build_reads_unset_variable_as_disabled() {
        let class = DebugConfig::default()
            .with_prefix("cfg")
            .with_env_var(UNSET_VAR)
            .build()
            .expect("unset variable is valid");

        assert_eq!(class.default_prefix(), "cfg");
        assert!(class.registry().filter().is_empty());
        assert!(class.registry().is_empty());
    }

    #[test]
    fn build_with_registry_shares_it() {
        let registry = Arc::new(Registry::default());
        let class = DebugConfig::default()
            .with_name("Shared")
            .build_with_registry(Arc::clone(&registry));

        assert_eq!(class.name(), "Shared");
        assert!(Arc::ptr_eq(class.registry(), &registry));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_document_with_defaults() {
        let config: DebugConfig =
            serde_json::from_str(r#"{"prefix":"json"}"#).expect("valid config");
        assert_eq!(config.prefix, "json");
        assert_eq!(config.env_var, "DEBUG");

        let text = serde_json::to_string(&config).expect("serializes");
        let back: DebugConfig = serde_json::from_str(&text).expect("round trips");
        assert_eq!(back, config);
    }
}
