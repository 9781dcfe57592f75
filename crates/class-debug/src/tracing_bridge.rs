//! crates/class-debug/src/tracing_bridge.rs
//! Bridge between the tracing crate and namespaced debug channels.
//!
//! [`NamespaceLayer`] lets code that already uses `tracing` macros write into
//! the same channels as attached loggers: an event whose target is a
//! namespace tag is rendered as a `<tag> <message>` line on the registry's
//! sink when the registry's filter enables that tag. Unlike attached
//! loggers, the filter is consulted for every event.
//!
//! ```rust,ignore
//! use class_debug::{Registry, init_tracing};
//!
//! init_tracing(Registry::global().clone())?;
//! tracing::debug!(target: "mh:Scheduler", "tick {}", 3);
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::DebugResult;
use crate::registry::Registry;

/// Targets under this prefix are the crate's own diagnostics and mirrored
/// logger lines; routing them again would duplicate output.
const OWN_TARGET_PREFIX: &str = "class_debug";

/// A tracing layer that writes namespace-targeted events to a registry.
pub struct NamespaceLayer {
    registry: Arc<Registry>,
}

impl NamespaceLayer {
    /// Creates a layer writing through `registry`.
    #[must_use]
    pub const fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Returns the registry this layer writes to.
    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    fn accepts(&self, target: &str) -> bool {
        !target.starts_with(OWN_TARGET_PREFIX) && self.registry.is_enabled(target)
    }
}

impl fmt::Debug for NamespaceLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceLayer")
            .field("registry", &self.registry)
            .finish()
    }
}

impl<S> Layer<S> for NamespaceLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !self.accepts(target) {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let _ = self.registry.sink().write_line(target, visitor.finish());
    }
}

/// Collects the `message` field followed by any other fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Installs a global subscriber that routes namespace-targeted events
/// into `registry`.
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(registry: Arc<Registry>) -> DebugResult<()> {
    tracing_subscriber::registry()
        .with(NamespaceLayer::new(registry))
        .try_init()?;
    Ok(())
}

/// Like [`init_tracing`], with an additional filter layer in front.
///
/// ```rust,ignore
/// use class_debug::{Registry, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(Registry::global().clone(), EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(registry: Arc<Registry>, filter: F) -> DebugResult<()>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(NamespaceLayer::new(registry))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use debug_filter::NamespaceFilter;
    use debug_sink::SharedSink;
    use test_support::CaptureBuffer;

    fn layer(spec: &str) -> (NamespaceLayer, CaptureBuffer) {
        let capture = CaptureBuffer::new();
        let registry = Registry::new(
            NamespaceFilter::parse(spec).expect("valid filter"),
            SharedSink::new(capture.clone()),
        );
        (NamespaceLayer::new(Arc::new(registry)), capture)
    }

    #[test]
    fn accepts_enabled_namespace_targets() {
        let (layer, _) = layer("mh:*");
        assert!(layer.accepts("mh:Widget"));
        assert!(!layer.accepts("other:Widget"));
    }

    #[test]
    fn rejects_own_targets_even_when_enabled() {
        let (layer, _) = layer("*");
        assert!(!layer.accepts("class_debug"));
        assert!(!layer.accepts("class_debug::attach"));
        assert!(layer.accepts("anything"));
    }

    #[test]
    fn routes_enabled_events_to_the_sink() {
        let (layer, capture) = layer("mh:*");
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "mh:Scheduler", "tick {}", 3);
            tracing::debug!(target: "mh:Scheduler", queued = 2, "idle");
            tracing::debug!(target: "app:Quiet", "hidden");
        });

        assert_eq!(capture.lines(), ["mh:Scheduler tick 3", "mh:Scheduler idle queued=2"]);
    }

    #[test]
    fn visitor_without_message_keeps_fields() {
        let visitor = MessageVisitor {
            message: String::new(),
            fields: "a=1".to_owned(),
        };
        assert_eq!(visitor.finish(), "a=1");
    }
}
