//! crates/class-debug/src/error.rs
//!
//! Error types for registry and logger operations.

use std::io;

use debug_filter::FilterError;
use thiserror::Error;

/// Result type for class debug operations.
pub type DebugResult<T> = Result<T, DebugError>;

/// Errors that can occur while configuring or writing debug channels.
#[derive(Debug, Error)]
pub enum DebugError {
    /// A namespace pattern could not be compiled.
    #[error("invalid namespace filter: {0}")]
    Filter(
        #[from]
        #[source]
        FilterError,
    ),
    /// Writing to the debug sink failed.
    #[error("I/O error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    /// A global tracing subscriber was already installed.
    #[cfg(feature = "tracing")]
    #[error("tracing subscriber already installed: {0}")]
    SubscriberInit(
        #[from]
        #[source]
        tracing_subscriber::util::TryInitError,
    ),
}
