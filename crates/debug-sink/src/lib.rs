#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/debug-sink/src/lib.rs
//!
//! # Overview
//!
//! `debug-sink` renders namespaced debug lines into arbitrary writers. Every
//! line has the shape `<tag> <message>`, for example
//! `mh:Widget rendering 3 children`, and by default ends with a newline.
//!
//! # Design
//!
//! The crate exposes [`DebugSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor. Each sink keeps a scratch buffer that is
//! reused whenever a line is rendered so the complete line reaches the writer
//! in a single `write_all` call. Callers control whether rendered lines end
//! with a newline by selecting a [`LineMode`].
//!
//! [`SharedSink`] wraps a boxed sink behind an `Arc<Mutex<_>>` so every
//! logger created by one registry writes through the same destination. The
//! writer can be swapped at runtime and existing loggers follow.
//!
//! # Invariants
//!
//! - One rendered line is handed to the writer as one buffer, so concurrent
//!   loggers sharing a [`SharedSink`] never interleave within a line.
//! - `LineMode::WithNewline` is the default.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use debug_sink::{DebugSink, LineMode};
//!
//! let mut sink = DebugSink::new(Vec::new());
//! sink.write_line("mh:Widget", "created").unwrap();
//! sink.write_line("mh:Widget[7]", format_args!("{} children", 3)).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "mh:Widget created\nmh:Widget[7] 3 children\n");
//!
//! let mut bare = DebugSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! bare.write_line("mh:Widget", "done").unwrap();
//! assert_eq!(bare.into_inner(), b"mh:Widget done".to_vec());
//! ```

mod line_mode;
mod shared;
mod sink;

pub use line_mode::LineMode;
pub use shared::SharedSink;
pub use sink::DebugSink;
