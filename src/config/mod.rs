//! Roundtrip-safe model of the Ghostty config file.
//!
//! Parsing, in-place mutation, and serialization of the line-oriented
//! `key = value` dialect, preserving comments, blank lines, ordering, and
//! unknown directives exactly as the user wrote them.

/// Ordered document model and line classification.
mod document;
/// Entry variants for individual lines.
mod entry;
/// Whole-file read, atomic write, and session backup.
mod io;

pub use document::Document;
pub use entry::{Entry, KeyValueEntry};
pub use io::{ConfigFile, IoFailure, write_atomic};
