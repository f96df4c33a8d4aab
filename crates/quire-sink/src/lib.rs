//! Page sink abstraction for Quire.
//!
//! This crate provides a [`PageSink`] trait for persisting rendered pages,
//! keeping the renderer free of I/O. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem, object stores)
//! - **Per-page failures** that never abort other writes
//!
//! # Architecture
//!
//! The crate provides:
//! - [`PageSink`] trait with a single `write(slug, content)` method
//! - [`FsSink`] writing `{slug}.html` files into an output directory
//! - [`MockSink`] for testing (behind `mock` feature flag)

mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod sink;

pub use fs::FsSink;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSink;
pub use sink::{PageSink, SinkError, SinkErrorKind};
