//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder methods and source precedence.
//! - Test `.env` loading, path resolution, and error mapping.
//! - Test process environment capture and prefix handling.
//! - Test validation failures surfaced during construction.
//!
//! Does NOT handle:
//! - Typed conversions in isolation (tested in env.rs).
//! - Interpolation in isolation (tested in interpolation.rs).
//!
//! Invariants:
//! - Tests that touch process state use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
