//! Logger setup for binaries and tests.
//!
//! The library itself only emits through the `log` facade; hosts that already
//! install a logger can skip this module entirely.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
