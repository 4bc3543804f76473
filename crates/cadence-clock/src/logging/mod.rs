//! Logging utilities.
//!
//! The library itself only speaks through the `log` facade; this module gives
//! binaries and tests a one-call `env_logger` setup so they don't each repeat
//! the boilerplate.

mod init;

pub use init::{LoggingConfig, init_logging};
