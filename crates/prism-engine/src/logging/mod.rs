//! Logging utilities.
//!
//! The engine itself only speaks the `log` facade; this module wires up
//! `env_logger` for binaries that drive it.

mod init;

pub use init::{init_logging, LoggingConfig};
