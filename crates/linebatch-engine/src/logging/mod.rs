//! Logging utilities.
//!
//! Library code only talks to the `log` facade; this module wires up
//! `env_logger` for binaries and tests that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
