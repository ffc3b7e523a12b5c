//! Logging setup.
//!
//! Libraries in the workspace log through the `log` facade only; the host
//! binary picks the backend by calling [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
